//! Row-level projection of resampling output.

use serde::{Deserialize, Serialize};

use super::dataset::RowId;

/// Whether a row is used to fit or to evaluate within a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Analysis,
    Assessment,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Analysis => write!(f, "Analysis"),
            Role::Assessment => write!(f, "Assessment"),
        }
    }
}

/// One `(split, row, role)` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TidyRecord {
    pub split_id: String,
    /// Outer split label, for records of nested inner resamples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_id: Option<String>,
    pub row: RowId,
    pub role: Role,
}

impl TidyRecord {
    pub fn new(split_id: &str, row: RowId, role: Role) -> Self {
        Self {
            split_id: split_id.to_string(),
            outer_id: None,
            row,
            role,
        }
    }

    /// Tag the record with the outer split it belongs to. An existing tag
    /// from a deeper level is kept as a path below `outer_id`.
    pub fn within(mut self, outer_id: &str) -> Self {
        self.outer_id = Some(match self.outer_id.take() {
            Some(deeper) => format!("{} > {}", outer_id, deeper),
            None => outer_id.to_string(),
        });
        self
    }
}
