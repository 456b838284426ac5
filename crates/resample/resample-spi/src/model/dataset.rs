//! Dataset of row identifiers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Identifier of a row in a caller-owned row store.
pub type RowId = usize;

/// Ordered sequence of distinct row identifiers.
///
/// Resamplers never read row contents. They work on positions `0..len()` and
/// translate positions back to identifiers when building splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<RowId>,
}

impl Dataset {
    /// Dataset whose identifiers are `0..n`.
    pub fn with_len(n: usize) -> Self {
        Self {
            rows: (0..n).collect(),
        }
    }

    /// Dataset from explicit identifiers, in the given order.
    pub fn from_rows(rows: Vec<RowId>) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for &row in &rows {
            if !seen.insert(row) {
                return Err(ConfigurationError::DuplicateRow(row));
            }
        }
        Ok(Self { rows })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identifiers in dataset order.
    pub fn rows(&self) -> &[RowId] {
        &self.rows
    }

    /// Identifier at a position.
    pub fn row(&self, position: usize) -> RowId {
        self.rows[position]
    }

    /// Map positions to identifiers.
    pub fn select(&self, positions: &[usize]) -> Vec<RowId> {
        positions.iter().map(|&p| self.rows[p]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_len_is_identity() {
        let dataset = Dataset::with_len(4);
        assert_eq!(dataset.rows(), &[0, 1, 2, 3]);
        assert_eq!(dataset.len(), 4);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_from_rows_keeps_order() {
        let dataset = Dataset::from_rows(vec![30, 10, 20]).unwrap();
        assert_eq!(dataset.row(0), 30);
        assert_eq!(dataset.select(&[2, 0]), vec![20, 30]);
    }

    #[test]
    fn test_from_rows_rejects_duplicates() {
        let err = Dataset::from_rows(vec![1, 2, 1]).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateRow(1));
    }

    #[test]
    fn test_empty_dataset() {
        assert!(Dataset::with_len(0).is_empty());
    }
}
