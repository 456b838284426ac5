//! A single analysis/assessment partition.

use serde::{Deserialize, Serialize};

use super::dataset::RowId;
use super::resample_set::ResampleSet;
use super::scheme::SchemeKind;

/// Split identifier: ordinal position plus a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitId {
    /// 1-based repeat number, for repeated schemes.
    pub repeat: Option<usize>,
    /// 1-based ordinal within the repeat (fold, slice, draw).
    pub index: usize,
    /// Zero-padded label such as `Fold03` or `Repeat2/Fold10`.
    pub label: String,
}

impl SplitId {
    /// Label `{prefix}{index}` padded to the width of `count`.
    pub fn new(prefix: &str, index: usize, count: usize) -> Self {
        Self {
            repeat: None,
            index,
            label: padded(prefix, index, count),
        }
    }

    /// Label `Repeat{repeat}/{prefix}{index}`.
    pub fn repeated(repeat: usize, repeats: usize, prefix: &str, index: usize, count: usize) -> Self {
        Self {
            repeat: Some(repeat),
            index,
            label: format!(
                "{}/{}",
                padded("Repeat", repeat, repeats),
                padded(prefix, index, count)
            ),
        }
    }
}

fn padded(prefix: &str, index: usize, count: usize) -> String {
    let width = count.max(1).to_string().len();
    format!("{}{:0width$}", prefix, index, width = width)
}

impl std::fmt::Display for SplitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.label)
    }
}

/// One resample: rows to fit on and rows to evaluate on.
///
/// `analysis` and `assessment` never share an identifier. Bootstrap splits
/// hold `N` analysis entries with repeats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    analysis: Vec<RowId>,
    assessment: Vec<RowId>,
    total: usize,
    scheme: SchemeKind,
    id: SplitId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inner: Option<ResampleSet>,
}

impl Split {
    pub fn new(
        analysis: Vec<RowId>,
        assessment: Vec<RowId>,
        total: usize,
        scheme: SchemeKind,
        id: SplitId,
    ) -> Self {
        Self {
            analysis,
            assessment,
            total,
            scheme,
            id,
            inner: None,
        }
    }

    /// Attach the inner resamples of a nested run.
    pub fn with_inner(mut self, inner: ResampleSet) -> Self {
        self.inner = Some(inner);
        self
    }

    pub fn analysis(&self) -> &[RowId] {
        &self.analysis
    }

    pub fn assessment(&self) -> &[RowId] {
        &self.assessment
    }

    /// Size of the dataset the split was drawn from.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn scheme(&self) -> SchemeKind {
        self.scheme
    }

    pub fn id(&self) -> &SplitId {
        &self.id
    }

    /// Inner resamples, for splits produced by nested resampling.
    pub fn inner(&self) -> Option<&ResampleSet> {
        self.inner.as_ref()
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<{}/{}/{}>",
            self.analysis.len(),
            self.assessment.len(),
            self.total
        )
    }
}
