//! Ordered collection of splits from one resampling run.

use serde::{Deserialize, Serialize};

use super::scheme::{SchemeConfig, SchemeKind};
use super::split::Split;
use super::tidy::{Role, TidyRecord};

/// All splits produced by one run, with the configuration that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampleSet {
    config: SchemeConfig,
    splits: Vec<Split>,
}

impl ResampleSet {
    pub fn new(config: SchemeConfig, splits: Vec<Split>) -> Self {
        Self { config, splits }
    }

    /// Configuration the set was produced from.
    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    pub fn kind(&self) -> SchemeKind {
        self.config.kind()
    }

    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    pub fn len(&self) -> usize {
        self.splits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Split> {
        self.splits.iter()
    }

    /// Assessment set size of each split, in order.
    pub fn assessment_sizes(&self) -> Vec<usize> {
        self.splits.iter().map(|s| s.assessment().len()).collect()
    }

    /// Row-level records: splits in order, analysis rows then assessment rows.
    pub fn tidy(&self) -> Vec<TidyRecord> {
        let rows: usize = self
            .splits
            .iter()
            .map(|s| s.analysis().len() + s.assessment().len())
            .sum();
        let mut records = Vec::with_capacity(rows);

        for split in &self.splits {
            let id = &split.id().label;
            records.extend(
                split
                    .analysis()
                    .iter()
                    .map(|&row| TidyRecord::new(id, row, Role::Analysis)),
            );
            records.extend(
                split
                    .assessment()
                    .iter()
                    .map(|&row| TidyRecord::new(id, row, Role::Assessment)),
            );
        }
        records
    }
}

impl<'a> IntoIterator for &'a ResampleSet {
    type Item = &'a Split;
    type IntoIter = std::slice::Iter<'a, Split>;

    fn into_iter(self) -> Self::IntoIter {
        self.splits.iter()
    }
}

impl std::fmt::Display for ResampleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# {} resampling, {} splits", self.kind(), self.splits.len())?;
        for split in &self.splits {
            match split.inner() {
                Some(inner) => writeln!(
                    f,
                    "{:<16} {}  inner: {} x {}",
                    split.id(),
                    split,
                    inner.len(),
                    inner.kind()
                )?,
                None => writeln!(f, "{:<16} {}", split.id(), split)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SplitId;

    fn two_fold() -> ResampleSet {
        let config = SchemeConfig::VFold { folds: 2, repeats: 1, strata: false, seed: 0 };
        ResampleSet::new(
            config,
            vec![
                Split::new(vec![2, 3], vec![0, 1], 4, SchemeKind::VFold, SplitId::new("Fold", 1, 2)),
                Split::new(vec![0, 1], vec![2, 3], 4, SchemeKind::VFold, SplitId::new("Fold", 2, 2)),
            ],
        )
    }

    #[test]
    fn test_accessors() {
        let set = two_fold();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.kind(), SchemeKind::VFold);
        assert_eq!(set.assessment_sizes(), vec![2, 2]);
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn test_tidy_order() {
        let records = two_fold().tidy();
        assert_eq!(records.len(), 8);
        assert_eq!(records[0], TidyRecord::new("Fold1", 2, Role::Analysis));
        assert_eq!(records[2], TidyRecord::new("Fold1", 0, Role::Assessment));
        assert_eq!(records[4], TidyRecord::new("Fold2", 0, Role::Analysis));
        assert_eq!(records[7], TidyRecord::new("Fold2", 3, Role::Assessment));
    }

    #[test]
    fn test_display_lists_splits() {
        let text = two_fold().to_string();
        assert!(text.starts_with("# v_fold resampling, 2 splits"));
        assert!(text.contains("Fold1"));
        assert!(text.contains("<2/2/4>"));
    }
}
