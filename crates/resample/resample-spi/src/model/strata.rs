//! Per-row categorical labels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Categorical label per row, parallel to a [`Dataset`](super::Dataset).
///
/// Stored factor-style: sorted distinct `levels` and one level code per row.
/// Stratified schemes use the labels as strata; grouped schemes use them as
/// group identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StratumLabels {
    levels: Vec<String>,
    codes: Vec<usize>,
}

impl StratumLabels {
    /// Build labels from one value per row.
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();

        let mut index: BTreeMap<&str, usize> = values.iter().map(|v| (v.as_str(), 0)).collect();
        for (code, slot) in index.values_mut().enumerate() {
            *slot = code;
        }

        let codes = values.iter().map(|v| index[v.as_str()]).collect();
        let levels = index.keys().map(|k| k.to_string()).collect();

        Self { levels, codes }
    }

    /// Number of rows labelled.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Distinct labels in sorted order.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Level code of the row at `position`.
    pub fn code(&self, position: usize) -> usize {
        self.codes[position]
    }

    /// Label of the row at `position`.
    pub fn label(&self, position: usize) -> &str {
        &self.levels[self.codes[position]]
    }

    /// Positions grouped by level, in level order. Empty levels are skipped.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.levels.len()];
        for (position, &code) in self.codes.iter().enumerate() {
            groups[code].push(position);
        }
        groups.retain(|g| !g.is_empty());
        groups
    }

    /// Labels of the rows at `positions`, in that order.
    pub fn subset(&self, positions: &[usize]) -> Self {
        Self::new(positions.iter().map(|&p| self.label(p).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_sorted() {
        let labels = StratumLabels::new(["b", "a", "c", "a"]);
        assert_eq!(labels.levels(), &["a", "b", "c"]);
        assert_eq!(labels.code(0), 1);
        assert_eq!(labels.code(1), 0);
        assert_eq!(labels.label(2), "c");
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn test_groups_by_level() {
        let labels = StratumLabels::new(["x", "y", "x", "y", "x"]);
        assert_eq!(labels.groups(), vec![vec![0, 2, 4], vec![1, 3]]);
    }

    #[test]
    fn test_subset_relabels() {
        let labels = StratumLabels::new(["x", "y", "z", "y"]);
        let subset = labels.subset(&[3, 1]);
        assert_eq!(subset.levels(), &["y"]);
        assert_eq!(subset.len(), 2);
    }
}
