//! Row-level projections for reporting.

use resample_spi::{ResampleSet, TidyRecord};

/// One record per row per split: splits in order, analysis rows first.
pub fn tidy(set: &ResampleSet) -> Vec<TidyRecord> {
    set.tidy()
}

/// [`tidy`] of the outer splits followed by every inner set, each inner
/// record tagged with its outer split.
pub fn tidy_nested(set: &ResampleSet) -> Vec<TidyRecord> {
    let mut records = set.tidy();
    for split in set {
        if let Some(inner) = split.inner() {
            let outer_id = &split.id().label;
            records.extend(tidy_nested(inner).into_iter().map(|r| r.within(outer_id)));
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::resample;
    use resample_spi::{Dataset, Role, SchemeConfig};

    #[test]
    fn test_tidy_counts_rows() {
        let config = SchemeConfig::VFold { folds: 4, repeats: 1, strata: false, seed: 0 };
        let set = resample(&Dataset::with_len(12), &config, None).unwrap();
        let records = tidy(&set);
        assert_eq!(records.len(), 48);
        assert_eq!(records.iter().filter(|r| r.role == Role::Assessment).count(), 12);
        assert!(records.iter().all(|r| r.outer_id.is_none()));
    }

    #[test]
    fn test_tidy_preserves_stored_order() {
        let config = SchemeConfig::RollingOrigin { initial: 2, assess: 1, cumulative: true, skip: 0 };
        let set = resample(&Dataset::with_len(4), &config, None).unwrap();
        let rows: Vec<(String, usize, Role)> = tidy(&set)
            .into_iter()
            .map(|r| (r.split_id, r.row, r.role))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Slice1".to_string(), 0, Role::Analysis),
                ("Slice1".to_string(), 1, Role::Analysis),
                ("Slice1".to_string(), 2, Role::Assessment),
                ("Slice2".to_string(), 0, Role::Analysis),
                ("Slice2".to_string(), 1, Role::Analysis),
                ("Slice2".to_string(), 2, Role::Analysis),
                ("Slice2".to_string(), 3, Role::Assessment),
            ]
        );
    }

    #[test]
    fn test_tidy_nested_tags_inner_records() {
        let config = SchemeConfig::Nested {
            outer: Box::new(SchemeConfig::VFold { folds: 2, repeats: 1, strata: false, seed: 0 }),
            inner: Box::new(SchemeConfig::InitialTimeSplit { prop: 0.5 }),
        };
        let set = resample(&Dataset::with_len(8), &config, None).unwrap();
        let records = tidy_nested(&set);

        // 2 outer splits x 8 rows, then 2 inner splits x 4 rows
        assert_eq!(records.len(), 24);
        let inner: Vec<_> = records.iter().filter(|r| r.outer_id.is_some()).collect();
        assert_eq!(inner.len(), 8);
        assert_eq!(inner[0].outer_id.as_deref(), Some("Fold1"));
        assert_eq!(inner[7].outer_id.as_deref(), Some("Fold2"));
    }
}
