//! Single-split holdout schemes.

use resample_spi::{
    ConfigurationError, Dataset, ResampleSet, Resampler, Result, SchemeConfig, SchemeKind,
    SplitId, StratumLabels,
};
use tracing::warn;

use crate::rng::stream_rng;
use crate::sampling::{analysis_count, holdout, holdout_count, strata_groups, Partition};
use crate::validate;

/// Random holdout, optionally stratified.
#[derive(Debug, Clone)]
pub struct InitialSplitter {
    prop: f64,
    strata: bool,
    seed: u64,
}

impl InitialSplitter {
    pub fn new(prop: f64) -> Self {
        Self {
            prop,
            strata: false,
            seed: 0,
        }
    }

    pub fn stratified(mut self, strata: bool) -> Self {
        self.strata = strata;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Resampler for InitialSplitter {
    fn resample(&self, dataset: &Dataset, labels: Option<&StratumLabels>) -> Result<ResampleSet> {
        let kind = SchemeKind::InitialSplit;
        validate::non_empty(dataset)?;
        validate::proportion(self.prop)?;
        let labels = validate::labels(kind, self.strata, dataset, labels)?;

        let groups = strata_groups(dataset.len(), labels);
        let take = holdout_count(&groups, self.prop);
        check_not_empty(kind, take, dataset.len())?;
        warn_on_drift(kind, take, dataset.len(), self.prop);

        let part = holdout(&groups, self.prop, &mut stream_rng(self.seed, 0));
        let split = part.into_split(dataset, kind, SplitId::new("Split", 1, 1));
        Ok(ResampleSet::new(self.config(), vec![split]))
    }

    fn config(&self) -> SchemeConfig {
        SchemeConfig::InitialSplit {
            prop: self.prop,
            strata: self.strata,
            seed: self.seed,
        }
    }
}

/// Chronological holdout: leading rows to analysis, trailing rows to assessment.
///
/// The dataset must already be in time order; nothing is sorted here.
#[derive(Debug, Clone)]
pub struct TimeSplitter {
    prop: f64,
}

impl TimeSplitter {
    pub fn new(prop: f64) -> Self {
        Self { prop }
    }
}

impl Resampler for TimeSplitter {
    fn resample(&self, dataset: &Dataset, _labels: Option<&StratumLabels>) -> Result<ResampleSet> {
        let kind = SchemeKind::InitialTimeSplit;
        validate::non_empty(dataset)?;
        validate::proportion(self.prop)?;

        let n = dataset.len();
        let take = analysis_count(n, self.prop);
        check_not_empty(kind, take, n)?;

        let part = Partition {
            analysis: (0..take).collect(),
            assessment: (take..n).collect(),
        };
        let split = part.into_split(dataset, kind, SplitId::new("Split", 1, 1));
        Ok(ResampleSet::new(self.config(), vec![split]))
    }

    fn config(&self) -> SchemeConfig {
        SchemeConfig::InitialTimeSplit { prop: self.prop }
    }
}

pub(crate) fn check_not_empty(kind: SchemeKind, analysis: usize, n: usize) -> Result<()> {
    if analysis == 0 || analysis == n {
        return Err(ConfigurationError::EmptyPartition {
            scheme: kind.to_string(),
            analysis,
            assessment: n - analysis,
        });
    }
    Ok(())
}

/// Per-stratum rounding can move the realized share away from `prop`.
pub(crate) fn warn_on_drift(kind: SchemeKind, analysis: usize, n: usize, prop: f64) {
    let nominal = n as f64 * prop;
    if (analysis as f64 - nominal).abs() > 1.0 {
        warn!(
            scheme = %kind,
            analysis,
            nominal,
            "stratified rounding moved the analysis share away from the nominal proportion"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_split_sizes() {
        let set = InitialSplitter::new(0.75).with_seed(11).resample(&Dataset::with_len(100), None).unwrap();
        assert_eq!(set.len(), 1);
        let split = &set.splits()[0];
        assert_eq!(split.analysis().len(), 75);
        assert_eq!(split.assessment().len(), 25);
        assert_eq!(split.id().label, "Split1");
        assert_eq!(split.scheme(), SchemeKind::InitialSplit);
    }

    #[test]
    fn test_initial_split_deterministic() {
        let dataset = Dataset::with_len(50);
        let a = InitialSplitter::new(0.6).with_seed(3).resample(&dataset, None).unwrap();
        let b = InitialSplitter::new(0.6).with_seed(3).resample(&dataset, None).unwrap();
        let c = InitialSplitter::new(0.6).with_seed(4).resample(&dataset, None).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.splits()[0].analysis(), c.splits()[0].analysis());
    }

    #[test]
    fn test_stratified_80_20() {
        let labels = StratumLabels::new((0..100).map(|i| if i < 80 { "major" } else { "minor" }));
        let set = InitialSplitter::new(0.7)
            .stratified(true)
            .with_seed(5)
            .resample(&Dataset::with_len(100), Some(&labels))
            .unwrap();
        let split = &set.splits()[0];

        let major = split.analysis().iter().filter(|&&r| r < 80).count();
        let minor = split.analysis().iter().filter(|&&r| r >= 80).count();
        assert_eq!(major, 56);
        assert_eq!(minor, 14);
        assert_eq!(split.assessment().len(), 30);
    }

    #[test]
    fn test_stratified_rounding_drift_is_kept() {
        // 5 * 0.5 and 3 * 0.5 both round up, so 5 of 8 rows are analysed.
        let labels = StratumLabels::new(["a", "a", "a", "a", "a", "b", "b", "b"]);
        let set = InitialSplitter::new(0.5)
            .stratified(true)
            .resample(&Dataset::with_len(8), Some(&labels))
            .unwrap();
        assert_eq!(set.splits()[0].analysis().len(), 5);
    }

    #[test]
    fn test_stratified_requires_labels() {
        let err = InitialSplitter::new(0.5)
            .stratified(true)
            .resample(&Dataset::with_len(8), None)
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingLabels { .. }));
    }

    #[test]
    fn test_initial_split_rejects_bad_prop() {
        for prop in [0.0, 1.0, 1.5, -0.2] {
            let err = InitialSplitter::new(prop).resample(&Dataset::with_len(10), None).unwrap_err();
            assert!(matches!(err, ConfigurationError::InvalidParameter { .. }));
        }
    }

    #[test]
    fn test_initial_split_rejects_empty_partition() {
        let err = InitialSplitter::new(0.1).resample(&Dataset::with_len(3), None).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::EmptyPartition {
                scheme: "initial_split".to_string(),
                analysis: 0,
                assessment: 3,
            }
        );
    }

    #[test]
    fn test_time_split_keeps_order() {
        let dataset = Dataset::from_rows(vec![10, 11, 12, 13, 14, 15, 16, 17, 18, 19]).unwrap();
        let set = TimeSplitter::new(0.8).resample(&dataset, None).unwrap();
        let split = &set.splits()[0];
        assert_eq!(split.analysis(), &[10, 11, 12, 13, 14, 15, 16, 17]);
        assert_eq!(split.assessment(), &[18, 19]);
    }

    #[test]
    fn test_time_split_empty_dataset() {
        let err = TimeSplitter::new(0.8).resample(&Dataset::with_len(0), None).unwrap_err();
        assert_eq!(err, ConfigurationError::InsufficientData { required: 1, got: 0 });
    }
}
