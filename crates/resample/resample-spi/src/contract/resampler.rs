//! Resampler trait.

use crate::model::{Dataset, ResampleSet, SchemeConfig, StratumLabels};
use crate::Result;

/// A resampling scheme bound to its parameters.
///
/// Implementations are pure: they read the dataset and labels, never mutate
/// them, and either return a complete [`ResampleSet`] or an error raised
/// before any split is built.
pub trait Resampler: Send + Sync {
    /// Partition `dataset` into splits. `labels`, when given, must be
    /// parallel to `dataset`.
    fn resample(&self, dataset: &Dataset, labels: Option<&StratumLabels>) -> Result<ResampleSet>;

    /// Configuration this resampler runs.
    fn config(&self) -> SchemeConfig;
}
