//! Scheme dispatch.

use tracing::debug;

use resample_spi::{Dataset, ResampleSet, Resampler, Result, SchemeConfig, StratumLabels};

use crate::bootstrap::BootstrapResampler;
use crate::holdout::{InitialSplitter, TimeSplitter};
use crate::monte_carlo::MonteCarloResampler;
use crate::nested::NestedResampler;
use crate::rolling::RollingOriginResampler;
use crate::vfold::{GroupVFoldResampler, LeaveOneOutResampler, VFoldResampler};

/// Create the resampler for a configuration.
pub fn create_resampler(config: &SchemeConfig) -> Box<dyn Resampler> {
    match config {
        SchemeConfig::InitialSplit { prop, strata, seed } => Box::new(
            InitialSplitter::new(*prop).stratified(*strata).with_seed(*seed),
        ),
        SchemeConfig::InitialTimeSplit { prop } => Box::new(TimeSplitter::new(*prop)),
        SchemeConfig::VFold { folds, repeats, strata, seed } => Box::new(
            VFoldResampler::new(*folds)
                .with_repeats(*repeats)
                .stratified(*strata)
                .with_seed(*seed),
        ),
        SchemeConfig::GroupVFold { folds, seed } => {
            Box::new(GroupVFoldResampler::new(*folds).with_seed(*seed))
        }
        SchemeConfig::LeaveOneOut => Box::new(LeaveOneOutResampler),
        SchemeConfig::MonteCarlo { prop, times, strata, seed } => Box::new(
            MonteCarloResampler::new(*prop, *times).stratified(*strata).with_seed(*seed),
        ),
        SchemeConfig::Bootstrap { times, strata, seed } => Box::new(
            BootstrapResampler::new(*times).stratified(*strata).with_seed(*seed),
        ),
        SchemeConfig::RollingOrigin { initial, assess, cumulative, skip } => Box::new(
            RollingOriginResampler::new(*initial)
                .with_assess(*assess)
                .cumulative(*cumulative)
                .with_skip(*skip),
        ),
        SchemeConfig::Nested { outer, inner } => {
            Box::new(NestedResampler::new((**outer).clone(), (**inner).clone()))
        }
    }
}

/// Resample `dataset` according to `config`.
///
/// `labels` must be parallel to `dataset` when the scheme is stratified or
/// grouped; otherwise they are ignored.
pub fn resample(
    dataset: &Dataset,
    config: &SchemeConfig,
    labels: Option<&StratumLabels>,
) -> Result<ResampleSet> {
    let set = create_resampler(config).resample(dataset, labels)?;
    let kind = config.kind();
    match config.seed() {
        Some(seed) if kind.is_randomized() => debug!(
            scheme = %kind,
            rows = dataset.len(),
            splits = set.len(),
            seed,
            "resampled"
        ),
        _ => debug!(scheme = %kind, rows = dataset.len(), splits = set.len(), "resampled"),
    }
    Ok(set)
}
