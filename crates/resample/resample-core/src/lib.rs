//! Resampling Core
//!
//! Scheme implementations behind the [`Resampler`] contract:
//! - Random, stratified and chronological holdout
//! - K-fold (repeated, stratified, grouped) and leave-one-out
//! - Monte Carlo and bootstrap resampling
//! - Rolling forecast origin
//! - Nested resampling

mod bootstrap;
mod dispatch;
mod holdout;
mod monte_carlo;
mod nested;
mod rolling;
mod sampling;
mod tidy;
mod validate;
mod vfold;
pub mod rng;

pub use bootstrap::BootstrapResampler;
pub use dispatch::{create_resampler, resample};
pub use holdout::{InitialSplitter, TimeSplitter};
pub use monte_carlo::MonteCarloResampler;
pub use nested::NestedResampler;
pub use rolling::RollingOriginResampler;
pub use tidy::{tidy, tidy_nested};
pub use vfold::{GroupVFoldResampler, LeaveOneOutResampler, VFoldResampler};

// Re-export SPI types
pub use resample_spi::{
    ConfigurationError, Dataset, ResampleSet, Resampler, Result, Role, RowId, SchemeConfig,
    SchemeKind, Split, SplitId, StratumLabels, TidyRecord,
};

// Re-export API types
pub use resample_api::{SchemeBuilder, SchemeDefaults};
