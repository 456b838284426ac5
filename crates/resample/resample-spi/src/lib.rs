//! Resampling Service Provider Interface
//!
//! Defines the contracts and data model shared by every resampling scheme:
//! - [`Resampler`] - A scheme that turns a dataset into splits
//! - [`Dataset`] / [`StratumLabels`] - Caller-owned inputs
//! - [`Split`] / [`ResampleSet`] - Immutable outputs
//! - [`SchemeConfig`] - Tagged scheme configuration

pub mod contract;
pub mod error;
pub mod model;

pub use contract::Resampler;
pub use error::ConfigurationError;
pub use model::{
    Dataset, ResampleSet, Role, RowId, SchemeConfig, SchemeKind, Split, SplitId,
    StratumLabels, TidyRecord,
};

/// Result type for resampling operations.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
