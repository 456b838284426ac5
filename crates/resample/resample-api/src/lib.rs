//! Resampling API
//!
//! Configuration defaults and builders for resampling consumers.

pub mod config;
pub mod builder;

pub use config::*;
pub use builder::*;

// Re-export SPI types
pub use resample_spi::{
    ConfigurationError, Dataset, ResampleSet, Resampler, Result, Role, RowId, SchemeConfig,
    SchemeKind, Split, SplitId, StratumLabels, TidyRecord,
};
