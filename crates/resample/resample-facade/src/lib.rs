//! Resampling Facade
//!
//! High-level API for resampling. Re-exports all public types from the
//! resample stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use resample_facade::prelude::*;
//!
//! let dataset = Dataset::with_len(100);
//! let config = SchemeBuilder::vfold(5).repeats(2).seed(42).build();
//! let set = resample(&dataset, &config, None)?;
//! for split in &set {
//!     println!("{} {}", split.id(), split);
//! }
//! ```

// Re-export everything from core (which includes API and SPI)
pub use resample_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use resample_spi::Resampler;

    // Data model
    pub use resample_spi::{
        Dataset, ResampleSet, Role, RowId, SchemeConfig, SchemeKind, Split, SplitId,
        StratumLabels, TidyRecord,
    };

    // Error types
    pub use resample_spi::{ConfigurationError, Result};

    // Configuration
    pub use resample_api::{SchemeBuilder, SchemeDefaults};

    // Implementations
    pub use resample_core::{
        create_resampler, resample, tidy, tidy_nested, BootstrapResampler, GroupVFoldResampler,
        InitialSplitter, LeaveOneOutResampler, MonteCarloResampler, NestedResampler,
        RollingOriginResampler, TimeSplitter, VFoldResampler,
    };
}
