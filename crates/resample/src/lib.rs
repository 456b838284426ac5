//! # rustful-resample
//!
//! Resampling schemes for model evaluation on tabular and time series data.
//! Produces analysis/assessment splits by holdout, k-fold, leave-one-out,
//! Monte Carlo, bootstrap, rolling origin and nested resampling, reproducibly
//! from an explicit seed.

pub use resample_facade::*;
