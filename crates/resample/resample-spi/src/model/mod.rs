//! Model module containing resampling data structures.
//!
//! - [`Dataset`] - Ordered row identifiers
//! - [`StratumLabels`] - Per-row categorical labels
//! - [`SchemeConfig`] / [`SchemeKind`] - Scheme selection and parameters
//! - [`Split`] / [`SplitId`] - One analysis/assessment partition
//! - [`ResampleSet`] - All splits from one run
//! - [`TidyRecord`] / [`Role`] - Row-level projection

mod dataset;
mod resample_set;
mod scheme;
mod split;
mod strata;
mod tidy;

pub use dataset::{Dataset, RowId};
pub use resample_set::ResampleSet;
pub use scheme::{SchemeConfig, SchemeKind};
pub use split::{Split, SplitId};
pub use strata::StratumLabels;
pub use tidy::{Role, TidyRecord};
