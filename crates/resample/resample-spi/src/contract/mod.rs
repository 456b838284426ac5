//! Contract module containing resampling traits.
//!
//! - [`Resampler`] - A scheme that partitions a dataset into splits

mod resampler;

pub use resampler::Resampler;
