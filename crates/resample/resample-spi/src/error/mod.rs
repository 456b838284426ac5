//! Error module containing resampling error types.

mod configuration_error;

pub use configuration_error::ConfigurationError;
