//! Resampling error types.

use thiserror::Error;

/// Precondition violations detected before any resampling work begins.
///
/// Resampling is deterministic and performs no I/O, so the only way it can
/// fail is a configuration that does not fit the dataset it is applied to.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A scheme parameter is outside its valid domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The dataset is too small for the requested scheme.
    #[error("Insufficient data: need at least {required} rows, got {got}")]
    InsufficientData { required: usize, got: usize },

    /// A stratified or grouped scheme was run without labels.
    #[error("Scheme '{scheme}' requires labels but none were supplied")]
    MissingLabels { scheme: String },

    /// Labels are not parallel to the dataset.
    #[error("Label length mismatch: dataset has {expected} rows, got {got} labels")]
    LabelLengthMismatch { expected: usize, got: usize },

    /// The proportion rounds to an empty analysis or assessment set.
    #[error("Scheme '{scheme}' would produce an empty partition ({analysis} analysis / {assessment} assessment rows)")]
    EmptyPartition {
        scheme: String,
        analysis: usize,
        assessment: usize,
    },

    /// A dataset was built from a repeated row identifier.
    #[error("Duplicate row identifier {0}")]
    DuplicateRow(usize),

    /// The requested nesting cannot keep inner splits disjoint.
    #[error("Unsupported nesting: {0}")]
    UnsupportedNesting(String),

    /// An inner run of nested resampling failed.
    #[error("Inner resampling of outer split {split} failed: {source}")]
    Inner {
        split: String,
        #[source]
        source: Box<ConfigurationError>,
    },
}

impl ConfigurationError {
    /// Shorthand for [`ConfigurationError::InvalidParameter`].
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        ConfigurationError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// The innermost error, unwrapping any nested-run context.
    pub fn root_cause(&self) -> &ConfigurationError {
        match self {
            ConfigurationError::Inner { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_error() {
        let error = ConfigurationError::invalid("prop", "must be in (0, 1), got 1.5");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'prop': must be in (0, 1), got 1.5"
        );
    }

    #[test]
    fn test_insufficient_data_error() {
        let error = ConfigurationError::InsufficientData { required: 10, got: 4 };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 10 rows, got 4"
        );
    }

    #[test]
    fn test_missing_labels_error() {
        let error = ConfigurationError::MissingLabels {
            scheme: "vfold".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Scheme 'vfold' requires labels but none were supplied"
        );
    }

    #[test]
    fn test_label_length_mismatch_error() {
        let error = ConfigurationError::LabelLengthMismatch { expected: 100, got: 99 };
        assert!(error.to_string().contains("100 rows"));
        assert!(error.to_string().contains("99 labels"));
    }

    #[test]
    fn test_empty_partition_error() {
        let error = ConfigurationError::EmptyPartition {
            scheme: "initial_split".to_string(),
            analysis: 0,
            assessment: 3,
        };
        assert_eq!(
            error.to_string(),
            "Scheme 'initial_split' would produce an empty partition (0 analysis / 3 assessment rows)"
        );
    }

    #[test]
    fn test_duplicate_row_error() {
        let error = ConfigurationError::DuplicateRow(42);
        assert_eq!(error.to_string(), "Duplicate row identifier 42");
    }

    #[test]
    fn test_inner_error_names_outer_split() {
        let error = ConfigurationError::Inner {
            split: "Fold03".to_string(),
            source: Box::new(ConfigurationError::InsufficientData { required: 20, got: 8 }),
        };
        assert!(error.to_string().starts_with("Inner resampling of outer split Fold03 failed"));
        assert!(error.to_string().contains("need at least 20 rows, got 8"));
    }

    #[test]
    fn test_root_cause_unwraps_nested_context() {
        let root = ConfigurationError::DuplicateRow(1);
        let error = ConfigurationError::Inner {
            split: "Fold1".to_string(),
            source: Box::new(ConfigurationError::Inner {
                split: "Fold2".to_string(),
                source: Box::new(root.clone()),
            }),
        };
        assert_eq!(error.root_cause(), &root);
    }

    #[test]
    fn test_error_implements_std_error() {
        fn assert_std_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_std_error::<ConfigurationError>();
    }

    #[test]
    fn test_inner_error_exposes_source() {
        use std::error::Error;

        let error = ConfigurationError::Inner {
            split: "Resample1".to_string(),
            source: Box::new(ConfigurationError::invalid("folds", "must be >= 2")),
        };
        assert!(error.source().is_some());
    }
}
