//! Precondition checks shared by all schemes.

use resample_spi::{ConfigurationError, Dataset, Result, SchemeKind, StratumLabels};

pub(crate) fn non_empty(dataset: &Dataset) -> Result<()> {
    if dataset.is_empty() {
        return Err(ConfigurationError::InsufficientData { required: 1, got: 0 });
    }
    Ok(())
}

/// `prop` must lie strictly inside (0, 1).
pub(crate) fn proportion(prop: f64) -> Result<()> {
    if !(prop > 0.0 && prop < 1.0) {
        return Err(ConfigurationError::invalid(
            "prop",
            format!("must be in (0, 1), got {}", prop),
        ));
    }
    Ok(())
}

pub(crate) fn positive(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(ConfigurationError::invalid(name, "must be positive"));
    }
    Ok(())
}

/// Labels the scheme will use: `None` when it does not need any.
pub(crate) fn labels<'a>(
    scheme: SchemeKind,
    required: bool,
    dataset: &Dataset,
    labels: Option<&'a StratumLabels>,
) -> Result<Option<&'a StratumLabels>> {
    if !required {
        return Ok(None);
    }
    required_labels(scheme, dataset, labels).map(Some)
}

/// Labels parallel to `dataset`, which the scheme cannot run without.
pub(crate) fn required_labels<'a>(
    scheme: SchemeKind,
    dataset: &Dataset,
    labels: Option<&'a StratumLabels>,
) -> Result<&'a StratumLabels> {
    let labels = labels.ok_or_else(|| ConfigurationError::MissingLabels {
        scheme: scheme.to_string(),
    })?;
    if labels.len() != dataset.len() {
        return Err(ConfigurationError::LabelLengthMismatch {
            expected: dataset.len(),
            got: labels.len(),
        });
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportion_bounds() {
        assert!(proportion(0.5).is_ok());
        assert!(proportion(0.0).is_err());
        assert!(proportion(1.0).is_err());
        assert!(proportion(-0.1).is_err());
        assert!(proportion(f64::NAN).is_err());
    }

    #[test]
    fn test_positive() {
        assert!(positive("times", 1).is_ok());
        let err = positive("times", 0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid parameter 'times': must be positive");
    }

    #[test]
    fn test_labels_required_and_missing() {
        let dataset = Dataset::with_len(3);
        let err = labels(SchemeKind::VFold, true, &dataset, None).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingLabels { .. }));
    }

    #[test]
    fn test_labels_length_mismatch() {
        let dataset = Dataset::with_len(3);
        let strata = StratumLabels::new(["a", "b"]);
        let err = labels(SchemeKind::Bootstrap, true, &dataset, Some(&strata)).unwrap_err();
        assert_eq!(err, ConfigurationError::LabelLengthMismatch { expected: 3, got: 2 });
    }

    #[test]
    fn test_labels_ignored_when_not_required() {
        let dataset = Dataset::with_len(3);
        let strata = StratumLabels::new(["a"]);
        assert!(labels(SchemeKind::VFold, false, &dataset, Some(&strata)).unwrap().is_none());
    }

    #[test]
    fn test_non_empty() {
        assert!(non_empty(&Dataset::with_len(1)).is_ok());
        assert!(non_empty(&Dataset::with_len(0)).is_err());
    }
}
