//! Rolling forecast origin.

use resample_spi::{
    ConfigurationError, Dataset, ResampleSet, Resampler, Result, SchemeConfig, SchemeKind,
    SplitId, StratumLabels,
};

use crate::sampling::Partition;
use crate::validate;

/// Rolling-origin slices over chronologically ordered rows.
///
/// Slice origins advance by `skip + 1` rows. A cumulative window always
/// starts at row 0; a fixed window keeps exactly `initial` rows.
#[derive(Debug, Clone)]
pub struct RollingOriginResampler {
    initial: usize,
    assess: usize,
    cumulative: bool,
    skip: usize,
}

impl RollingOriginResampler {
    pub fn new(initial: usize) -> Self {
        Self {
            initial,
            assess: 1,
            cumulative: true,
            skip: 0,
        }
    }

    pub fn with_assess(mut self, assess: usize) -> Self {
        self.assess = assess;
        self
    }

    pub fn cumulative(mut self, cumulative: bool) -> Self {
        self.cumulative = cumulative;
        self
    }

    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Offsets of each slice origin from `initial`. Requires `initial + assess <= n`.
    fn origins(&self, n: usize) -> Vec<usize> {
        let last = n - self.initial - self.assess;
        (0..=last).step_by(self.skip.saturating_add(1)).collect()
    }
}

impl Resampler for RollingOriginResampler {
    fn resample(&self, dataset: &Dataset, _labels: Option<&StratumLabels>) -> Result<ResampleSet> {
        validate::positive("initial", self.initial)?;
        validate::positive("assess", self.assess)?;

        let n = dataset.len();
        if self.initial >= n {
            return Err(ConfigurationError::InsufficientData {
                required: self.initial.saturating_add(1),
                got: n,
            });
        }
        if self.assess > n - self.initial {
            let required = self.initial.checked_add(self.assess).ok_or_else(|| {
                ConfigurationError::invalid("assess", format!("{} exceeds any dataset size", self.assess))
            })?;
            return Err(ConfigurationError::InsufficientData { required, got: n });
        }

        let origins = self.origins(n);
        let count = origins.len();
        let splits = origins
            .into_iter()
            .enumerate()
            .map(|(i, k)| {
                let start = if self.cumulative { 0 } else { k };
                let origin = self.initial + k;
                let part = Partition {
                    analysis: (start..origin).collect(),
                    assessment: (origin..origin + self.assess).collect(),
                };
                part.into_split(dataset, SchemeKind::RollingOrigin, SplitId::new("Slice", i + 1, count))
            })
            .collect();

        Ok(ResampleSet::new(self.config(), splits))
    }

    fn config(&self) -> SchemeConfig {
        SchemeConfig::RollingOrigin {
            initial: self.initial,
            assess: self.assess,
            cumulative: self.cumulative,
            skip: self.skip,
        }
    }
}
