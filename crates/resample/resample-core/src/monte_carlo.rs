//! Monte Carlo cross-validation.

use rayon::prelude::*;

use resample_spi::{
    Dataset, ResampleSet, Resampler, Result, SchemeConfig, SchemeKind, SplitId, StratumLabels,
};

use crate::holdout::{check_not_empty, warn_on_drift};
use crate::rng::stream_rng;
use crate::sampling::{holdout, holdout_count, strata_groups};
use crate::validate;

/// `times` independent random holdouts. Assessment sets may overlap.
#[derive(Debug, Clone)]
pub struct MonteCarloResampler {
    prop: f64,
    times: usize,
    strata: bool,
    seed: u64,
}

impl MonteCarloResampler {
    pub fn new(prop: f64, times: usize) -> Self {
        Self {
            prop,
            times,
            strata: false,
            seed: 0,
        }
    }

    pub fn stratified(mut self, strata: bool) -> Self {
        self.strata = strata;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Resampler for MonteCarloResampler {
    fn resample(&self, dataset: &Dataset, labels: Option<&StratumLabels>) -> Result<ResampleSet> {
        let kind = SchemeKind::MonteCarlo;
        validate::non_empty(dataset)?;
        validate::proportion(self.prop)?;
        validate::positive("times", self.times)?;
        let labels = validate::labels(kind, self.strata, dataset, labels)?;

        let groups = strata_groups(dataset.len(), labels);
        let take = holdout_count(&groups, self.prop);
        check_not_empty(kind, take, dataset.len())?;
        warn_on_drift(kind, take, dataset.len(), self.prop);

        let splits = (0..self.times)
            .into_par_iter()
            .map(|draw| {
                let mut rng = stream_rng(self.seed, draw as u64);
                holdout(&groups, self.prop, &mut rng).into_split(
                    dataset,
                    kind,
                    SplitId::new("Resample", draw + 1, self.times),
                )
            })
            .collect();

        Ok(ResampleSet::new(self.config(), splits))
    }

    fn config(&self) -> SchemeConfig {
        SchemeConfig::MonteCarlo {
            prop: self.prop,
            times: self.times,
            strata: self.strata,
            seed: self.seed,
        }
    }
}
