//! K-fold cross-validation and its special cases.

use rand::seq::SliceRandom;
use rayon::prelude::*;

use resample_spi::{
    ConfigurationError, Dataset, ResampleSet, Resampler, Result, SchemeConfig, SchemeKind, Split,
    SplitId, StratumLabels,
};

use crate::rng::stream_rng;
use crate::sampling::{deal_folds, hold_out_fold, strata_groups, Partition};
use crate::validate;

/// K-fold cross-validation, optionally repeated and stratified.
#[derive(Debug, Clone)]
pub struct VFoldResampler {
    folds: usize,
    repeats: usize,
    strata: bool,
    seed: u64,
}

impl VFoldResampler {
    pub fn new(folds: usize) -> Self {
        Self {
            folds,
            repeats: 1,
            strata: false,
            seed: 0,
        }
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn stratified(mut self, strata: bool) -> Self {
        self.strata = strata;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn split_id(&self, repeat: usize, fold: usize) -> SplitId {
        if self.repeats > 1 {
            SplitId::repeated(repeat + 1, self.repeats, "Fold", fold + 1, self.folds)
        } else {
            SplitId::new("Fold", fold + 1, self.folds)
        }
    }
}

impl Resampler for VFoldResampler {
    fn resample(&self, dataset: &Dataset, labels: Option<&StratumLabels>) -> Result<ResampleSet> {
        let kind = SchemeKind::VFold;
        if self.folds < 2 {
            return Err(ConfigurationError::invalid(
                "folds",
                format!("must be >= 2, got {}", self.folds),
            ));
        }
        validate::positive("repeats", self.repeats)?;
        validate::non_empty(dataset)?;
        if self.folds > dataset.len() {
            return Err(ConfigurationError::InsufficientData {
                required: self.folds,
                got: dataset.len(),
            });
        }
        let labels = validate::labels(kind, self.strata, dataset, labels)?;

        let n = dataset.len();
        let groups = strata_groups(n, labels);

        let repeats: Vec<Vec<Split>> = (0..self.repeats)
            .into_par_iter()
            .map(|repeat| {
                let mut rng = stream_rng(self.seed, repeat as u64);
                let fold_of = deal_folds(n, &groups, self.folds, &mut rng);
                (0..self.folds)
                    .map(|fold| {
                        hold_out_fold(&fold_of, fold).into_split(
                            dataset,
                            kind,
                            self.split_id(repeat, fold),
                        )
                    })
                    .collect()
            })
            .collect();

        Ok(ResampleSet::new(
            self.config(),
            repeats.into_iter().flatten().collect(),
        ))
    }

    fn config(&self) -> SchemeConfig {
        SchemeConfig::VFold {
            folds: self.folds,
            repeats: self.repeats,
            strata: self.strata,
            seed: self.seed,
        }
    }
}

/// Grouped k-fold: labels name groups, and every row of a group is assessed
/// in the same fold.
#[derive(Debug, Clone)]
pub struct GroupVFoldResampler {
    folds: usize,
    seed: u64,
}

impl GroupVFoldResampler {
    pub fn new(folds: usize) -> Self {
        Self { folds, seed: 0 }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Resampler for GroupVFoldResampler {
    fn resample(&self, dataset: &Dataset, labels: Option<&StratumLabels>) -> Result<ResampleSet> {
        let kind = SchemeKind::GroupVFold;
        if self.folds < 2 {
            return Err(ConfigurationError::invalid(
                "folds",
                format!("must be >= 2, got {}", self.folds),
            ));
        }
        validate::non_empty(dataset)?;
        let groups = validate::required_labels(kind, dataset, labels)?.groups();
        if self.folds > groups.len() {
            return Err(ConfigurationError::InsufficientData {
                required: self.folds,
                got: groups.len(),
            });
        }

        let mut order: Vec<usize> = (0..groups.len()).collect();
        order.shuffle(&mut stream_rng(self.seed, 0));

        let mut fold_of = vec![0; dataset.len()];
        for (slot, &group) in order.iter().enumerate() {
            for &position in &groups[group] {
                fold_of[position] = slot % self.folds;
            }
        }

        let splits = (0..self.folds)
            .map(|fold| {
                hold_out_fold(&fold_of, fold).into_split(
                    dataset,
                    kind,
                    SplitId::new("Fold", fold + 1, self.folds),
                )
            })
            .collect();

        Ok(ResampleSet::new(self.config(), splits))
    }

    fn config(&self) -> SchemeConfig {
        SchemeConfig::GroupVFold {
            folds: self.folds,
            seed: self.seed,
        }
    }
}

/// Leave-one-out: `N` splits, each assessing a single row.
#[derive(Debug, Clone, Default)]
pub struct LeaveOneOutResampler;

impl Resampler for LeaveOneOutResampler {
    fn resample(&self, dataset: &Dataset, _labels: Option<&StratumLabels>) -> Result<ResampleSet> {
        let n = dataset.len();
        if n < 2 {
            return Err(ConfigurationError::InsufficientData { required: 2, got: n });
        }

        let splits = (0..n)
            .map(|held| {
                let part = Partition {
                    analysis: (0..n).filter(|&p| p != held).collect(),
                    assessment: vec![held],
                };
                part.into_split(dataset, SchemeKind::LeaveOneOut, SplitId::new("Row", held + 1, n))
            })
            .collect();

        Ok(ResampleSet::new(self.config(), splits))
    }

    fn config(&self) -> SchemeConfig {
        SchemeConfig::LeaveOneOut
    }
}
