//! Nested resampling.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use tracing::{debug_span, warn};

use resample_spi::{
    ConfigurationError, Dataset, ResampleSet, Resampler, Result, SchemeConfig, SchemeKind, Split,
    StratumLabels,
};

use crate::dispatch::resample;
use crate::rng::stream_seed;
use crate::validate;

/// Outer scheme whose every analysis set is resampled again by an inner scheme.
///
/// The inner run for outer split `i` sees only that split's distinct analysis
/// rows, in first-draw order, and its seeds are derived from `(inner seed, i)`.
#[derive(Debug, Clone)]
pub struct NestedResampler {
    outer: SchemeConfig,
    inner: SchemeConfig,
}

impl NestedResampler {
    pub fn new(outer: SchemeConfig, inner: SchemeConfig) -> Self {
        Self { outer, inner }
    }

    fn check_outer(&self) -> Result<()> {
        match self.outer.kind() {
            SchemeKind::Nested => Err(ConfigurationError::UnsupportedNesting(
                "the outer scheme cannot itself be nested; nest the inner scheme instead"
                    .to_string(),
            )),
            SchemeKind::Bootstrap => {
                warn!(
                    "bootstrap outer analysis sets repeat rows; inner runs use each distinct row once"
                );
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn inner_run(
        &self,
        index: usize,
        split: Split,
        positions: &HashMap<usize, usize>,
        labels: Option<&StratumLabels>,
    ) -> Result<Split> {
        let _span = debug_span!("inner", outer = %split.id()).entered();

        let mut seen = HashSet::with_capacity(split.analysis().len());
        let rows: Vec<usize> = split
            .analysis()
            .iter()
            .copied()
            .filter(|row| seen.insert(*row))
            .collect();
        let inner_labels = labels.map(|labels| {
            let at: Vec<usize> = rows.iter().map(|row| positions[row]).collect();
            labels.subset(&at)
        });
        let inner_dataset = Dataset::from_rows(rows)?;
        let inner_config = self.inner.map_seeds(&|seed| stream_seed(seed, index as u64));

        match resample(&inner_dataset, &inner_config, inner_labels.as_ref()) {
            Ok(inner) => Ok(split.with_inner(inner)),
            Err(source) => Err(ConfigurationError::Inner {
                split: split.id().to_string(),
                source: Box::new(source),
            }),
        }
    }
}

impl Resampler for NestedResampler {
    fn resample(&self, dataset: &Dataset, labels: Option<&StratumLabels>) -> Result<ResampleSet> {
        self.check_outer()?;
        let labels = if self.config().requires_labels() {
            Some(validate::required_labels(SchemeKind::Nested, dataset, labels)?)
        } else {
            None
        };

        let outer = resample(dataset, &self.outer, labels)?;

        let positions: HashMap<usize, usize> = dataset
            .rows()
            .iter()
            .enumerate()
            .map(|(position, &row)| (row, position))
            .collect();

        let results: Vec<Result<Split>> = outer
            .splits()
            .to_vec()
            .into_par_iter()
            .enumerate()
            .map(|(i, split)| self.inner_run(i, split, &positions, labels))
            .collect();
        let splits = results.into_iter().collect::<Result<Vec<Split>>>()?;

        Ok(ResampleSet::new(self.config(), splits))
    }

    fn config(&self) -> SchemeConfig {
        SchemeConfig::Nested {
            outer: Box::new(self.outer.clone()),
            inner: Box::new(self.inner.clone()),
        }
    }
}
