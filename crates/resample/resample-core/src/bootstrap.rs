//! Bootstrap resampling.

use rand::Rng;
use rayon::prelude::*;

use resample_spi::{
    Dataset, ResampleSet, Resampler, Result, SchemeConfig, SchemeKind, SplitId, StratumLabels,
};

use crate::rng::stream_rng;
use crate::sampling::{complement, strata_groups, Partition};
use crate::validate;

/// `times` draws of `N` rows with replacement. Rows never drawn form the
/// assessment set, about `N / e` of them on average.
#[derive(Debug, Clone)]
pub struct BootstrapResampler {
    times: usize,
    strata: bool,
    seed: u64,
}

impl BootstrapResampler {
    pub fn new(times: usize) -> Self {
        Self {
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

/// Draw each group's own size from that group, with replacement.
fn draw<R: Rng + ?Sized>(n: usize, groups: &[Vec<usize>], rng: &mut R) -> Partition {
    let mut analysis = Vec::with_capacity(n);
    for group in groups {
        analysis.extend((0..group.len()).map(|_| group[rng.gen_range(0..group.len())]));
    }
    let assessment = complement(n, &analysis);
    Partition { analysis, assessment }
}

impl Resampler for BootstrapResampler {
    fn resample(&self, dataset: &Dataset, labels: Option<&StratumLabels>) -> Result<ResampleSet> {
        let kind = SchemeKind::Bootstrap;
        validate::non_empty(dataset)?;
        validate::positive("times", self.times)?;
        let labels = validate::labels(kind, self.strata, dataset, labels)?;

        let n = dataset.len();
        let groups = strata_groups(n, labels);

        let splits = (0..self.times)
            .into_par_iter()
            .map(|i| {
                let mut rng = stream_rng(self.seed, i as u64);
                draw(n, &groups, &mut rng).into_split(
                    dataset,
                    kind,
                    SplitId::new("Bootstrap", i + 1, self.times),
                )
            })
            .collect();

        Ok(ResampleSet::new(self.config(), splits))
    }

    fn config(&self) -> SchemeConfig {
        SchemeConfig::Bootstrap {
            times: self.times,
            strata: self.strata,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bootstrap_analysis_has_n_rows() {
        let set = BootstrapResampler::new(20).with_seed(3).resample(&Dataset::with_len(30), None).unwrap();
        assert_eq!(set.len(), 20);
        for split in &set {
            assert_eq!(split.analysis().len(), 30);
            let drawn: HashSet<usize> = split.analysis().iter().copied().collect();
            assert!(split.assessment().iter().all(|r| !drawn.contains(r)));
            assert_eq!(drawn.len() + split.assessment().len(), 30);
        }
    }

    #[test]
    fn test_bootstrap_draws_duplicates() {
        let set = BootstrapResampler::new(5).with_seed(3).resample(&Dataset::with_len(50), None).unwrap();
        let any_duplicates = set.iter().any(|split| {
            let unique: HashSet<usize> = split.analysis().iter().copied().collect();
            unique.len() < split.analysis().len()
        });
        assert!(any_duplicates);
    }

    #[test]
    fn test_bootstrap_mean_out_of_bag_size() {
        let set = BootstrapResampler::new(1000).with_seed(17).resample(&Dataset::with_len(100), None).unwrap();
        let mean = set.assessment_sizes().iter().sum::<usize>() as f64 / set.len() as f64;
        let expected = 100.0 * (-1.0f64).exp();
        assert!((mean - expected).abs() < expected * 0.05, "mean {} vs {}", mean, expected);
    }

    #[test]
    fn test_stratified_bootstrap_preserves_stratum_sizes() {
        let labels = StratumLabels::new((0..30).map(|i| if i < 10 { "a" } else { "b" }));
        let set = BootstrapResampler::new(10)
            .stratified(true)
            .with_seed(8)
            .resample(&Dataset::with_len(30), Some(&labels))
            .unwrap();
        for split in &set {
            assert_eq!(split.analysis().iter().filter(|&&r| r < 10).count(), 10);
            assert_eq!(split.analysis().iter().filter(|&&r| r >= 10).count(), 20);
        }
    }

    #[test]
    fn test_bootstrap_labels() {
        let set = BootstrapResampler::new(12).resample(&Dataset::with_len(5), None).unwrap();
        assert_eq!(set.splits()[0].id().label, "Bootstrap01");
        assert_eq!(set.splits()[11].id().label, "Bootstrap12");
    }
}
