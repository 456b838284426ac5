//! Position-level partition utilities shared by the schemes.
//!
//! Schemes decide which positions go where; [`Partition::into_split`] is the
//! only place positions become row identifiers.

use rand::seq::SliceRandom;
use rand::Rng;

use resample_spi::{Dataset, SchemeKind, Split, SplitId, StratumLabels};

/// Analysis and assessment positions of one split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Partition {
    pub analysis: Vec<usize>,
    pub assessment: Vec<usize>,
}

impl Partition {
    pub fn into_split(self, dataset: &Dataset, scheme: SchemeKind, id: SplitId) -> Split {
        Split::new(
            dataset.select(&self.analysis),
            dataset.select(&self.assessment),
            dataset.len(),
            scheme,
            id,
        )
    }
}

/// `round(n * prop)`, rounding halves up.
///
/// A small tolerance keeps nominal halves such as `5 * 0.7 = 3.5` from
/// rounding down when `prop` is not exactly representable.
pub(crate) fn analysis_count(n: usize, prop: f64) -> usize {
    let count = (n as f64 * prop + 0.5 + 1e-9).floor() as usize;
    count.min(n)
}

/// Strata to sample within: one group per label, or every position at once.
pub(crate) fn strata_groups(n: usize, labels: Option<&StratumLabels>) -> Vec<Vec<usize>> {
    match labels {
        Some(labels) => labels.groups(),
        None => vec![(0..n).collect()],
    }
}

/// Total analysis rows a (possibly stratified) holdout of `groups` will draw.
pub(crate) fn holdout_count(groups: &[Vec<usize>], prop: f64) -> usize {
    groups.iter().map(|g| analysis_count(g.len(), prop)).sum()
}

/// Draw `round(|group| * prop)` positions of each group without replacement.
pub(crate) fn holdout<R: Rng + ?Sized>(groups: &[Vec<usize>], prop: f64, rng: &mut R) -> Partition {
    let mut analysis = Vec::new();
    let mut assessment = Vec::new();

    for group in groups {
        let take = analysis_count(group.len(), prop);
        let mut shuffled = group.clone();
        shuffled.shuffle(rng);
        analysis.extend_from_slice(&shuffled[..take]);
        assessment.extend_from_slice(&shuffled[take..]);
    }

    analysis.sort_unstable();
    assessment.sort_unstable();
    Partition { analysis, assessment }
}

/// Fold number of every position.
///
/// Positions are shuffled within each group and dealt round-robin; the dealing
/// counter carries over between groups, so folds stay within one row of each
/// other both overall and inside every group.
pub(crate) fn deal_folds<R: Rng + ?Sized>(
    n: usize,
    groups: &[Vec<usize>],
    folds: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut fold_of = vec![0; n];
    let mut next = 0;

    for group in groups {
        let mut shuffled = group.clone();
        shuffled.shuffle(rng);
        for position in shuffled {
            fold_of[position] = next % folds;
            next += 1;
        }
    }
    fold_of
}

/// Partition that holds out every position assigned to `fold`.
pub(crate) fn hold_out_fold(fold_of: &[usize], fold: usize) -> Partition {
    let (assessment, analysis): (Vec<usize>, Vec<usize>) =
        (0..fold_of.len()).partition(|&p| fold_of[p] == fold);
    Partition { analysis, assessment }
}

/// Positions absent from `drawn`, ascending.
pub(crate) fn complement(n: usize, drawn: &[usize]) -> Vec<usize> {
    let mut seen = vec![false; n];
    for &p in drawn {
        seen[p] = true;
    }
    (0..n).filter(|&p| !seen[p]).collect()
}
