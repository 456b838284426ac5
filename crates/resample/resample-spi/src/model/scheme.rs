//! Resampling scheme configuration.

use serde::{Deserialize, Serialize};

/// Resampling scheme selection and parameters.
///
/// Owned by the caller and never mutated by a resampler. Randomized variants
/// carry their own `seed`; identical config, dataset and labels always yield
/// an identical [`ResampleSet`](super::ResampleSet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum SchemeConfig {
    /// Random holdout: `round(N * prop)` rows to analysis.
    InitialSplit {
        prop: f64,
        #[serde(default)]
        strata: bool,
        #[serde(default)]
        seed: u64,
    },
    /// Chronological holdout: the first `round(N * prop)` rows to analysis.
    InitialTimeSplit { prop: f64 },
    /// K-fold cross-validation, optionally repeated and stratified.
    VFold {
        folds: usize,
        #[serde(default = "one")]
        repeats: usize,
        #[serde(default)]
        strata: bool,
        #[serde(default)]
        seed: u64,
    },
    /// Grouped k-fold: labels are group ids, groups never straddle folds.
    GroupVFold {
        folds: usize,
        #[serde(default)]
        seed: u64,
    },
    /// One split per row, that row held out.
    LeaveOneOut,
    /// Independent random holdouts.
    MonteCarlo {
        prop: f64,
        times: usize,
        #[serde(default)]
        strata: bool,
        #[serde(default)]
        seed: u64,
    },
    /// Draws of `N` rows with replacement; undrawn rows are assessed.
    Bootstrap {
        times: usize,
        #[serde(default)]
        strata: bool,
        #[serde(default)]
        seed: u64,
    },
    /// Rolling forecast origin over chronologically ordered rows.
    RollingOrigin {
        initial: usize,
        #[serde(default = "one")]
        assess: usize,
        #[serde(default = "yes")]
        cumulative: bool,
        #[serde(default)]
        skip: usize,
    },
    /// Outer scheme whose analysis sets are re-resampled by the inner scheme.
    Nested {
        outer: Box<SchemeConfig>,
        inner: Box<SchemeConfig>,
    },
}

fn one() -> usize {
    1
}

fn yes() -> bool {
    true
}

impl SchemeConfig {
    /// Variant tag.
    pub fn kind(&self) -> SchemeKind {
        match self {
            SchemeConfig::InitialSplit { .. } => SchemeKind::InitialSplit,
            SchemeConfig::InitialTimeSplit { .. } => SchemeKind::InitialTimeSplit,
            SchemeConfig::VFold { .. } => SchemeKind::VFold,
            SchemeConfig::GroupVFold { .. } => SchemeKind::GroupVFold,
            SchemeConfig::LeaveOneOut => SchemeKind::LeaveOneOut,
            SchemeConfig::MonteCarlo { .. } => SchemeKind::MonteCarlo,
            SchemeConfig::Bootstrap { .. } => SchemeKind::Bootstrap,
            SchemeConfig::RollingOrigin { .. } => SchemeKind::RollingOrigin,
            SchemeConfig::Nested { .. } => SchemeKind::Nested,
        }
    }

    /// Whether the scheme stratifies on labels.
    pub fn is_stratified(&self) -> bool {
        match self {
            SchemeConfig::InitialSplit { strata, .. }
            | SchemeConfig::VFold { strata, .. }
            | SchemeConfig::MonteCarlo { strata, .. }
            | SchemeConfig::Bootstrap { strata, .. } => *strata,
            SchemeConfig::Nested { outer, inner } => outer.is_stratified() || inner.is_stratified(),
            _ => false,
        }
    }

    /// Whether the scheme cannot run without labels.
    pub fn requires_labels(&self) -> bool {
        match self {
            SchemeConfig::GroupVFold { .. } => true,
            SchemeConfig::Nested { outer, inner } => {
                outer.requires_labels() || inner.requires_labels()
            }
            other => other.is_stratified(),
        }
    }

    /// Seed of a randomized scheme; `None` for deterministic schemes.
    pub fn seed(&self) -> Option<u64> {
        match self {
            SchemeConfig::InitialSplit { seed, .. }
            | SchemeConfig::VFold { seed, .. }
            | SchemeConfig::GroupVFold { seed, .. }
            | SchemeConfig::MonteCarlo { seed, .. }
            | SchemeConfig::Bootstrap { seed, .. } => Some(*seed),
            SchemeConfig::Nested { outer, .. } => outer.seed(),
            _ => None,
        }
    }

    /// Same configuration with every seed replaced by `f(seed)`.
    pub fn map_seeds(&self, f: &impl Fn(u64) -> u64) -> SchemeConfig {
        let mut config = self.clone();
        match &mut config {
            SchemeConfig::InitialSplit { seed, .. }
            | SchemeConfig::VFold { seed, .. }
            | SchemeConfig::GroupVFold { seed, .. }
            | SchemeConfig::MonteCarlo { seed, .. }
            | SchemeConfig::Bootstrap { seed, .. } => *seed = f(*seed),
            SchemeConfig::Nested { outer, inner } => {
                *outer = Box::new(outer.map_seeds(f));
                *inner = Box::new(inner.map_seeds(f));
            }
            _ => {}
        }
        config
    }
}

/// Scheme provenance tag carried by every split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    InitialSplit,
    InitialTimeSplit,
    VFold,
    GroupVFold,
    LeaveOneOut,
    MonteCarlo,
    Bootstrap,
    RollingOrigin,
    Nested,
}

impl SchemeKind {
    /// Snake-case name, matching the serialized `scheme` tag.
    pub fn name(&self) -> &'static str {
        match self {
            SchemeKind::InitialSplit => "initial_split",
            SchemeKind::InitialTimeSplit => "initial_time_split",
            SchemeKind::VFold => "v_fold",
            SchemeKind::GroupVFold => "group_v_fold",
            SchemeKind::LeaveOneOut => "leave_one_out",
            SchemeKind::MonteCarlo => "monte_carlo",
            SchemeKind::Bootstrap => "bootstrap",
            SchemeKind::RollingOrigin => "rolling_origin",
            SchemeKind::Nested => "nested",
        }
    }

    /// Whether the scheme draws random numbers.
    pub fn is_randomized(&self) -> bool {
        matches!(
            self,
            SchemeKind::InitialSplit
                | SchemeKind::VFold
                | SchemeKind::GroupVFold
                | SchemeKind::MonteCarlo
                | SchemeKind::Bootstrap
        )
    }
}

impl std::fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
