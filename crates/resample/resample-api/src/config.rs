//! Default scheme parameters.

use resample_spi::SchemeConfig;

/// Default analysis proportion for holdout and Monte Carlo schemes.
pub const DEFAULT_PROP: f64 = 0.75;
/// Default number of folds.
pub const DEFAULT_FOLDS: usize = 10;
/// Default number of k-fold repeats.
pub const DEFAULT_REPEATS: usize = 1;
/// Default number of Monte Carlo or bootstrap draws.
pub const DEFAULT_TIMES: usize = 25;
/// Default rolling-origin assessment window.
pub const DEFAULT_ASSESS: usize = 1;
/// Default seed for randomized schemes.
pub const DEFAULT_SEED: u64 = 0;

/// Default configuration of every scheme variant that has one.
pub struct SchemeDefaults;

impl SchemeDefaults {
    pub fn initial_split() -> SchemeConfig {
        SchemeConfig::InitialSplit {
            prop: DEFAULT_PROP,
            strata: false,
            seed: DEFAULT_SEED,
        }
    }

    pub fn initial_time_split() -> SchemeConfig {
        SchemeConfig::InitialTimeSplit { prop: DEFAULT_PROP }
    }

    pub fn vfold() -> SchemeConfig {
        SchemeConfig::VFold {
            folds: DEFAULT_FOLDS,
            repeats: DEFAULT_REPEATS,
            strata: false,
            seed: DEFAULT_SEED,
        }
    }

    pub fn group_vfold() -> SchemeConfig {
        SchemeConfig::GroupVFold {
            folds: DEFAULT_FOLDS,
            seed: DEFAULT_SEED,
        }
    }

    pub fn monte_carlo() -> SchemeConfig {
        SchemeConfig::MonteCarlo {
            prop: DEFAULT_PROP,
            times: DEFAULT_TIMES,
            strata: false,
            seed: DEFAULT_SEED,
        }
    }

    pub fn bootstrap() -> SchemeConfig {
        SchemeConfig::Bootstrap {
            times: DEFAULT_TIMES,
            strata: false,
            seed: DEFAULT_SEED,
        }
    }

    /// Cumulative rolling origin; `initial` has no sensible default.
    pub fn rolling_origin(initial: usize) -> SchemeConfig {
        SchemeConfig::RollingOrigin {
            initial,
            assess: DEFAULT_ASSESS,
            cumulative: true,
            skip: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(
            SchemeDefaults::vfold(),
            SchemeConfig::VFold { folds: 10, repeats: 1, strata: false, seed: 0 }
        );
        assert_eq!(
            SchemeDefaults::bootstrap(),
            SchemeConfig::Bootstrap { times: 25, strata: false, seed: 0 }
        );
        assert_eq!(
            SchemeDefaults::rolling_origin(5),
            SchemeConfig::RollingOrigin { initial: 5, assess: 1, cumulative: true, skip: 0 }
        );
    }

    #[test]
    fn test_defaults_match_json_defaults() {
        let parsed: SchemeConfig =
            serde_json::from_str(r#"{"scheme": "v_fold", "folds": 10}"#).unwrap();
        assert_eq!(parsed, SchemeDefaults::vfold());
    }
}
