//! Scheme builder.

use resample_spi::SchemeConfig;

use crate::config::SchemeDefaults;

/// Fluent construction of a [`SchemeConfig`].
///
/// Setters that do not apply to the selected scheme are ignored, so
/// `SchemeBuilder::leave_one_out().seed(3)` is still leave-one-out.
#[derive(Debug, Clone)]
pub struct SchemeBuilder {
    config: SchemeConfig,
}

impl SchemeBuilder {
    // ========== Scheme Selection ==========

    /// Random holdout with analysis share `prop`.
    pub fn initial_split(prop: f64) -> Self {
        Self::from(SchemeDefaults::initial_split()).prop(prop)
    }

    /// Chronological holdout with analysis share `prop`.
    pub fn initial_time_split(prop: f64) -> Self {
        Self::from(SchemeDefaults::initial_time_split()).prop(prop)
    }

    /// K-fold cross-validation.
    pub fn vfold(folds: usize) -> Self {
        Self::from(SchemeDefaults::vfold()).folds(folds)
    }

    /// Grouped k-fold cross-validation.
    pub fn group_vfold(folds: usize) -> Self {
        Self::from(SchemeDefaults::group_vfold()).folds(folds)
    }

    pub fn leave_one_out() -> Self {
        Self::from(SchemeConfig::LeaveOneOut)
    }

    /// Monte Carlo cross-validation.
    pub fn monte_carlo(prop: f64, times: usize) -> Self {
        Self::from(SchemeDefaults::monte_carlo()).prop(prop).times(times)
    }

    pub fn bootstrap(times: usize) -> Self {
        Self::from(SchemeDefaults::bootstrap()).times(times)
    }

    /// Cumulative rolling origin starting from `initial` rows.
    pub fn rolling_origin(initial: usize) -> Self {
        Self::from(SchemeDefaults::rolling_origin(initial))
    }

    // ========== Parameters ==========

    pub fn prop(mut self, value: f64) -> Self {
        match &mut self.config {
            SchemeConfig::InitialSplit { prop, .. }
            | SchemeConfig::InitialTimeSplit { prop }
            | SchemeConfig::MonteCarlo { prop, .. } => *prop = value,
            _ => {}
        }
        self
    }

    pub fn folds(mut self, value: usize) -> Self {
        match &mut self.config {
            SchemeConfig::VFold { folds, .. } | SchemeConfig::GroupVFold { folds, .. } => {
                *folds = value
            }
            _ => {}
        }
        self
    }

    pub fn repeats(mut self, value: usize) -> Self {
        if let SchemeConfig::VFold { repeats, .. } = &mut self.config {
            *repeats = value;
        }
        self
    }

    pub fn times(mut self, value: usize) -> Self {
        match &mut self.config {
            SchemeConfig::MonteCarlo { times, .. } | SchemeConfig::Bootstrap { times, .. } => {
                *times = value
            }
            _ => {}
        }
        self
    }

    /// Stratify on the labels passed at resampling time.
    pub fn stratified(mut self) -> Self {
        match &mut self.config {
            SchemeConfig::InitialSplit { strata, .. }
            | SchemeConfig::VFold { strata, .. }
            | SchemeConfig::MonteCarlo { strata, .. }
            | SchemeConfig::Bootstrap { strata, .. } => *strata = true,
            _ => {}
        }
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        match &mut self.config {
            SchemeConfig::InitialSplit { seed, .. }
            | SchemeConfig::VFold { seed, .. }
            | SchemeConfig::GroupVFold { seed, .. }
            | SchemeConfig::MonteCarlo { seed, .. }
            | SchemeConfig::Bootstrap { seed, .. } => *seed = value,
            _ => {}
        }
        self
    }

    /// Rolling-origin assessment window.
    pub fn assess(mut self, value: usize) -> Self {
        if let SchemeConfig::RollingOrigin { assess, .. } = &mut self.config {
            *assess = value;
        }
        self
    }

    /// Rolling-origin: grow the analysis window (`true`) or slide it.
    pub fn cumulative(mut self, value: bool) -> Self {
        if let SchemeConfig::RollingOrigin { cumulative, .. } = &mut self.config {
            *cumulative = value;
        }
        self
    }

    /// Rolling-origin: extra rows between consecutive slice origins.
    pub fn skip(mut self, value: usize) -> Self {
        if let SchemeConfig::RollingOrigin { skip, .. } = &mut self.config {
            *skip = value;
        }
        self
    }

    // ========== Composition ==========

    /// Nest `inner` inside the current scheme.
    pub fn nest(self, inner: impl Into<SchemeConfig>) -> Self {
        Self::from(SchemeConfig::Nested {
            outer: Box::new(self.config),
            inner: Box::new(inner.into()),
        })
    }

    // ========== Build ==========

    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    pub fn build(self) -> SchemeConfig {
        self.config
    }
}

impl From<SchemeConfig> for SchemeBuilder {
    fn from(config: SchemeConfig) -> Self {
        Self { config }
    }
}

impl From<SchemeBuilder> for SchemeConfig {
    fn from(builder: SchemeBuilder) -> Self {
        builder.config
    }
}

impl Default for SchemeBuilder {
    fn default() -> Self {
        Self::from(SchemeDefaults::vfold())
    }
}
