//! Generator settings.

/// Bounds on the rejection-sampling loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Maximum candidates drawn before giving up.
    pub trials: u32,
    /// Largest acceptable probability that all `trials` candidates miss.
    pub max_failure_rate: f64,
}

impl GeneratorConfig {
    pub const DEFAULT_TRIALS: u32 = 200;
    pub const DEFAULT_MAX_FAILURE_RATE: f64 = 1e-9;

    pub fn trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    pub fn max_failure_rate(mut self, rate: f64) -> Self {
        self.max_failure_rate = rate;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            trials: Self::DEFAULT_TRIALS,
            max_failure_rate: Self::DEFAULT_MAX_FAILURE_RATE,
        }
    }
}
