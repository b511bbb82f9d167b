//! Run configuration.

use linbench_core::{DEFAULT_SIZE, RandomSource};

/// Default bound on ‖u − b‖∞ when verifying an identity solve.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Parameters for one build-and-solve run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Matrix dimension N.
    pub size: usize,
    /// Seed for the right-hand side; `None` draws fresh entropy every run.
    pub seed: Option<u64>,
    /// Check the solution against the right-hand side after solving.
    pub verify: bool,
    /// Largest accepted ‖u − b‖∞ when verifying.
    pub tolerance: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            verify: true,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl DemoConfig {
    /// Set the matrix dimension.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Make the right-hand side reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the verification tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Skip the post-solve check.
    pub fn without_verification(mut self) -> Self {
        self.verify = false;
        self
    }

    pub fn random_source(&self) -> RandomSource {
        RandomSource::from_seed(self.seed)
    }
}
