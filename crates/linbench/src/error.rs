//! Error types for linbench.

use thiserror::Error;

/// Result type for benchmark runs.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or solving the system.
#[derive(Debug, Error)]
pub enum Error {
    /// Matrix construction or tag parsing failed.
    #[error(transparent)]
    Core(#[from] linbench_core::Error),

    /// The solver failed.
    #[error("solver error: {0}")]
    Solver(#[from] linbench_solver::Error),

    /// The solution is further from the right-hand side than allowed.
    #[error("solution deviates from rhs by {deviation:e} (tolerance {tolerance:e})")]
    VerificationFailed { deviation: f64, tolerance: f64 },
}
