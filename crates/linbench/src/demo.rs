//! Build an identity system, solve it, and report memory along the way.

use std::time::{Duration, Instant};

use linbench_core::{MatrixKind, SystemMatrix, random_rhs, residual_norm};
use linbench_profile::MemoryObserver;
use linbench_solver::solve_system;
use nalgebra::DVector;

use crate::config::DemoConfig;
use crate::error::{Error, Result};

/// Checkpoint labels, in the order they are reported.
pub mod step {
    pub const START: &str = "start";
    pub const RHS: &str = "rhs allocated";
    pub const MATRIX: &str = "matrix assembled";
    pub const SOLVE: &str = "system solved";
    pub const DONE: &str = "done";

    pub const ALL: [&str; 5] = [START, RHS, MATRIX, SOLVE, DONE];
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub kind: MatrixKind,
    pub size: usize,
    /// The random right-hand side b.
    pub rhs: DVector<f64>,
    /// The computed solution u.
    pub solution: DVector<f64>,
    /// ‖u − b‖∞.
    pub max_deviation: f64,
    /// ‖A·u − b‖₂.
    pub residual_norm: f64,
    /// Bytes held by the matrix storage.
    pub storage_bytes: usize,
    /// Wall time from start to the finished solve.
    pub elapsed: Duration,
}

/// Build the identity system in the representation named by `tag` and solve it.
///
/// An unrecognized tag is not an error: one warning is logged, one diagnostic
/// goes to the observer, nothing is allocated and `Ok(None)` is returned.
pub fn build_and_solve_tagged(
    tag: &str,
    config: &DemoConfig,
    observer: &mut dyn MemoryObserver,
) -> Result<Option<SolveOutcome>> {
    match MatrixKind::from_name(tag) {
        Some(kind) => build_and_solve(kind, config, observer).map(Some),
        None => {
            let message = format!("unknown matrix type: {:?}", tag);
            log::warn!("{}", message);
            observer.diagnostic(&message);
            Ok(None)
        }
    }
}

/// Build the N×N identity as `kind`, draw a random b and solve A·u = b.
///
/// The right-hand side is drawn before the matrix is built. The solver is
/// the general one for the representation; nothing exploits that A is the
/// identity. The observer sees the checkpoints listed in [`step::ALL`].
pub fn build_and_solve(
    kind: MatrixKind,
    config: &DemoConfig,
    observer: &mut dyn MemoryObserver,
) -> Result<SolveOutcome> {
    let n = config.size;
    let started = Instant::now();
    observer.checkpoint(step::START);

    let b = random_rhs(n, config.random_source());
    observer.checkpoint(step::RHS);

    let a = SystemMatrix::identity(kind, n);
    let storage_bytes = a.storage_bytes();
    observer.checkpoint(step::MATRIX);

    let u = solve_system(&a, &b)?;
    let elapsed = started.elapsed();
    observer.checkpoint(step::SOLVE);

    let max_deviation = (&u - &b).amax();
    let residual = residual_norm(&a, u.as_slice(), b.as_slice());
    drop(a);
    observer.checkpoint(step::DONE);

    log::info!(
        "{} solve of {}x{} identity finished in {:.3?} (max |u - b| = {:e})",
        kind,
        n,
        n,
        elapsed,
        max_deviation
    );

    if config.verify && !(max_deviation <= config.tolerance) {
        return Err(Error::VerificationFailed {
            deviation: max_deviation,
            tolerance: config.tolerance,
        });
    }

    Ok(SolveOutcome {
        kind,
        size: n,
        rhs: b,
        solution: u,
        max_deviation,
        residual_norm: residual,
        storage_bytes,
        elapsed,
    })
}
