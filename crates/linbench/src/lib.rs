//! # linbench
//!
//! Compares dense and sparse direct solves of an N×N identity system A·u = b,
//! observing memory at each step.
//!
//! The dense representation stores all N² entries and is solved with dense LU;
//! the sparse one stores the N diagonal entries in compressed column form and
//! is solved with sparse LU. Both return u ≈ b.
//!
//! ## Quick Start
//!
//! ```rust
//! use linbench::prelude::*;
//!
//! let config = DemoConfig::default().with_size(100);
//! let mut profiler = MemoryProfiler::heap_only();
//!
//! let outcome = build_and_solve(MatrixKind::Sparse, &config, &mut profiler).unwrap();
//! assert!(outcome.max_deviation < 1e-9);
//!
//! let report = profiler.finish("sparse solve");
//! println!("{}", report.to_text());
//! ```
//!
//! ## String tags
//!
//! [`build_and_solve_tagged`] accepts `"dense"` or `"sparse"`. Any other tag is
//! reported as a diagnostic and the call returns `Ok(None)` without building
//! anything.

pub mod config;
pub mod demo;
pub mod error;

// Re-export component crates
pub use linbench_core as core;
pub use linbench_profile as profile;
pub use linbench_solver as solver;

pub use config::{DEFAULT_TOLERANCE, DemoConfig};
pub use demo::{SolveOutcome, build_and_solve, build_and_solve_tagged, step};
pub use error::{Error, Result};

pub use linbench_core::{CscMatrix, DEFAULT_SIZE, MatrixKind, SystemMatrix};
pub use linbench_profile::{MemoryObserver, MemoryProfiler, MemoryReport, NoopObserver};

/// Prelude module containing commonly used types and traits.
///
/// ```rust
/// use linbench::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{DemoConfig, SolveOutcome, build_and_solve, build_and_solve_tagged};
    pub use crate::{MatrixKind, SystemMatrix};
    pub use crate::{MemoryObserver, MemoryProfiler, MemoryReport, NoopObserver};
}
