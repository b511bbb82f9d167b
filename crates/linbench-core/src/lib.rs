//! Matrix representations for the dense vs. sparse identity-solve benchmark.
//!
//! This crate provides:
//! - [`MatrixKind`], the closed set of storage representations
//! - [`CscMatrix`], compressed sparse column storage
//! - [`SystemMatrix`], an N×N system matrix in either representation
//! - Random right-hand-side generation
//! - The [`RealOperator`] trait used for residual checks

pub mod csc;
pub mod error;
pub mod kind;
pub mod operator;
pub mod rhs;
pub mod system;

pub use csc::CscMatrix;
pub use error::{Error, Result};
pub use kind::MatrixKind;
pub use operator::{DenseOperator, RealOperator, residual_norm};
pub use rhs::{RandomSource, random_rhs};
pub use system::SystemMatrix;

/// Problem size used when none is given.
pub const DEFAULT_SIZE: usize = 10_000;
