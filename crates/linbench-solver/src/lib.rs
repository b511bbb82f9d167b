//! Direct linear solvers for linbench.
//!
//! This crate provides:
//! - Dense LU solve with partial pivoting (nalgebra)
//! - Sparse LU solve for CSC matrices (faer)
//! - Dispatch on the system matrix representation

pub mod error;
pub mod linear;
pub mod system;

pub use error::{Error, Result};
pub use linear::{SparseLu, solve_dense, solve_sparse};
pub use system::solve_system;
