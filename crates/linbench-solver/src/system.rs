//! Representation-aware solve dispatch.

use linbench_core::SystemMatrix;
use nalgebra::DVector;

use crate::error::Result;
use crate::linear::{solve_dense, solve_sparse};

/// Solve A·x = b with the direct solver matching how A is stored.
///
/// Dense matrices go through dense LU with partial pivoting, CSC matrices
/// through sparse LU. Neither path looks at the values of A beforehand.
pub fn solve_system(a: &SystemMatrix, b: &DVector<f64>) -> Result<DVector<f64>> {
    let solution = match a {
        SystemMatrix::Dense(dense) => solve_dense(dense, b)?,
        SystemMatrix::Sparse(sparse) => solve_sparse(sparse, b)?,
    };
    log::debug!("Solved {}x{} {} system", a.dim(), a.dim(), a.kind());
    Ok(solution)
}
