//! Linear system solvers.

use faer::Mat;
use faer::prelude::Solve;
use faer::sparse::linalg::solvers::Lu;
use faer::sparse::{SparseColMat, Triplet};
use linbench_core::CscMatrix;
use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

/// Solve a linear system Ax = b using LU decomposition.
pub fn solve_dense(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
    if a.nrows() != a.ncols() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            actual: a.ncols(),
        });
    }
    if a.nrows() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            actual: b.len(),
        });
    }
    // nalgebra's triangular solves underflow on 0x0
    if a.nrows() == 0 {
        return Ok(DVector::zeros(0));
    }

    a.clone().lu().solve(b).ok_or(Error::SingularMatrix)
}

/// Solve a sparse linear system Ax = b using sparse LU decomposition.
///
/// Factors once and solves once; use [`SparseLu`] to reuse the factorization.
pub fn solve_sparse(a: &CscMatrix, b: &DVector<f64>) -> Result<DVector<f64>> {
    SparseLu::new(a)?.solve(b)
}

/// Sparse LU factorization of a square CSC matrix.
///
/// The factorization is computed once in [`SparseLu::new`] and can then be
/// applied to any number of right-hand sides.
pub struct SparseLu {
    size: usize,
    lu: Lu<usize, f64>,
}

impl SparseLu {
    /// Factor `a`.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if `a` is not square
    /// - [`Error::SingularMatrix`] if a column has no stored entries
    /// - [`Error::SolverError`] if the backend rejects the matrix
    pub fn new(a: &CscMatrix) -> Result<Self> {
        if !a.is_square() {
            return Err(Error::DimensionMismatch {
                expected: a.nrows(),
                actual: a.ncols(),
            });
        }
        if let Some(col) = a.first_empty_column() {
            log::debug!("Column {} of {}x{} matrix is empty", col, a.nrows(), a.ncols());
            return Err(Error::SingularMatrix);
        }

        let size = a.nrows();
        let triplets: Vec<Triplet<usize, usize, f64>> = a
            .triplets()
            .map(|(i, j, v)| Triplet::new(i, j, v))
            .collect();
        let mat = SparseColMat::<usize, f64>::try_new_from_triplets(size, size, &triplets)
            .map_err(|e| Error::SolverError(format!("sparse matrix creation failed: {e:?}")))?;

        let lu = mat
            .as_ref()
            .sp_lu()
            .map_err(|e| Error::SolverError(format!("sparse LU factorization failed: {e:?}")))?;

        log::debug!(
            "Factored {}x{} sparse matrix ({} nonzeros)",
            size,
            size,
            a.nnz()
        );

        Ok(Self { size, lu })
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Solve Ax = b with the cached factorization.
    ///
    /// A zero pivot shows up as non-finite entries in the solution and is
    /// reported as [`Error::SingularMatrix`].
    pub fn solve(&self, b: &DVector<f64>) -> Result<DVector<f64>> {
        if b.len() != self.size {
            return Err(Error::DimensionMismatch {
                expected: self.size,
                actual: b.len(),
            });
        }

        let rhs = Mat::<f64>::from_fn(self.size, 1, |i, _| b[i]);
        let x = self.lu.solve(&rhs);

        let solution = DVector::from_fn(self.size, |i, _| x[(i, 0)]);
        if solution.iter().any(|v| !v.is_finite()) {
            return Err(Error::SingularMatrix);
        }
        Ok(solution)
    }
}
