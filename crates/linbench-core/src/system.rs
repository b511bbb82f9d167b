//! System matrix in either storage representation.

use nalgebra::DMatrix;

use crate::csc::CscMatrix;
use crate::kind::MatrixKind;
use crate::operator::{DenseOperator, RealOperator};

/// An N×N system matrix, stored densely or as CSC.
#[derive(Debug, Clone)]
pub enum SystemMatrix {
    Dense(DMatrix<f64>),
    Sparse(CscMatrix),
}

impl SystemMatrix {
    /// The n×n identity in the requested representation.
    ///
    /// The dense variant allocates all n² entries up front.
    pub fn identity(kind: MatrixKind, n: usize) -> Self {
        let matrix = match kind {
            MatrixKind::Dense => Self::Dense(DMatrix::identity(n, n)),
            MatrixKind::Sparse => Self::Sparse(CscMatrix::identity(n)),
        };
        log::debug!(
            "Assembled {}x{} {} identity ({} bytes)",
            n,
            n,
            kind,
            matrix.storage_bytes()
        );
        matrix
    }

    pub fn kind(&self) -> MatrixKind {
        match self {
            Self::Dense(_) => MatrixKind::Dense,
            Self::Sparse(_) => MatrixKind::Sparse,
        }
    }

    /// Number of rows.
    pub fn dim(&self) -> usize {
        match self {
            Self::Dense(a) => a.nrows(),
            Self::Sparse(a) => a.nrows(),
        }
    }

    /// Number of explicitly stored entries (n² for dense).
    pub fn stored_entries(&self) -> usize {
        match self {
            Self::Dense(a) => a.len(),
            Self::Sparse(a) => a.nnz(),
        }
    }

    /// Heap bytes held by the matrix storage.
    pub fn storage_bytes(&self) -> usize {
        match self {
            Self::Dense(a) => a.len() * std::mem::size_of::<f64>(),
            Self::Sparse(a) => a.storage_bytes(),
        }
    }
}

impl RealOperator for SystemMatrix {
    fn dim(&self) -> usize {
        SystemMatrix::dim(self)
    }

    fn apply(&self, x: &[f64], y: &mut [f64]) {
        match self {
            Self::Dense(a) => DenseOperator(a).apply(x, y),
            Self::Sparse(a) => a.apply(x, y),
        }
    }
}
