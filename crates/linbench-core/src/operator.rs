//! Linear operator abstraction for matrix-vector products.
//!
//! Solvers never go through this trait; it exists so that a computed solution
//! can be checked against A·u = b without caring how A is stored.

use nalgebra::DMatrix;

use crate::csc::CscMatrix;

/// A linear operator that computes y = A * x for real (f64) vectors.
pub trait RealOperator {
    /// Dimension of the operator (N x N).
    fn dim(&self) -> usize;

    /// Apply the operator: y = A * x.
    ///
    /// `x` and `y` are f64 vectors of length `dim()`.
    fn apply(&self, x: &[f64], y: &mut [f64]);
}

impl RealOperator for CscMatrix {
    fn dim(&self) -> usize {
        self.nrows()
    }

    fn apply(&self, x: &[f64], y: &mut [f64]) {
        y.iter_mut().for_each(|v| *v = 0.0);
        for (j, &xj) in x.iter().enumerate().take(self.ncols()) {
            if xj == 0.0 {
                continue;
            }
            let (rows, vals) = self.column(j);
            for (&i, &a) in rows.iter().zip(vals) {
                y[i] += a * xj;
            }
        }
    }
}

/// Borrowed dense matrix viewed as an operator.
pub struct DenseOperator<'a>(pub &'a DMatrix<f64>);

impl RealOperator for DenseOperator<'_> {
    fn dim(&self) -> usize {
        self.0.nrows()
    }

    fn apply(&self, x: &[f64], y: &mut [f64]) {
        let a = self.0;
        for (i, yi) in y.iter_mut().enumerate().take(a.nrows()) {
            *yi = a.row(i).iter().zip(x).map(|(aij, xj)| aij * xj).sum();
        }
    }
}

/// Euclidean norm of the residual A·x − b.
pub fn residual_norm(op: &dyn RealOperator, x: &[f64], b: &[f64]) -> f64 {
    let mut ax = vec![0.0; op.dim()];
    op.apply(x, &mut ax);
    ax.iter()
        .zip(b)
        .map(|(axi, bi)| (axi - bi) * (axi - bi))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dmatrix;

    #[test]
    fn csc_apply_matches_dense() {
        let triplets = [(0, 0, 2.0), (1, 0, 1.0), (1, 1, 3.0), (2, 2, -1.0), (0, 2, 4.0)];
        let sparse = CscMatrix::from_triplets(3, 3, &triplets).unwrap();
        let dense = sparse.to_dense();

        let x = [1.0, 2.0, 3.0];
        let mut ys = [0.0; 3];
        let mut yd = [0.0; 3];
        sparse.apply(&x, &mut ys);
        DenseOperator(&dense).apply(&x, &mut yd);

        assert_eq!(ys, [14.0, 7.0, -3.0]);
        assert_eq!(ys, yd);
    }

    #[test]
    fn apply_overwrites_output() {
        let eye = CscMatrix::identity(2);
        let mut y = [9.0, 9.0];
        eye.apply(&[1.0, 2.0], &mut y);
        assert_eq!(y, [1.0, 2.0]);
    }

    #[test]
    fn residual_of_exact_solution_is_zero() {
        let a = dmatrix![2.0, 1.0; 1.0, 3.0];
        let r = residual_norm(&DenseOperator(&a), &[1.8, 1.4], &[5.0, 6.0]);
        assert!(r < 1e-12, "residual = {r}");
    }

    #[test]
    fn residual_of_wrong_solution() {
        let eye = CscMatrix::identity(2);
        let r = residual_norm(&eye, &[0.0, 0.0], &[3.0, 4.0]);
        assert!((r - 5.0).abs() < 1e-12);
    }
}
