//! Compressed sparse column (CSC) matrix storage.
//!
//! Only the nonzero entries are stored, column by column:
//! - `col_ptr[j]..col_ptr[j + 1]` is the range of entries for column j
//! - `row_idx[k]` gives the row index for entry k
//! - `values[k]` gives the value for entry k
//!
//! Row indices are strictly increasing within each column.

use std::mem::size_of;

use nalgebra::DMatrix;

use crate::error::{Error, Result};

/// Real sparse matrix in compressed sparse column format.
#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix {
    nrows: usize,
    ncols: usize,
    /// Column pointers (length ncols + 1).
    col_ptr: Vec<usize>,
    /// Row index of each stored entry.
    row_idx: Vec<usize>,
    /// Value of each stored entry.
    values: Vec<f64>,
}

impl CscMatrix {
    /// Build from raw CSC arrays, validating the structure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStructure`] if:
    /// - `col_ptr` does not have `ncols + 1` entries, start at 0, or is non-decreasing
    /// - `row_idx` and `values` lengths do not match the final column pointer
    /// - a row index is out of range or rows are not strictly increasing in a column
    pub fn new(
        nrows: usize,
        ncols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if col_ptr.len() != ncols + 1 {
            return Err(Error::InvalidStructure(format!(
                "col_ptr length must be ncols + 1 ({}), got {}",
                ncols + 1,
                col_ptr.len()
            )));
        }
        if col_ptr[0] != 0 {
            return Err(Error::InvalidStructure("col_ptr must start at 0".into()));
        }
        if col_ptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::InvalidStructure(
                "col_ptr must be non-decreasing".into(),
            ));
        }

        let nnz = col_ptr[ncols];
        if row_idx.len() != nnz || values.len() != nnz {
            return Err(Error::InvalidStructure(format!(
                "row_idx ({}) and values ({}) length must match nnz ({})",
                row_idx.len(),
                values.len(),
                nnz
            )));
        }

        for j in 0..ncols {
            let rows = &row_idx[col_ptr[j]..col_ptr[j + 1]];
            if let Some(&row) = rows.iter().find(|&&r| r >= nrows) {
                return Err(Error::IndexOutOfBounds {
                    row,
                    col: j,
                    nrows,
                    ncols,
                });
            }
            if rows.windows(2).any(|w| w[0] >= w[1]) {
                return Err(Error::InvalidStructure(format!(
                    "row indices in column {j} must be strictly increasing"
                )));
            }
        }

        Ok(Self {
            nrows,
            ncols,
            col_ptr,
            row_idx,
            values,
        })
    }

    /// The n×n identity: exactly one stored entry per column.
    pub fn identity(n: usize) -> Self {
        Self {
            nrows: n,
            ncols: n,
            col_ptr: (0..=n).collect(),
            row_idx: (0..n).collect(),
            values: vec![1.0; n],
        }
    }

    /// Assemble from `(row, col, value)` triplets.
    ///
    /// Duplicate positions are summed.
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        triplets: &[(usize, usize, f64)],
    ) -> Result<Self> {
        if let Some(&(row, col, _)) = triplets
            .iter()
            .find(|&&(r, c, _)| r >= nrows || c >= ncols)
        {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            });
        }

        let mut sorted = triplets.to_vec();
        sorted.sort_by(|a, b| (a.1, a.0).cmp(&(b.1, b.0)));

        let mut col_ptr = vec![0usize; ncols + 1];
        let mut row_idx = Vec::with_capacity(sorted.len());
        let mut values: Vec<f64> = Vec::with_capacity(sorted.len());
        let mut last: Option<(usize, usize)> = None;

        for (row, col, value) in sorted {
            if last == Some((row, col)) {
                if let Some(prev) = values.last_mut() {
                    *prev += value;
                }
                continue;
            }
            row_idx.push(row);
            values.push(value);
            col_ptr[col + 1] += 1;
            last = Some((row, col));
        }

        for j in 0..ncols {
            col_ptr[j + 1] += col_ptr[j];
        }

        Ok(Self {
            nrows,
            ncols,
            col_ptr,
            row_idx,
            values,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn col_ptr(&self) -> &[usize] {
        &self.col_ptr
    }

    pub fn row_idx(&self) -> &[usize] {
        &self.row_idx
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Row indices and values stored in column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= ncols`.
    pub fn column(&self, j: usize) -> (&[usize], &[f64]) {
        let range = self.col_ptr[j]..self.col_ptr[j + 1];
        (&self.row_idx[range.clone()], &self.values[range])
    }

    /// Entry (i, j), or 0.0 when it is not stored.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i >= self.nrows || j >= self.ncols {
            return 0.0;
        }
        let (rows, vals) = self.column(j);
        match rows.binary_search(&i) {
            Ok(k) => vals[k],
            Err(_) => 0.0,
        }
    }

    /// First column with no stored entries, if any.
    ///
    /// A square matrix with an empty column is structurally singular.
    pub fn first_empty_column(&self) -> Option<usize> {
        self.col_ptr.windows(2).position(|w| w[0] == w[1])
    }

    /// Iterate over stored entries as `(row, col, value)`, column by column.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.ncols).flat_map(move |j| {
            let (rows, vals) = self.column(j);
            rows.iter().zip(vals).map(move |(&i, &v)| (i, j, v))
        })
    }

    /// Expand into a dense matrix.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut dense = DMatrix::zeros(self.nrows, self.ncols);
        for (i, j, v) in self.triplets() {
            dense[(i, j)] = v;
        }
        dense
    }

    /// Heap bytes held by the index and value arrays.
    pub fn storage_bytes(&self) -> usize {
        self.col_ptr.len() * size_of::<usize>()
            + self.row_idx.len() * size_of::<usize>()
            + self.values.len() * size_of::<f64>()
    }
}
