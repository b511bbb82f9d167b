//! Error types for linbench-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown matrix type: {0:?}")]
    UnknownMatrixKind(String),

    #[error("index ({row}, {col}) out of bounds for {nrows}x{ncols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },

    #[error("invalid sparse structure: {0}")]
    InvalidStructure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
