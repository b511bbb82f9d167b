//! Storage representation of the system matrix.

use std::mem::size_of;
use std::str::FromStr;

use crate::error::Error;

/// How the system matrix is stored and which solver handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    /// Every entry stored explicitly; solved with dense LU.
    Dense,
    /// Compressed sparse column storage; solved with sparse LU.
    Sparse,
}

impl MatrixKind {
    /// All representations, in the order they are usually reported.
    pub const ALL: [MatrixKind; 2] = [MatrixKind::Dense, MatrixKind::Sparse];

    /// Parse from a tag such as `"dense"` or `"sparse"`.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dense" => Some(Self::Dense),
            "sparse" => Some(Self::Sparse),
            _ => None,
        }
    }

    /// Get the tag for this representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dense => "dense",
            Self::Sparse => "sparse",
        }
    }

    /// Bytes needed to store an `n`×`n` identity matrix in this representation.
    ///
    /// Dense storage grows with n², compressed column storage with n.
    pub fn estimated_storage_bytes(&self, n: usize) -> usize {
        match self {
            Self::Dense => n * n * size_of::<f64>(),
            Self::Sparse => {
                (n + 1) * size_of::<usize>() + n * (size_of::<usize>() + size_of::<f64>())
            }
        }
    }
}

impl FromStr for MatrixKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::UnknownMatrixKind(s.to_string()))
    }
}

impl std::fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags() {
        assert_eq!(MatrixKind::from_name("dense"), Some(MatrixKind::Dense));
        assert_eq!(MatrixKind::from_name("sparse"), Some(MatrixKind::Sparse));
        assert_eq!(MatrixKind::from_name(" Sparse\n"), Some(MatrixKind::Sparse));
        assert_eq!(MatrixKind::from_name("DENSE"), Some(MatrixKind::Dense));
    }

    #[test]
    fn rejects_unknown_tags() {
        for tag in ["banana", "", "csc", "dense-ish"] {
            assert_eq!(MatrixKind::from_name(tag), None, "tag {tag:?}");
        }

        let err = "banana".parse::<MatrixKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownMatrixKind(ref t) if t == "banana"));
        assert_eq!(err.to_string(), "unknown matrix type: \"banana\"");
    }

    #[test]
    fn name_round_trips_through_from_str() {
        for kind in MatrixKind::ALL {
            assert_eq!(kind.name().parse::<MatrixKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn dense_storage_grows_quadratically() {
        let n = 10_000;
        assert_eq!(MatrixKind::Dense.estimated_storage_bytes(n), 800_000_000);

        let sparse = MatrixKind::Sparse.estimated_storage_bytes(n);
        assert!(sparse < 1_000_000, "sparse identity should be well under 1 MB, got {sparse}");

        // Doubling n quadruples dense storage but only doubles sparse storage.
        let d1 = MatrixKind::Dense.estimated_storage_bytes(1000);
        let d2 = MatrixKind::Dense.estimated_storage_bytes(2000);
        assert_eq!(d2, 4 * d1);
        let s1 = MatrixKind::Sparse.estimated_storage_bytes(1000);
        let s2 = MatrixKind::Sparse.estimated_storage_bytes(2000);
        assert!(s2 < 3 * s1);
    }
}
