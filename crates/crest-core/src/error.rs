//! Error types for lattice construction.

use std::error::Error;
use std::fmt;

/// Errors arising from lattice construction.
///
/// Neighbor arithmetic itself is unchecked by design — validity is
/// guaranteed by construction once the dimensions pass these checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Fewer than 2 rows or columns: there would be no interior cell to
    /// compute, only borders.
    TooSmall {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// `rows * cols` does not fit in `usize`.
    CellCountOverflow {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { rows, cols } => {
                write!(f, "lattice {rows}x{cols} has no interior; need at least 2x2")
            }
            Self::CellCountOverflow { rows, cols } => {
                write!(f, "lattice {rows}x{cols} cell count overflows usize")
            }
        }
    }
}

impl Error for LatticeError {}
