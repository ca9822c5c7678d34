//! Row-major lattice geometry and neighbor arithmetic.
//!
//! The lattice is the static shape of a wavefront run: `rows x cols` cells
//! in row-major order, with the last row and last column acting as the
//! seeded border. Every cell outside the border is "interior" and owns a
//! worker; each interior cell depends on exactly three neighbors — East,
//! South, and South-East.
//!
//! ```text
//!         N
//!
//!     0 * * * * B
//!     * * * * * B
//!     * * * * * B
//!  W  * * * * * B   E
//!     * * * * * B
//!     B B B B B B
//!
//!         S
//! ```
//!
//! Neighbor arithmetic is deliberately unchecked: only interior cells
//! compute, and an interior cell's East/South/South-East indices are always
//! in bounds by construction. Dimension validation happens once, in
//! [`Lattice::new`].

use smallvec::SmallVec;

use crate::error::LatticeError;

/// The three dependency indices of an interior cell, inline-allocated.
pub type Deps = SmallVec<[usize; 3]>;

/// Rectangular row-major lattice with a seeded south/east border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    rows: usize,
    cols: usize,
}

impl Lattice {
    /// Create a lattice with the given dimensions.
    ///
    /// Requires at least 2 rows and 2 columns — anything smaller has no
    /// interior cell, so a wave could never start.
    pub fn new(rows: usize, cols: usize) -> Result<Self, LatticeError> {
        if rows < 2 || cols < 2 {
            return Err(LatticeError::TooSmall { rows, cols });
        }
        if rows.checked_mul(cols).is_none() {
            return Err(LatticeError::CellCountOverflow { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count, borders included.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of interior (computing) cells: `(rows - 1) * (cols - 1)`.
    pub fn interior_count(&self) -> usize {
        (self.rows - 1) * (self.cols - 1)
    }

    /// Row-major index of `(r, c)`.
    pub fn index(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    /// Inverse of [`index`](Lattice::index).
    pub fn row_col(&self, idx: usize) -> (usize, usize) {
        (idx / self.cols, idx % self.cols)
    }

    /// Index of the East neighbor. Unchecked.
    pub fn east(&self, idx: usize) -> usize {
        idx + 1
    }

    /// Index of the South neighbor. Unchecked.
    pub fn south(&self, idx: usize) -> usize {
        idx + self.cols
    }

    /// Index of the South-East neighbor. Unchecked.
    pub fn south_east(&self, idx: usize) -> usize {
        idx + self.cols + 1
    }

    /// The three dependency indices of an interior cell: East, South,
    /// South-East. The enumeration order is fixed but carries no meaning —
    /// all three reads are independent.
    pub fn dependencies(&self, idx: usize) -> Deps {
        let mut deps = Deps::new();
        deps.push(self.east(idx));
        deps.push(self.south(idx));
        deps.push(self.south_east(idx));
        deps
    }

    /// Whether `idx` lies on the border (last row or last column).
    pub fn is_border(&self, idx: usize) -> bool {
        let (r, c) = self.row_col(idx);
        r == self.rows - 1 || c == self.cols - 1
    }

    /// Border cell indices, each visited exactly once: the full last
    /// column top to bottom, then the last row minus the shared corner.
    pub fn border_indices(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.rows + self.cols - 1);
        for r in 0..self.rows {
            out.push(self.index(r, self.cols - 1));
        }
        for c in 0..self.cols - 1 {
            out.push(self.index(self.rows - 1, c));
        }
        out
    }

    /// Interior cell indices in row-major order.
    pub fn interior_indices(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.interior_count());
        for r in 0..self.rows - 1 {
            for c in 0..self.cols - 1 {
                out.push(self.index(r, c));
            }
        }
        out
    }
}
