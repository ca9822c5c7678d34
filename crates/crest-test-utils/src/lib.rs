//! Test utilities for Crest development.
//!
//! Provides a single-threaded reference evaluation of the wavefront, used
//! by the engine test suites to cross-check concurrent runs. The reference
//! walks the lattice from the south-east corner toward (0, 0) — the same
//! direction the wave travels — so every dependency is already computed
//! when a cell is visited.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use crest_core::Lattice;

/// Evaluate one full round sequentially and return the whole grid,
/// borders seeded to 1, every interior cell holding its wrapping
/// three-neighbor sum.
pub fn reference_grid(lattice: &Lattice) -> Vec<i64> {
    let mut values = vec![0i64; lattice.cell_count()];
    for idx in lattice.border_indices() {
        values[idx] = 1;
    }
    // Visit interior cells with all dependencies already filled:
    // bottom row upward, rightmost column leftward.
    for r in (0..lattice.rows() - 1).rev() {
        for c in (0..lattice.cols() - 1).rev() {
            let idx = lattice.index(r, c);
            values[idx] = values[lattice.east(idx)]
                .wrapping_add(values[lattice.south(idx)])
                .wrapping_add(values[lattice.south_east(idx)]);
        }
    }
    values
}

/// The reference result of a round: the value at cell (0, 0).
pub fn reference_corner(lattice: &Lattice) -> i64 {
    reference_grid(lattice)[0]
}
