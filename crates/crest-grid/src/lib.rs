//! Per-cell condition-signaled value storage.
//!
//! [`WaveGrid`] holds one value slot per lattice cell, each guarded by its
//! own mutex and condition variable. Producers publish exactly once per
//! round; dependents block on the cell's condition variable until the value
//! is ready. There is no global ordering authority — the wave emerges from
//! per-cell signaling alone.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cell;
mod grid;

pub use grid::WaveGrid;
