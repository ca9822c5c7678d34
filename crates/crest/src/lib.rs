//! Crest: dependency-driven wavefront computation over a rectangular
//! lattice.
//!
//! Every interior cell of the lattice is owned by one worker thread that
//! blocks on its East, South, and South-East neighbors via per-cell
//! condition signaling, publishes its sum, and synchronizes rounds through
//! a cyclic barrier whose last arriver records the result and reseeds the
//! lattice for the next round.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Crest sub-crates. For most users, adding `crest` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use crest::prelude::*;
//!
//! // 3x3 lattice, borders seeded to 1: the corner works out to 13,
//! // and every reseeded round repeats it.
//! let (results, report) = run_collect(RunConfig::new(3, 3, 4)).unwrap();
//! assert_eq!(results.len(), 4);
//! assert!(results.iter().all(|r| r.value == 13));
//! assert_eq!(report.workers_joined, 4);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `crest-core` | Lattice arithmetic, `RoundId`, errors |
//! | [`grid`] | `crest-grid` | Per-cell condition-signaled value storage |
//! | [`barrier`] | `crest-barrier` | Cyclic barrier with completion action |
//! | [`engine`] | `crest-engine` | Worker protocol, run orchestration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Lattice arithmetic and core types (`crest-core`).
pub use crest_core as types;

/// Per-cell condition-signaled value storage (`crest-grid`).
pub use crest_grid as grid;

/// Cyclic generation barrier with a last-arriver completion action
/// (`crest-barrier`).
pub use crest_barrier as barrier;

/// Worker protocol and run orchestration (`crest-engine`).
pub use crest_engine as engine;

/// Common imports for typical Crest usage.
///
/// ```rust
/// use crest::prelude::*;
/// ```
pub mod prelude {
    pub use crest_barrier::{BarrierError, CycleBarrier};
    pub use crest_core::{Lattice, LatticeError, RoundId};
    pub use crest_engine::{
        run_collect, CellWorker, ConfigError, RoundResult, RunConfig, RunError, RunHandle,
        RunReport,
    };
    pub use crest_grid::WaveGrid;
}
