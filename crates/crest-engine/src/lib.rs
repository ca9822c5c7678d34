//! Thread-per-cell wavefront runner.
//!
//! The engine owns thread lifecycle for a wavefront run: one
//! [`CellWorker`] per interior lattice cell, plus a conductor thread that
//! participates in the round barrier to observe each round's result
//! deterministically — strictly after the wave finishes and strictly
//! before the next round's reset overwrites it.
//!
//! Workers synchronize purely through the per-cell signaling of
//! [`crest_grid::WaveGrid`] and the round boundary of
//! [`crest_barrier::CycleBarrier`]; the engine adds no ordering authority
//! of its own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod result;
mod runner;
mod worker;

pub use config::{ConfigError, RunConfig};
pub use result::{RoundResult, RunReport};
pub use runner::{run_collect, RunError, RunHandle};
pub use worker::CellWorker;
