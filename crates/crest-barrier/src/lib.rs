//! Cyclic generation barrier with a last-arriver completion action.
//!
//! [`CycleBarrier`] synchronizes a fixed set of parties at round
//! boundaries. The distinguishing feature over `std::sync::Barrier` is the
//! injected completion action: whichever party arrives last runs it
//! *before* any party is released into the next cycle. That ordering is
//! load-bearing — it lets the action mutate shared state with certainty
//! that every party has finished the current cycle and none has begun the
//! next.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod barrier;
mod error;

pub use barrier::CycleBarrier;
pub use error::BarrierError;
