//! Core types for the Crest wavefront engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! lattice geometry (index and neighbor arithmetic, border and interior
//! enumeration), the [`RoundId`] counter, and the error types shared by the
//! rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod id;
mod lattice;

pub use error::LatticeError;
pub use id::RoundId;
pub use lattice::{Deps, Lattice};
