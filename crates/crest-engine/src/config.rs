//! Run configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use crest_core::{Lattice, LatticeError};

/// Complete configuration for a wavefront run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Lattice row count. Minimum: 2.
    pub rows: usize,
    /// Lattice column count. Minimum: 2.
    pub cols: usize,
    /// Number of independent rounds to execute. Zero is valid: workers
    /// start, run no round, and exit.
    pub rounds: u64,
    /// Capacity of the bounded per-round results channel. A full channel
    /// backpressures the conductor rather than dropping results.
    /// Default: 64. Minimum: 1.
    pub result_buffer: usize,
}

impl RunConfig {
    /// Configuration with the default result buffer.
    pub fn new(rows: usize, cols: usize, rounds: u64) -> Self {
        Self {
            rows,
            cols,
            rounds,
            result_buffer: 64,
        }
    }

    /// Validate all structural invariants and return the lattice shape
    /// the run will use.
    pub fn validate(&self) -> Result<Lattice, ConfigError> {
        if self.result_buffer == 0 {
            return Err(ConfigError::ResultBufferZero);
        }
        Ok(Lattice::new(self.rows, self.cols)?)
    }
}

/// Errors detected during [`RunConfig::validate()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The lattice dimensions are unusable.
    Lattice(LatticeError),
    /// The results channel capacity is zero.
    ResultBufferZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::ResultBufferZero => write!(f, "result_buffer must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            Self::ResultBufferZero => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}
