//! Per-round results and the end-of-run report.

use std::sync::atomic::{AtomicI64, Ordering};

use crest_core::RoundId;

/// The observed result of one completed round: the corner cell's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    /// Which round this result belongs to, counting from 0.
    pub round: RoundId,
    /// Value of cell (0, 0) after the round's wave completed.
    pub value: i64,
}

/// Accounting returned by [`RunHandle::join`](crate::RunHandle::join).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Rounds the conductor observed to completion.
    pub rounds_completed: u64,
    /// Worker threads joined cleanly.
    pub workers_joined: usize,
}

/// Single-writer slot for the corner value at a round boundary.
///
/// Written only inside the barrier's completion action — while every
/// party is blocked — and read by the conductor immediately after its own
/// `wait()` returns. The barrier already provides the happens-before
/// edge; the Release/Acquire pair keeps the slot self-contained.
#[derive(Debug, Default)]
pub(crate) struct ResultSlot {
    value: AtomicI64,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, value: i64) {
        self.value.store(value, Ordering::Release);
    }

    pub fn load(&self) -> i64 {
        self.value.load(Ordering::Acquire)
    }
}
