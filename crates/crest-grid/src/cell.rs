//! A single lattice cell: one value slot, one lock, one condition variable.

use std::sync::{Condvar, Mutex};

/// Value slot contents, guarded by the cell's mutex.
///
/// `ready` is an explicit flag rather than a sentinel value: a
/// legitimately-computed zero is indistinguishable from "not yet computed"
/// only if the value field is overloaded, and that overload would hang any
/// dependent of a zero-valued cell forever.
#[derive(Debug)]
pub(crate) struct Slot {
    pub value: i64,
    pub ready: bool,
}

/// One cell of the wave grid.
///
/// Exactly one producer writes the slot per round (the owning worker, or
/// the seeding pass for border cells) and at most three dependents read it.
/// All waking is broadcast: more than one dependent may be blocked on the
/// same producer, and a single-wake would strand the rest.
#[derive(Debug)]
pub(crate) struct Cell {
    pub slot: Mutex<Slot>,
    pub published: Condvar,
}

impl Cell {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                value: 0,
                ready: false,
            }),
            published: Condvar::new(),
        }
    }

    /// Block until the slot is ready, then return its value.
    ///
    /// Loops on the predicate rather than waiting once: condition waits are
    /// subject to spurious wakeups, and a signal may arrive before the
    /// dependent starts waiting.
    pub fn wait_ready(&self) -> i64 {
        let mut slot = self.slot.lock().expect("cell lock poisoned");
        while !slot.ready {
            slot = self.published.wait(slot).expect("cell lock poisoned");
        }
        slot.value
    }

    /// Publish a value and wake every blocked dependent.
    pub fn publish(&self, value: i64) {
        let mut slot = self.slot.lock().expect("cell lock poisoned");
        slot.value = value;
        slot.ready = true;
        self.published.notify_all();
    }

    /// Clear the slot back to unready.
    pub fn reset(&self) {
        let mut slot = self.slot.lock().expect("cell lock poisoned");
        slot.value = 0;
        slot.ready = false;
    }

    /// The published value, if any.
    pub fn published(&self) -> Option<i64> {
        let slot = self.slot.lock().expect("cell lock poisoned");
        slot.ready.then_some(slot.value)
    }
}
