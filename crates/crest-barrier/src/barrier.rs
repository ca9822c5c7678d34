//! The reusable barrier implementation.

use std::fmt;
use std::sync::{Condvar, Mutex};

use crate::error::BarrierError;

/// State guarded by the barrier mutex.
///
/// The completion action lives inside the guarded state because it runs
/// under the lock: no party can observe the post-action world until the
/// generation has advanced and the broadcast has gone out.
struct State {
    arrived: usize,
    generation: u64,
    action: Box<dyn FnMut() + Send>,
}

/// A cyclic barrier for a fixed number of parties, with a completion
/// action run by the last arriver of each cycle.
///
/// Per cycle: parties arrive and block; the P-th arrival resets the
/// arrival count, runs the action synchronously, advances the generation,
/// and releases everyone (itself included). Waiters loop on the generation
/// value, so spurious wakeups are harmless.
///
/// The action must not call [`wait`](CycleBarrier::wait) on the same
/// barrier — it runs while every other party is blocked, so a re-entrant
/// wait can never be satisfied.
pub struct CycleBarrier {
    parties: usize,
    state: Mutex<State>,
    release: Condvar,
}

// Compile-time assertion: CycleBarrier must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<CycleBarrier>();
};

impl CycleBarrier {
    /// Create a barrier for `parties` parties with no completion action.
    pub fn new(parties: usize) -> Result<Self, BarrierError> {
        Self::with_action(parties, || {})
    }

    /// Create a barrier for `parties` parties with a completion action.
    pub fn with_action<F>(parties: usize, action: F) -> Result<Self, BarrierError>
    where
        F: FnMut() + Send + 'static,
    {
        if parties == 0 {
            return Err(BarrierError::ZeroParties);
        }
        Ok(Self {
            parties,
            state: Mutex::new(State {
                arrived: 0,
                generation: 0,
                action: Box::new(action),
            }),
            release: Condvar::new(),
        })
    }

    /// The fixed party count.
    pub fn parties(&self) -> usize {
        self.parties
    }

    /// The current generation: the number of completed cycles.
    pub fn generation(&self) -> u64 {
        self.state.lock().expect("barrier lock poisoned").generation
    }

    /// Arrive at the barrier and block until the cycle completes.
    ///
    /// The last arriver runs the completion action before anyone — itself
    /// included — proceeds. Returns the generation the completed cycle
    /// advanced to.
    pub fn wait(&self) -> u64 {
        let mut state = self.state.lock().expect("barrier lock poisoned");
        state.arrived += 1;
        if state.arrived == self.parties {
            state.arrived = 0;
            (state.action)();
            state.generation += 1;
            let generation = state.generation;
            self.release.notify_all();
            generation
        } else {
            let arrival_generation = state.generation;
            while state.generation == arrival_generation {
                state = self.release.wait(state).expect("barrier lock poisoned");
            }
            state.generation
        }
    }
}

impl fmt::Debug for CycleBarrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock().expect("barrier lock poisoned");
        f.debug_struct("CycleBarrier")
            .field("parties", &self.parties)
            .field("arrived", &state.arrived)
            .field("generation", &state.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn zero_parties_is_rejected() {
        assert_eq!(CycleBarrier::new(0).unwrap_err(), BarrierError::ZeroParties);
    }

    #[test]
    fn single_party_runs_action_every_cycle() {
        let runs = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&runs);
        let barrier = CycleBarrier::with_action(1, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        for cycle in 1..=5 {
            assert_eq!(barrier.wait(), cycle);
            assert_eq!(runs.load(Ordering::SeqCst), cycle);
        }
        assert_eq!(barrier.generation(), 5);
    }

    #[test]
    fn action_runs_exactly_once_per_cycle() {
        const PARTIES: usize = 8;
        const CYCLES: u64 = 20;

        let runs = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&runs);
        let barrier = Arc::new(
            CycleBarrier::with_action(PARTIES, move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap(),
        );

        let handles: Vec<_> = (0..PARTIES)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    for _ in 0..CYCLES {
                        barrier.wait();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(runs.load(Ordering::SeqCst), CYCLES);
        assert_eq!(barrier.generation(), CYCLES);
    }

    #[test]
    fn no_party_is_released_before_the_action_ran() {
        const PARTIES: usize = 6;
        const CYCLES: u64 = 10;

        let action_runs = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&action_runs);
        let barrier = Arc::new(
            CycleBarrier::with_action(PARTIES, move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap(),
        );

        let handles: Vec<_> = (0..PARTIES)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                let action_runs = Arc::clone(&action_runs);
                thread::spawn(move || {
                    for cycle in 1..=CYCLES {
                        let generation = barrier.wait();
                        // Release implies the cycle's action already ran.
                        assert!(action_runs.load(Ordering::SeqCst) >= cycle);
                        assert!(generation >= cycle);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }

    #[test]
    fn wait_returns_monotonic_generations() {
        const PARTIES: usize = 4;
        const CYCLES: usize = 25;

        let barrier = Arc::new(CycleBarrier::new(PARTIES).unwrap());
        let (tx, rx) = crossbeam_channel::unbounded();

        let handles: Vec<_> = (0..PARTIES)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                let tx = tx.clone();
                thread::spawn(move || {
                    let mut prev = 0;
                    for _ in 0..CYCLES {
                        let generation = barrier.wait();
                        assert!(generation > prev);
                        prev = generation;
                    }
                    tx.send(prev).unwrap();
                })
            })
            .collect();
        drop(tx);
        for h in handles {
            h.join().unwrap();
        }

        // Every party observed the final generation.
        let finals: Vec<u64> = rx.iter().collect();
        assert_eq!(finals.len(), PARTIES);
        assert!(finals.iter().all(|&g| g == CYCLES as u64));
    }

    #[test]
    fn debug_impl_reports_state() {
        let barrier = CycleBarrier::new(3).unwrap();
        let debug = format!("{barrier:?}");
        assert!(debug.contains("CycleBarrier"));
        assert!(debug.contains("parties"));
    }
}
