//! The wave grid: lattice-shaped array of condition-signaled cells.

use crest_core::Lattice;

use crate::cell::Cell;

/// Lattice-shaped storage of per-cell values and synchronization state.
///
/// Each cell carries its own mutex and condition variable; no operation
/// ever holds more than one cell's lock at a time, so there is no lock
/// ordering to get wrong.
///
/// [`reset`](WaveGrid::reset) and [`seed_borders`](WaveGrid::seed_borders)
/// are only safe to call while no worker is mid-read or mid-write of any
/// cell. The barrier's completion action is the one caller that can
/// guarantee this: it runs exactly when every worker has finished
/// publishing and is blocked entering the barrier.
#[derive(Debug)]
pub struct WaveGrid {
    lattice: Lattice,
    cells: Box<[Cell]>,
}

// Compile-time assertion: WaveGrid must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<WaveGrid>();
};

impl WaveGrid {
    /// Allocate a grid for the given lattice, all cells unready.
    pub fn new(lattice: Lattice) -> Self {
        let cells = (0..lattice.cell_count())
            .map(|_| Cell::new())
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { lattice, cells }
    }

    /// The lattice shape this grid was built for.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Block until cell `idx` is published for the current round, then
    /// return its value.
    pub fn wait_ready(&self, idx: usize) -> i64 {
        self.cells[idx].wait_ready()
    }

    /// Publish cell `idx` and wake all dependents blocked on it.
    pub fn publish(&self, idx: usize, value: i64) {
        self.cells[idx].publish(value);
    }

    /// The published value of cell `idx`, if it is ready this round.
    pub fn published(&self, idx: usize) -> Option<i64> {
        self.cells[idx].published()
    }

    /// Clear every cell back to unready, each under its own lock.
    pub fn reset(&self) {
        for cell in self.cells.iter() {
            cell.reset();
        }
    }

    /// Seed every border cell to 1 and broadcast on it.
    ///
    /// This both provides the round's input data and kicks off the wave:
    /// the first interior cell's dependencies are all borders.
    pub fn seed_borders(&self) {
        for idx in self.lattice.border_indices() {
            self.cells[idx].publish(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn grid(rows: usize, cols: usize) -> WaveGrid {
        WaveGrid::new(Lattice::new(rows, cols).unwrap())
    }

    #[test]
    fn publish_then_wait_returns_value() {
        let g = grid(3, 3);
        g.publish(4, -17);
        assert_eq!(g.wait_ready(4), -17);
    }

    #[test]
    fn zero_value_publish_is_ready() {
        // The explicit ready flag means a published zero is observable.
        let g = grid(2, 2);
        g.publish(0, 0);
        assert_eq!(g.published(0), Some(0));
        assert_eq!(g.wait_ready(0), 0);
    }

    #[test]
    fn wait_blocks_until_published() {
        let g = Arc::new(grid(3, 3));
        let reader = {
            let g = Arc::clone(&g);
            thread::spawn(move || g.wait_ready(5))
        };
        // Give the reader time to block on the condvar.
        thread::sleep(Duration::from_millis(20));
        g.publish(5, 99);
        assert_eq!(reader.join().unwrap(), 99);
    }

    #[test]
    fn publish_wakes_all_waiters() {
        let g = Arc::new(grid(3, 3));
        let woken = Arc::new(AtomicUsize::new(0));

        let readers: Vec<_> = (0..3)
            .map(|_| {
                let g = Arc::clone(&g);
                let woken = Arc::clone(&woken);
                thread::spawn(move || {
                    let v = g.wait_ready(0);
                    woken.fetch_add(1, Ordering::SeqCst);
                    v
                })
            })
            .collect();

        thread::sleep(Duration::from_millis(20));
        g.publish(0, 7);
        for r in readers {
            assert_eq!(r.join().unwrap(), 7);
        }
        assert_eq!(woken.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn reset_clears_every_cell() {
        let g = grid(3, 4);
        for idx in 0..g.lattice().cell_count() {
            g.publish(idx, 5);
        }
        g.reset();
        for idx in 0..g.lattice().cell_count() {
            assert_eq!(g.published(idx), None);
        }
    }

    #[test]
    fn seed_borders_readies_exactly_the_border() {
        let g = grid(4, 3);
        g.seed_borders();
        for idx in 0..g.lattice().cell_count() {
            if g.lattice().is_border(idx) {
                assert_eq!(g.published(idx), Some(1));
            } else {
                assert_eq!(g.published(idx), None);
            }
        }
    }

    #[test]
    fn reseed_after_reset_restarts_the_wave() {
        let g = grid(3, 3);
        g.seed_borders();
        g.reset();
        assert_eq!(g.published(g.lattice().index(0, 2)), None);
        g.seed_borders();
        assert_eq!(g.published(g.lattice().index(0, 2)), Some(1));
    }
}
