//! The per-cell worker protocol.

use std::sync::Arc;

use crest_barrier::CycleBarrier;
use crest_core::Deps;
use crest_grid::WaveGrid;
use tracing::trace;

/// One worker, bound to exactly one interior cell for its whole life.
///
/// Per round: wait for East, South, and South-East to publish (in any
/// order — the three reads are independent), sum them, publish the own
/// cell, then synchronize at the round barrier. The worker cannot re-enter
/// a round until the barrier releases it, which cannot happen until the
/// completion action has reset and reseeded the grid, which cannot run
/// until every worker has published — so stale reads across round
/// boundaries are impossible by transitivity.
///
/// There are no retries and no timeouts: with an acyclic dependency graph
/// and seeded borders, every wait is eventually satisfied; a missing seed
/// hangs the run rather than failing fast.
#[derive(Debug)]
pub struct CellWorker {
    cell: usize,
    deps: Deps,
    rounds: u64,
    grid: Arc<WaveGrid>,
    barrier: Arc<CycleBarrier>,
}

impl CellWorker {
    /// Bind a worker to interior cell `cell`.
    pub fn new(cell: usize, grid: Arc<WaveGrid>, barrier: Arc<CycleBarrier>, rounds: u64) -> Self {
        let deps = grid.lattice().dependencies(cell);
        Self {
            cell,
            deps,
            rounds,
            grid,
            barrier,
        }
    }

    /// Run the configured number of rounds, then exit.
    pub fn run(self) {
        for _ in 0..self.rounds {
            let mut sum = 0i64;
            for &dep in &self.deps {
                // Sums wrap for large lattices.
                sum = sum.wrapping_add(self.grid.wait_ready(dep));
            }
            self.grid.publish(self.cell, sum);
            trace!(cell = self.cell, value = sum, "published");
            self.barrier.wait();
        }
    }
}
