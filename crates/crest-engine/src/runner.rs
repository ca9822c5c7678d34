//! Run orchestration: worker spawning, the conductor thread, and joins.

use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::debug;

use crest_barrier::CycleBarrier;
use crest_core::RoundId;
use crest_grid::WaveGrid;

use crate::config::{ConfigError, RunConfig};
use crate::result::{ResultSlot, RoundResult, RunReport};
use crate::worker::CellWorker;

/// Errors from launching or finishing a wavefront run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// A thread could not be spawned.
    ThreadSpawn {
        /// Name of the thread that failed to spawn.
        name: String,
        /// OS-level failure description.
        reason: String,
    },
    /// A worker thread panicked; the run is unrecoverable.
    WorkerPanicked {
        /// Lattice index of the first panicked worker's cell.
        cell: usize,
    },
    /// The conductor thread panicked; the run is unrecoverable.
    ConductorPanicked,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::ThreadSpawn { name, reason } => {
                write!(f, "failed to spawn thread '{name}': {reason}")
            }
            Self::WorkerPanicked { cell } => {
                write!(f, "worker for cell {cell} panicked")
            }
            Self::ConductorPanicked => write!(f, "conductor thread panicked"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Handle to a launched wavefront run.
///
/// Results stream over a bounded channel as rounds complete;
/// [`join`](RunHandle::join) waits for the conductor (and, through it,
/// every worker) and returns the final accounting. Dropping the handle
/// without joining detaches the run — it finishes on its own, and the
/// conductor blocks only if the results channel fills.
#[derive(Debug)]
pub struct RunHandle {
    results: Receiver<RoundResult>,
    conductor: JoinHandle<Result<RunReport, RunError>>,
}

impl RunHandle {
    /// Validate the config, build the grid and barrier, spawn one worker
    /// per interior cell and the conductor thread.
    ///
    /// The barrier has `interior_count + 1` parties; the extra party is
    /// the conductor, whose own `wait()` is what lets it observe each
    /// round's result between the wave and the reset.
    ///
    /// On worker spawn failure the already-spawned workers are detached,
    /// not joined: borders are seeded only after every spawn succeeds, so
    /// the strays stay blocked on unready cells and never run a round.
    /// There is deliberately no cancellation path to unblock them; callers
    /// are expected to exit.
    pub fn launch(config: RunConfig) -> Result<Self, RunError> {
        let lattice = config.validate()?;
        let grid = Arc::new(WaveGrid::new(lattice));
        let slot = Arc::new(ResultSlot::new());
        let corner = lattice.index(0, 0);

        let parties = lattice.interior_count() + 1;
        let barrier = {
            let grid = Arc::clone(&grid);
            let slot = Arc::clone(&slot);
            Arc::new(
                CycleBarrier::with_action(parties, move || {
                    let value = grid
                        .published(corner)
                        .expect("corner cell unpublished at cycle end");
                    slot.store(value);
                    grid.reset();
                    grid.seed_borders();
                })
                .expect("party count is at least 1"),
            )
        };

        let mut workers = Vec::with_capacity(lattice.interior_count());
        for cell in lattice.interior_indices() {
            let (r, c) = lattice.row_col(cell);
            let name = format!("wave-cell-{r}-{c}");
            let worker = CellWorker::new(
                cell,
                Arc::clone(&grid),
                Arc::clone(&barrier),
                config.rounds,
            );
            let handle = thread::Builder::new()
                .name(name.clone())
                .spawn(move || worker.run())
                .map_err(|e| RunError::ThreadSpawn {
                    name,
                    reason: e.to_string(),
                })?;
            workers.push((cell, handle));
        }

        let (tx, rx) = bounded(config.result_buffer);
        let rounds = config.rounds;
        let conductor = thread::Builder::new()
            .name("wave-conductor".to_string())
            .spawn(move || conduct(grid, barrier, slot, workers, rounds, tx))
            .map_err(|e| RunError::ThreadSpawn {
                name: "wave-conductor".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            results: rx,
            conductor,
        })
    }

    /// The per-round results channel. Disconnects once the conductor has
    /// finished joining workers.
    pub fn results(&self) -> &Receiver<RoundResult> {
        &self.results
    }

    /// Wait for the run to finish and return its accounting.
    pub fn join(self) -> Result<RunReport, RunError> {
        match self.conductor.join() {
            Ok(outcome) => outcome,
            Err(_) => Err(RunError::ConductorPanicked),
        }
    }
}

/// The conductor: seeds the first round, observes every round boundary,
/// then joins the workers.
fn conduct(
    grid: Arc<WaveGrid>,
    barrier: Arc<CycleBarrier>,
    slot: Arc<ResultSlot>,
    workers: Vec<(usize, JoinHandle<()>)>,
    rounds: u64,
    tx: Sender<RoundResult>,
) -> Result<RunReport, RunError> {
    debug!(
        rows = grid.lattice().rows(),
        cols = grid.lattice().cols(),
        workers = workers.len(),
        rounds,
        "seeding borders"
    );
    grid.seed_borders();

    for round in 0..rounds {
        barrier.wait();
        let value = slot.load();
        debug!(round, value, "round complete");
        // Best-effort send — the caller may have dropped the receiver.
        let _ = tx.send(RoundResult {
            round: RoundId(round),
            value,
        });
    }

    let mut workers_joined = 0;
    let mut first_panic = None;
    for (cell, handle) in workers {
        match handle.join() {
            Ok(()) => workers_joined += 1,
            Err(_) => {
                first_panic.get_or_insert(cell);
            }
        }
    }
    if let Some(cell) = first_panic {
        return Err(RunError::WorkerPanicked { cell });
    }

    Ok(RunReport {
        rounds_completed: rounds,
        workers_joined,
    })
}

/// Launch a run, drain every result, and join: the synchronous
/// convenience used by tests and small callers.
pub fn run_collect(config: RunConfig) -> Result<(Vec<RoundResult>, RunReport), RunError> {
    let handle = RunHandle::launch(config)?;
    let results: Vec<RoundResult> = handle.results().iter().collect();
    let report = handle.join()?;
    Ok((results, report))
}
