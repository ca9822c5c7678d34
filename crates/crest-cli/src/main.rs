//! Command-line runner for Crest wavefront computations.
//!
//! ```bash
//! # 3x3 lattice, 5 rounds — prints "Round k, result is 13" five times.
//! crest 3 3 5
//!
//! # Verbose round-boundary logging on stderr.
//! crest 8 8 100 --verbose
//! ```
//!
//! Exit code is 0 on success and 1 on configuration, thread-creation, or
//! join failure.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crest_engine::{RunConfig, RunHandle};

/// Thread-per-cell wavefront computation over a rectangular lattice.
#[derive(Parser)]
#[command(name = "crest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Lattice row count (at least 2)
    rows: usize,

    /// Lattice column count (at least 2)
    cols: usize,

    /// Number of independent rounds to run
    rounds: u64,

    /// Enable verbose round-boundary logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let handle = match RunHandle::launch(RunConfig::new(cli.rows, cli.cols, cli.rounds)) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("crest: {e}");
            return ExitCode::FAILURE;
        }
    };

    for result in handle.results().iter() {
        println!("Round {}, result is {}", result.round, result.value);
    }

    match handle.join() {
        Ok(report) => {
            tracing::debug!(
                rounds = report.rounds_completed,
                workers = report.workers_joined,
                "run complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("crest: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr tracing subscriber. `RUST_LOG` wins when set;
/// otherwise `--verbose` raises the default level from warn to debug.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
