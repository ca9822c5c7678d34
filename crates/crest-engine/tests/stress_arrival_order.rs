//! Arrival-order stress: jittered workers must not change any result.
//!
//! The protocol claims correctness independent of scheduling. Inject
//! random delays before each dependency read and before each barrier
//! arrival, and check every round still produces the reference corner
//! value.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use rand::RngExt;

use crest_barrier::CycleBarrier;
use crest_core::Lattice;
use crest_grid::WaveGrid;
use crest_test_utils::reference_corner;

#[test]
fn jittered_workers_produce_the_reference_result_every_round() {
    const ROUNDS: u64 = 6;

    let lattice = Lattice::new(6, 6).unwrap();
    let grid = Arc::new(WaveGrid::new(lattice));
    let corner_values = Arc::new(Mutex::new(Vec::new()));

    let parties = lattice.interior_count() + 1;
    let barrier = {
        let grid = Arc::clone(&grid);
        let corner_values = Arc::clone(&corner_values);
        Arc::new(
            CycleBarrier::with_action(parties, move || {
                corner_values
                    .lock()
                    .unwrap()
                    .push(grid.published(0).unwrap());
                grid.reset();
                grid.seed_borders();
            })
            .unwrap(),
        )
    };

    let workers: Vec<_> = lattice
        .interior_indices()
        .into_iter()
        .map(|cell| {
            let grid = Arc::clone(&grid);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut rng = rand::rng();
                for _ in 0..ROUNDS {
                    let mut sum = 0i64;
                    for &dep in &grid.lattice().dependencies(cell) {
                        thread::sleep(Duration::from_micros(rng.random_range(0..500)));
                        sum = sum.wrapping_add(grid.wait_ready(dep));
                    }
                    grid.publish(cell, sum);
                    thread::sleep(Duration::from_micros(rng.random_range(0..500)));
                    barrier.wait();
                }
            })
        })
        .collect();

    grid.seed_borders();
    for _ in 0..ROUNDS {
        barrier.wait();
    }
    for worker in workers {
        worker.join().unwrap();
    }

    let expected = reference_corner(&lattice);
    let observed = corner_values.lock().unwrap();
    assert_eq!(observed.len(), ROUNDS as usize);
    assert!(
        observed.iter().all(|&v| v == expected),
        "jitter changed a round result: {observed:?} vs {expected}"
    );
}
