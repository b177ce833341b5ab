//! Seeded random tables for property tests and benchmarks.
//!
//! All generators use `ChaCha8Rng::seed_from_u64`, so the same seed gives
//! the same table on every platform.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tabula_sparse::{Table2, Table3, TableConfig};

/// Random transition table with exactly `min(successors, states)` distinct
/// successor states per `(s, a)` row, weights normalised to sum to one.
pub fn random_transitions(seed: u64, states: usize, actions: usize, successors: usize) -> Table3 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let branching = successors.min(states);
    let config = TableConfig::for_successors(branching);
    let mut t = Table3::with_config(states, actions, states, &config);
    let mut weights = Vec::with_capacity(branching);

    for s in 0..states {
        for a in 0..actions {
            let targets = rand::seq::index::sample(&mut rng, states, branching);
            weights.clear();
            // (0, 1]: never zero, so every sampled successor is stored.
            weights.extend((0..branching).map(|_| 1.0 - rng.random::<f64>()));
            let total: f64 = weights.iter().sum();
            for (s2, w) in targets.iter().zip(&weights) {
                t.set_value(s, a, s2, w / total);
            }
        }
    }
    t
}

/// Random reward table where each cell is non-zero with probability
/// `density`, drawn uniformly from `[-magnitude, magnitude)`.
pub fn random_rewards(
    seed: u64,
    states: usize,
    actions: usize,
    density: f64,
    magnitude: f64,
) -> Table2 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut r = Table2::new(states, actions);
    for s in 0..states {
        for a in 0..actions {
            if rng.random_bool(density) {
                r.set_value(s, a, rng.random_range(-magnitude..magnitude));
            }
        }
    }
    r
}
