//! Benchmark profiles and kernels for tabula.
//!
//! Provides pre-built model tables sized like real POMDP benchmarks and a
//! belief-update kernel that exercises the sparse-row inner loop the way a
//! point-based solver does:
//!
//! - [`reference_profile`]: 1000 states, 8 actions, 10 successors per row
//! - [`stress_profile`]: 10_000 states, 16 actions, 20 successors per row
//! - [`belief_update`]: `b'(s') ∝ O(a, s', o) · Σ_s T(s, a, s') b(s)`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tabula_sparse::{Table2, Table3};
use tabula_test_utils::random::{random_rewards, random_transitions};

/// Tables for one benchmark model.
pub struct BenchProfile {
    pub states: usize,
    pub actions: usize,
    pub observations: usize,
    /// `T(s, a, s')`.
    pub transitions: Table3,
    /// `O(a, s', o)`.
    pub observation_fn: Table3,
    /// `R(s, a)`.
    pub rewards: Table2,
}

fn build_profile(
    seed: u64,
    states: usize,
    actions: usize,
    observations: usize,
    successors: usize,
) -> BenchProfile {
    let transitions = random_transitions(seed, states, actions, successors);
    let observation_fn = observation_table(seed ^ 0x9e37_79b9, actions, states, observations);
    let rewards = random_rewards(seed.wrapping_add(1), states, actions, 0.1, 10.0);
    BenchProfile {
        states,
        actions,
        observations,
        transitions,
        observation_fn,
        rewards,
    }
}

/// `O(a, s', o)` built from a random transition table reinterpreted over
/// observations: every `(a, s')` row is a distribution over at most two
/// observations.
fn observation_table(seed: u64, actions: usize, states: usize, observations: usize) -> Table3 {
    let source = random_transitions(seed, observations.max(states), actions, 2);
    let mut o = Table3::new(actions, states, observations);
    for s2 in 0..states {
        for a in 0..actions {
            let row: Vec<(usize, f64)> = source
                .non_zero_entries(s2, a)
                .map(|(obs, p)| (obs % observations, p))
                .collect();
            for (obs, p) in row {
                let prev = o.value_at(a, s2, obs);
                o.set_value(a, s2, obs, prev + p);
            }
        }
    }
    o
}

/// 1000 states, 8 actions, 4 observations, 10 successors per row.
pub fn reference_profile(seed: u64) -> BenchProfile {
    build_profile(seed, 1000, 8, 4, 10)
}

/// 10_000 states, 16 actions, 8 observations, 20 successors per row.
pub fn stress_profile(seed: u64) -> BenchProfile {
    build_profile(seed, 10_000, 16, 8, 20)
}

/// Bayesian belief update after taking `action` and observing `observation`.
///
/// Returns the unnormalised posterior and its normaliser `Pr(o | b, a)`.
/// Walks only the stored successors of each `(s, a)` row.
pub fn belief_update(
    profile: &BenchProfile,
    belief: &[f64],
    action: usize,
    observation: usize,
) -> (Vec<f64>, f64) {
    let mut next = vec![0.0; profile.states];
    for (s, &b) in belief.iter().enumerate() {
        if b == 0.0 {
            continue;
        }
        for (s2, p) in profile.transitions.non_zero_entries(s, action) {
            next[s2] += p * b;
        }
    }
    let mut norm = 0.0;
    for (s2, mass) in next.iter_mut().enumerate() {
        *mass *= profile.observation_fn.value_at(action, s2, observation);
        norm += *mass;
    }
    (next, norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_test_utils::assert_row_stochastic;

    #[test]
    fn small_profile_is_well_formed() {
        let p = build_profile(5, 30, 3, 4, 4);
        assert_row_stochastic(&p.transitions);
        assert_row_stochastic(&p.observation_fn);
    }

    #[test]
    fn observation_probabilities_sum_to_one_over_o() {
        let p = build_profile(9, 12, 2, 3, 3);
        let uniform = vec![1.0 / 12.0; 12];
        let total: f64 = (0..3)
            .map(|o| belief_update(&p, &uniform, 1, o).1)
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
