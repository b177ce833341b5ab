//! The classic tiger problem as sparse tables.
//!
//! States: tiger behind the left door (0) or the right door (1).
//! Actions: listen (0), open left (1), open right (2).
//! Observations: hear left (0), hear right (1).

use tabula_sparse::{Table2, Table3};

pub const STATES: usize = 2;
pub const ACTIONS: usize = 3;
pub const OBSERVATIONS: usize = 2;

pub const TIGER_LEFT: usize = 0;
pub const TIGER_RIGHT: usize = 1;
pub const LISTEN: usize = 0;
pub const OPEN_LEFT: usize = 1;
pub const OPEN_RIGHT: usize = 2;

/// Probability that listening reports the correct side.
pub const LISTEN_ACCURACY: f64 = 0.85;

/// `T(s, a, s')`. Listening keeps the tiger in place; opening a door
/// resets the problem uniformly.
pub fn tiger_transitions() -> Table3 {
    let mut t = Table3::new(STATES, ACTIONS, STATES);
    for s in 0..STATES {
        t.set_value(s, LISTEN, s, 1.0);
        for a in [OPEN_LEFT, OPEN_RIGHT] {
            for s2 in 0..STATES {
                t.set_value(s, a, s2, 0.5);
            }
        }
    }
    t
}

/// `O(a, s', o)`. Only listening is informative.
pub fn tiger_observations() -> Table3 {
    let mut o = Table3::new(ACTIONS, STATES, OBSERVATIONS);
    for s2 in 0..STATES {
        for obs in 0..OBSERVATIONS {
            let p = if obs == s2 {
                LISTEN_ACCURACY
            } else {
                1.0 - LISTEN_ACCURACY
            };
            o.set_value(LISTEN, s2, obs, p);
            o.set_value(OPEN_LEFT, s2, obs, 0.5);
            o.set_value(OPEN_RIGHT, s2, obs, 0.5);
        }
    }
    o
}

/// `R(s, a)`.
pub fn tiger_rewards() -> Table2 {
    let mut r = Table2::new(STATES, ACTIONS);
    for s in 0..STATES {
        r.set_value(s, LISTEN, -1.0);
    }
    r.set_value(TIGER_LEFT, OPEN_LEFT, -100.0);
    r.set_value(TIGER_LEFT, OPEN_RIGHT, 10.0);
    r.set_value(TIGER_RIGHT, OPEN_LEFT, 10.0);
    r.set_value(TIGER_RIGHT, OPEN_RIGHT, -100.0);
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::TabularFunction;

    #[test]
    fn transition_sparsity() {
        let t = tiger_transitions();
        // listen: one successor per state; open: two per state.
        assert_eq!(t.count_entries(), STATES * (1 + 2 * STATES));
        assert_eq!(t.count_non_zero_entries(TIGER_LEFT, LISTEN), 1);
        assert_eq!(t.value_at(TIGER_LEFT, LISTEN, TIGER_RIGHT), 0.0);
    }

    #[test]
    fn reward_range() {
        let r = tiger_rewards();
        assert_eq!(r.min_value(), -100.0);
        assert_eq!(r.max_value(), 10.0);
        assert_eq!(r.count_entries(), STATES * ACTIONS);
    }

    #[test]
    fn listening_is_informative() {
        let o = tiger_observations();
        assert_eq!(o.value_at(LISTEN, TIGER_LEFT, 0), LISTEN_ACCURACY);
        assert_eq!(o.value_at(OPEN_LEFT, TIGER_LEFT, 0), 0.5);
    }
}
