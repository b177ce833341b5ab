//! Test fixtures and assertions for tabula development.
//!
//! Provides ready-made POMDP tables ([`fixtures`]), seeded random tables
//! ([`random`]), and checks that transition/observation rows are
//! probability distributions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod random;

use tabula_core::TabularFunction;
use tabula_sparse::Table3;

/// Default tolerance when checking that a row sums to one.
pub const STOCHASTIC_TOLERANCE: f64 = 1e-9;

/// Rows `(i, j)` of `table` whose stored mass differs from 1 by more than
/// `tolerance`, with their actual sums.
///
/// Rows with no stored entries are skipped: an unreachable state-action
/// pair is allowed to have no distribution.
pub fn row_stochastic_violations(table: &Table3, tolerance: f64) -> Vec<(usize, usize, f64)> {
    let dims = table.dims();
    let mut bad = Vec::new();
    for i in 0..dims.extent(0) {
        for j in 0..dims.extent(1) {
            if table.count_non_zero_entries(i, j) == 0 {
                continue;
            }
            let sum = table.row_sum(i, j);
            if (sum - 1.0).abs() > tolerance {
                bad.push((i, j, sum));
            }
        }
    }
    bad
}

/// Panic unless every non-empty row of `table` sums to one.
#[track_caller]
pub fn assert_row_stochastic(table: &Table3) {
    let bad = row_stochastic_violations(table, STOCHASTIC_TOLERANCE);
    assert!(
        bad.is_empty(),
        "{} row(s) are not distributions, first: {:?}",
        bad.len(),
        bad.first()
    );
}

/// Dense copy of a [`Table3`], for comparing against a naive reference.
pub struct DenseTable3 {
    n1: usize,
    n2: usize,
    values: Vec<f64>,
}

impl DenseTable3 {
    /// Materialise every cell of `table`, zeros included.
    pub fn from_sparse(table: &Table3) -> Self {
        let dims = table.dims();
        let (n0, n1, n2) = (dims.extent(0), dims.extent(1), dims.extent(2));
        let mut values = vec![0.0; n0 * n1 * n2];
        for (i, j, k, v) in table.entries() {
            values[(i * n1 + j) * n2 + k] = v;
        }
        Self { n1, n2, values }
    }

    pub fn value_at(&self, i: usize, j: usize, k: usize) -> f64 {
        self.values[(i * self.n1 + j) * self.n2 + k]
    }

    /// Number of non-zero cells.
    pub fn count_non_zero(&self) -> usize {
        self.values.iter().filter(|v| **v != 0.0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiger_transitions_are_stochastic() {
        assert_row_stochastic(&fixtures::tiger_transitions());
        assert_row_stochastic(&fixtures::tiger_observations());
    }

    #[test]
    fn violations_report_row_and_sum() {
        let mut t = Table3::new(1, 2, 2);
        t.set_value(0, 0, 0, 1.0);
        t.set_value(0, 1, 0, 0.5);
        let bad = row_stochastic_violations(&t, STOCHASTIC_TOLERANCE);
        assert_eq!(bad, vec![(0, 1, 0.5)]);
    }

    #[test]
    #[should_panic(expected = "not distributions")]
    fn assert_catches_short_row() {
        let mut t = Table3::new(1, 1, 2);
        t.set_value(0, 0, 1, 0.9);
        assert_row_stochastic(&t);
    }

    #[test]
    fn dense_copy_matches_sparse() {
        let t = fixtures::tiger_transitions();
        let dense = DenseTable3::from_sparse(&t);
        assert_eq!(dense.count_non_zero(), t.count_entries());
        for s in 0..2 {
            for a in 0..3 {
                for s2 in 0..2 {
                    assert_eq!(dense.value_at(s, a, s2), t.value_at(s, a, s2));
                }
            }
        }
    }
}
