//! Arity-two sparse table: `f(s, a)`.

use tabula_core::{Dims, TableError, TabularFunction, ValueBounds};

use crate::config::TableConfig;
use crate::fault;
use crate::row::{NonZeroEntries, SparseRow};

/// Sparse function over two coordinates.
///
/// The first coordinate selects one of `dims[0]` pre-allocated rows; the
/// second is hashed within the row. Typical use is a state-action reward
/// `R(s, a)`.
#[derive(Clone, Debug)]
pub struct Table2 {
    dims: Dims,
    rows: Vec<SparseRow>,
    bounds: ValueBounds,
}

impl Table2 {
    /// Create an empty `n0 × n1` table.
    pub fn new(n0: usize, n1: usize) -> Self {
        Self::with_config(n0, n1, &TableConfig::default())
    }

    /// Create an empty `n0 × n1` table with explicit allocation parameters.
    pub fn with_config(n0: usize, n1: usize, config: &TableConfig) -> Self {
        let dims = Dims::two(n0, n1);
        let rows = (0..n0)
            .map(|_| SparseRow::with_capacity(config.row_capacity))
            .collect();
        log::debug!(
            "allocated arity-2 table dims {dims}: {n0} rows (row capacity {})",
            config.row_capacity
        );
        Self {
            dims,
            rows,
            bounds: ValueBounds::new(),
        }
    }

    #[inline]
    fn row(&self, i: usize, j: usize) -> Result<&SparseRow, TableError> {
        self.dims.check(0, i)?;
        self.dims.check(1, j)?;
        Ok(&self.rows[i])
    }

    #[inline]
    fn row_only(&self, i: usize) -> Result<&SparseRow, TableError> {
        self.dims.check(0, i)?;
        Ok(&self.rows[i])
    }

    /// Value at `(i, j)`, or `0.0` if nothing is stored there.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[inline]
    #[track_caller]
    pub fn value_at(&self, i: usize, j: usize) -> f64 {
        fault(self.try_value_at(i, j))
    }

    /// Checked form of [`value_at`](Self::value_at).
    #[inline]
    pub fn try_value_at(&self, i: usize, j: usize) -> Result<f64, TableError> {
        Ok(self.row(i, j)?.get(j))
    }

    /// Store `value` at `(i, j)`, widening the bounds first. A zero
    /// removes the entry.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[track_caller]
    pub fn set_value(&mut self, i: usize, j: usize, value: f64) {
        fault(self.try_set_value(i, j, value))
    }

    /// Checked form of [`set_value`](Self::set_value). On error the table,
    /// bounds included, is unchanged.
    pub fn try_set_value(&mut self, i: usize, j: usize, value: f64) -> Result<(), TableError> {
        self.dims.check(0, i)?;
        self.dims.check(1, j)?;
        self.bounds.observe(value);
        self.rows[i].set(j, value);
        Ok(())
    }

    /// Lazy iterator over the stored `(j, value)` pairs of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    #[track_caller]
    pub fn non_zero_entries(&self, i: usize) -> NonZeroEntries<'_> {
        fault(self.try_non_zero_entries(i))
    }

    /// Checked form of [`non_zero_entries`](Self::non_zero_entries).
    #[inline]
    pub fn try_non_zero_entries(&self, i: usize) -> Result<NonZeroEntries<'_>, TableError> {
        Ok(self.row_only(i)?.iter())
    }

    /// Number of stored entries in row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[track_caller]
    pub fn count_non_zero_entries(&self, i: usize) -> usize {
        fault(self.row_only(i).map(SparseRow::len))
    }

    /// Sum of the stored values in row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[track_caller]
    pub fn row_sum(&self, i: usize) -> f64 {
        fault(self.row_only(i).map(SparseRow::sum))
    }

    /// Lazy iterator over every stored `(i, j, value)` triple, row by row.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |(j, v)| (i, j, v)))
    }
}

impl TabularFunction for Table2 {
    fn dims(&self) -> &Dims {
        &self.dims
    }

    fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    fn count_entries(&self) -> usize {
        self.rows.iter().map(SparseRow::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_three_by_three() {
        let mut t = Table2::new(3, 3);
        t.set_value(1, 2, 0.75);
        assert_eq!(t.value_at(1, 2), 0.75);
        assert_eq!(t.value_at(0, 0), 0.0);
        t.set_value(1, 2, 0.0);
        assert_eq!(t.value_at(1, 2), 0.0);
        assert_eq!(t.count_non_zero_entries(1), 0);
    }

    #[test]
    fn inner_coordinate_is_range_checked() {
        let t = Table2::new(3, 3);
        assert_eq!(
            t.try_value_at(0, 3),
            Err(TableError::IndexOutOfBounds {
                axis: 1,
                index: 3,
                extent: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "axis 0")]
    fn outer_coordinate_panics() {
        let t = Table2::new(2, 2);
        t.value_at(2, 0);
    }

    #[test]
    fn failed_set_is_atomic() {
        let mut t = Table2::new(2, 2);
        assert!(t.try_set_value(0, 9, 4.0).is_err());
        assert!(t.bounds().is_empty());
        assert_eq!(t.count_entries(), 0);
    }

    #[test]
    fn rows_are_independent() {
        let mut t = Table2::new(2, 4);
        t.set_value(0, 1, 1.0);
        t.set_value(1, 1, 2.0);
        assert_eq!(t.count_non_zero_entries(0), 1);
        assert_eq!(t.count_non_zero_entries(1), 1);
        assert_eq!(t.value_at(0, 1), 1.0);
        assert_eq!(t.value_at(1, 1), 2.0);
        assert_eq!(t.count_entries(), 2);
    }

    #[test]
    fn entries_carry_full_coordinates() {
        let mut t = Table2::new(3, 3);
        t.set_value(2, 0, 5.0);
        t.set_value(0, 2, -1.0);
        let mut all: Vec<_> = t.entries().collect();
        all.sort_by_key(|&(i, j, _)| (i, j));
        assert_eq!(all, vec![(0, 2, -1.0), (2, 0, 5.0)]);
    }

    #[test]
    fn row_iteration_skips_elided_entries() {
        let mut t = Table2::new(2, 4);
        t.set_value(1, 3, 0.5);
        t.set_value(1, 0, 0.25);
        t.set_value(0, 2, 9.0);
        t.set_value(1, 0, 0.0);

        let row: Vec<_> = t.non_zero_entries(1).collect();
        assert_eq!(row, vec![(3, 0.5)]);
        assert_eq!(t.count_non_zero_entries(1), 1);

        let mut other: Vec<_> = t.try_non_zero_entries(0).unwrap().collect();
        other.sort_by_key(|&(j, _)| j);
        assert_eq!(other, vec![(2, 9.0)]);
        assert!(t.try_non_zero_entries(2).is_err());
    }

    #[test]
    fn row_sum_adds_stored_values() {
        let mut t = Table2::new(1, 4);
        t.set_value(0, 0, 0.5);
        t.set_value(0, 3, 0.25);
        assert_eq!(t.row_sum(0), 0.75);
    }

    #[test]
    fn with_config_reserves_without_storing() {
        let t = Table2::with_config(4, 4, &TableConfig::for_successors(4));
        assert_eq!(t.count_entries(), 0);
        assert_eq!(t.value_at(3, 3), 0.0);
    }
}
