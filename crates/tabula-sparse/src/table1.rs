//! Arity-one sparse table: `f(s)`.

use tabula_core::{Dims, TableError, TabularFunction, ValueBounds};

use crate::config::TableConfig;
use crate::fault;
use crate::row::{NonZeroEntries, SparseRow};

/// Sparse function over a single coordinate.
///
/// Typical use is a per-state reward `R(s)`.
///
/// # Examples
///
/// ```
/// use tabula_sparse::Table1;
/// use tabula_core::TabularFunction;
///
/// let mut reward = Table1::new(4);
/// reward.set_value(2, -1.0);
/// assert_eq!(reward.value_at(2), -1.0);
/// assert_eq!(reward.value_at(0), 0.0);
/// assert_eq!(reward.count_non_zero_entries(), 1);
/// assert_eq!(reward.min_value(), -1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Table1 {
    dims: Dims,
    row: SparseRow,
    bounds: ValueBounds,
}

impl Table1 {
    /// Create an empty table over `[0, len)`.
    pub fn new(len: usize) -> Self {
        Self::with_config(len, &TableConfig::default())
    }

    /// Create an empty table with explicit allocation parameters.
    pub fn with_config(len: usize, config: &TableConfig) -> Self {
        let dims = Dims::one(len);
        log::debug!(
            "allocated arity-1 table dims {dims} (row capacity {})",
            config.row_capacity
        );
        Self {
            dims,
            row: SparseRow::with_capacity(config.row_capacity),
            bounds: ValueBounds::new(),
        }
    }

    /// Value at `i`, or `0.0` if nothing is stored there.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    #[track_caller]
    pub fn value_at(&self, i: usize) -> f64 {
        fault(self.try_value_at(i))
    }

    /// Checked form of [`value_at`](Self::value_at).
    #[inline]
    pub fn try_value_at(&self, i: usize) -> Result<f64, TableError> {
        self.dims.check(0, i)?;
        Ok(self.row.get(i))
    }

    /// Store `value` at `i`, widening the bounds first. A zero removes
    /// the entry.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[track_caller]
    pub fn set_value(&mut self, i: usize, value: f64) {
        fault(self.try_set_value(i, value))
    }

    /// Checked form of [`set_value`](Self::set_value). On error the table,
    /// bounds included, is unchanged.
    pub fn try_set_value(&mut self, i: usize, value: f64) -> Result<(), TableError> {
        self.dims.check(0, i)?;
        self.bounds.observe(value);
        self.row.set(i, value);
        Ok(())
    }

    /// Lazy iterator over stored `(i, value)` pairs in unspecified order.
    #[inline]
    pub fn non_zero_entries(&self) -> NonZeroEntries<'_> {
        self.row.iter()
    }

    /// Number of stored entries.
    pub fn count_non_zero_entries(&self) -> usize {
        self.row.len()
    }

    /// Extent of the single axis.
    pub fn len(&self) -> usize {
        self.dims.extent(0)
    }

    /// Whether the domain is empty (`len == 0`).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TabularFunction for Table1 {
    fn dims(&self) -> &Dims {
        &self.dims
    }

    fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    fn count_entries(&self) -> usize {
        self.row.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::Arity;

    #[test]
    fn unwritten_reads_zero() {
        let t = Table1::new(5);
        for i in 0..5 {
            assert_eq!(t.value_at(i), 0.0);
        }
        assert_eq!(t.count_non_zero_entries(), 0);
        assert!(t.bounds().is_empty());
    }

    #[test]
    fn arity_and_dims() {
        let t = Table1::new(5);
        assert_eq!(t.arity(), Arity::One);
        assert_eq!(t.dims().as_slice(), &[5]);
        assert_eq!(t.len(), 5);
    }

    #[test]
    #[should_panic(expected = "index 5 out of bounds for axis 0 with extent 3")]
    fn value_at_out_of_range_panics() {
        let t = Table1::new(3);
        t.value_at(5);
    }

    #[test]
    fn try_value_at_out_of_range_errors() {
        let t = Table1::new(3);
        assert_eq!(
            t.try_value_at(5),
            Err(TableError::IndexOutOfBounds {
                axis: 0,
                index: 5,
                extent: 3
            })
        );
    }

    #[test]
    fn failed_set_leaves_bounds_untouched() {
        let mut t = Table1::new(3);
        assert!(t.try_set_value(3, 100.0).is_err());
        assert!(t.bounds().is_empty());
        assert_eq!(t.count_non_zero_entries(), 0);
    }

    #[test]
    fn zero_write_elides_but_widens_bounds() {
        let mut t = Table1::new(3);
        t.set_value(1, 2.0);
        t.set_value(1, 0.0);
        assert_eq!(t.value_at(1), 0.0);
        assert_eq!(t.count_non_zero_entries(), 0);
        assert_eq!(t.min_value(), 0.0);
        assert_eq!(t.max_value(), 2.0);
    }

    #[test]
    fn nan_is_stored_but_does_not_widen_bounds() {
        let mut t = Table1::new(2);
        t.set_value(0, f64::NAN);
        assert_eq!(t.count_non_zero_entries(), 1);
        assert!(t.value_at(0).is_nan());
        assert!(t.bounds().is_empty());
    }

    #[test]
    fn entries_lists_stored_values() {
        let mut t = Table1::new(10);
        t.set_value(7, 0.5);
        t.set_value(2, -3.0);
        let mut pairs: Vec<_> = t.non_zero_entries().collect();
        pairs.sort_by_key(|&(k, _)| k);
        assert_eq!(pairs, vec![(2, -3.0), (7, 0.5)]);
    }
}
