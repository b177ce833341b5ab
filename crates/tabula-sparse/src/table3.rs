//! Arity-three sparse table: `f(s, a, s')`.
//!
//! This is the shape of transition functions `T(s, a, s')` and observation
//! functions `O(a, s', o)`, and the one solvers hit hardest: belief updates
//! and backups walk `non_zero_entries(s, a)` in their inner loops.

use tabula_core::{Dims, TableError, TabularFunction, ValueBounds};

use crate::config::TableConfig;
use crate::fault;
use crate::row::{NonZeroEntries, SparseRow};

/// Sparse function over three coordinates.
///
/// The first two coordinates select one row of a dense `dims[0] × dims[1]`
/// grid, stored flat in row-major order. The third is hashed within the row.
///
/// # Examples
///
/// ```
/// use tabula_sparse::Table3;
///
/// // Two states, one action: action 0 moves state 0 to state 1 w.p. 0.9.
/// let mut t = Table3::new(2, 1, 2);
/// t.set_value(0, 0, 1, 0.9);
/// t.set_value(0, 0, 0, 0.1);
///
/// let total: f64 = t.non_zero_entries(0, 0).map(|(_, p)| p).sum();
/// assert!((total - 1.0).abs() < 1e-12);
/// assert_eq!(t.count_entries(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Table3 {
    dims: Dims,
    /// Row `(i, j)` lives at `i * dims[1] + j`.
    rows: Vec<SparseRow>,
    bounds: ValueBounds,
}

impl Table3 {
    /// Create an empty `n0 × n1 × n2` table.
    pub fn new(n0: usize, n1: usize, n2: usize) -> Self {
        Self::with_config(n0, n1, n2, &TableConfig::default())
    }

    /// Create an empty `n0 × n1 × n2` table with explicit allocation
    /// parameters.
    pub fn with_config(n0: usize, n1: usize, n2: usize, config: &TableConfig) -> Self {
        let dims = Dims::three(n0, n1, n2);
        let row_count = dims.row_count();
        let rows = (0..row_count)
            .map(|_| SparseRow::with_capacity(config.row_capacity))
            .collect();
        log::debug!(
            "allocated arity-3 table dims {dims}: {row_count} rows (row capacity {})",
            config.row_capacity
        );
        Self {
            dims,
            rows,
            bounds: ValueBounds::new(),
        }
    }

    #[inline]
    fn slot(&self, i: usize, j: usize) -> Result<usize, TableError> {
        self.dims.check(0, i)?;
        self.dims.check(1, j)?;
        Ok(i * self.dims.extent(1) + j)
    }

    /// Value at `(i, j, k)`, or `0.0` if nothing is stored there.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is out of range.
    #[inline]
    #[track_caller]
    pub fn value_at(&self, i: usize, j: usize, k: usize) -> f64 {
        fault(self.try_value_at(i, j, k))
    }

    /// Checked form of [`value_at`](Self::value_at).
    #[inline]
    pub fn try_value_at(&self, i: usize, j: usize, k: usize) -> Result<f64, TableError> {
        let slot = self.slot(i, j)?;
        self.dims.check(2, k)?;
        Ok(self.rows[slot].get(k))
    }

    /// Store `value` at `(i, j, k)`, widening the bounds first. A zero
    /// removes the entry.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is out of range.
    #[track_caller]
    pub fn set_value(&mut self, i: usize, j: usize, k: usize, value: f64) {
        fault(self.try_set_value(i, j, k, value))
    }

    /// Checked form of [`set_value`](Self::set_value). On error the table,
    /// bounds included, is unchanged.
    pub fn try_set_value(
        &mut self,
        i: usize,
        j: usize,
        k: usize,
        value: f64,
    ) -> Result<(), TableError> {
        let slot = self.slot(i, j)?;
        self.dims.check(2, k)?;
        self.bounds.observe(value);
        self.rows[slot].set(k, value);
        Ok(())
    }

    /// Lazy iterator over the stored `(k, value)` pairs of row `(i, j)`.
    ///
    /// Order is unspecified. The row cannot be mutated while the iterator
    /// is alive.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    #[inline]
    #[track_caller]
    pub fn non_zero_entries(&self, i: usize, j: usize) -> NonZeroEntries<'_> {
        fault(self.try_non_zero_entries(i, j))
    }

    /// Checked form of [`non_zero_entries`](Self::non_zero_entries).
    #[inline]
    pub fn try_non_zero_entries(
        &self,
        i: usize,
        j: usize,
    ) -> Result<NonZeroEntries<'_>, TableError> {
        let slot = self.slot(i, j)?;
        Ok(self.rows[slot].iter())
    }

    /// Number of stored entries in row `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    #[track_caller]
    pub fn count_non_zero_entries(&self, i: usize, j: usize) -> usize {
        fault(self.slot(i, j).map(|slot| self.rows[slot].len()))
    }

    /// Total stored entries over the whole grid. O(`dims[0] * dims[1]`).
    pub fn count_entries(&self) -> usize {
        self.rows.iter().map(SparseRow::len).sum()
    }

    /// Sum of the stored values in row `(i, j)`.
    ///
    /// For a transition table this is the probability mass leaving state
    /// `i` under action `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    #[track_caller]
    pub fn row_sum(&self, i: usize, j: usize) -> f64 {
        fault(self.slot(i, j).map(|slot| self.rows[slot].sum()))
    }

    /// Lazy iterator over every stored `(i, j, k, value)` entry, grid row
    /// by grid row.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, usize, f64)> + '_ {
        let n1 = self.dims.extent(1);
        self.rows.iter().enumerate().flat_map(move |(slot, row)| {
            let (i, j) = (slot / n1, slot % n1);
            row.iter().map(move |(k, v)| (i, j, k, v))
        })
    }
}

impl TabularFunction for Table3 {
    fn dims(&self) -> &Dims {
        &self.dims
    }

    fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    fn count_entries(&self) -> usize {
        Table3::count_entries(self)
    }
}
