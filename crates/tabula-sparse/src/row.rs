//! Hashed sparse row: the innermost level of every table.
//!
//! A [`SparseRow`] maps the last coordinate of a function to its value and
//! holds only non-zero values. Removal uses `swap_remove`, so every
//! operation is O(1) amortized at the cost of perturbing iteration order.

use std::iter::FusedIterator;

use indexmap::IndexMap;

/// Sparse mapping from coordinate to non-zero value.
///
/// Knows nothing about bounds checking or min/max tracking; the owning
/// table does both before delegating here.
#[derive(Clone, Debug, Default)]
pub struct SparseRow {
    values: IndexMap<usize, f64>,
}

impl SparseRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Create an empty row with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: IndexMap::with_capacity(capacity),
        }
    }

    /// Value stored at `key`, or `0.0` if absent.
    #[inline]
    pub fn get(&self, key: usize) -> f64 {
        self.values.get(&key).copied().unwrap_or(0.0)
    }

    /// Store `value` at `key`; an exact zero (either sign) removes the key.
    #[inline]
    pub fn set(&mut self, key: usize, value: f64) {
        if value != 0.0 {
            self.values.insert(key, value);
        } else {
            self.values.swap_remove(&key);
        }
    }

    /// Whether `key` currently holds a non-zero value.
    pub fn contains(&self, key: usize) -> bool {
        self.values.contains_key(&key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row stores nothing.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over stored `(key, value)` pairs.
    pub fn iter(&self) -> NonZeroEntries<'_> {
        NonZeroEntries {
            inner: self.values.iter(),
        }
    }

    /// Sum of all stored values.
    pub fn sum(&self) -> f64 {
        self.values.values().sum()
    }
}

impl<'a> IntoIterator for &'a SparseRow {
    type Item = (usize, f64);
    type IntoIter = NonZeroEntries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the stored entries of one row.
///
/// Yields `(coordinate, value)` with `value != 0.0`. The order is
/// unspecified and changes when entries are removed.
#[derive(Clone, Debug)]
pub struct NonZeroEntries<'a> {
    inner: indexmap::map::Iter<'a, usize, f64>,
}

impl Iterator for NonZeroEntries<'_> {
    type Item = (usize, f64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&k, &v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for NonZeroEntries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&k, &v)| (k, v))
    }
}

impl ExactSizeIterator for NonZeroEntries<'_> {}

impl FusedIterator for NonZeroEntries<'_> {}
