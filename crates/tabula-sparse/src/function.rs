//! Arity-tagged table for callers that only learn the shape at runtime.
//!
//! A model loader reading a POMDP definition knows the extents of each
//! function only after parsing its header. [`FunctionTable`] lets it build
//! the right table from a slice of extents and access it through
//! arity-specific methods that fail with [`TableError::ArityMismatch`]
//! instead of guessing.

use tabula_core::{Arity, Dims, TableError, TabularFunction, ValueBounds};

use crate::config::TableConfig;
use crate::row::NonZeroEntries;
use crate::table1::Table1;
use crate::table2::Table2;
use crate::table3::Table3;

/// A sparse table of arity one, two or three.
#[derive(Clone, Debug)]
pub enum FunctionTable {
    /// `f(s)`.
    One(Table1),
    /// `f(s, a)`.
    Two(Table2),
    /// `f(s, a, s')`.
    Three(Table3),
}

impl FunctionTable {
    /// Build a table whose arity is `dims.len()`.
    ///
    /// Returns `Err(TableError::UnsupportedArity)` unless `dims` has one,
    /// two or three extents. Nothing is allocated on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula_sparse::FunctionTable;
    /// use tabula_core::{Arity, TableError, TabularFunction};
    ///
    /// let mut t = FunctionTable::new(&[3, 3]).unwrap();
    /// assert_eq!(t.arity(), Arity::Two);
    /// t.set2(1, 2, 0.75).unwrap();
    /// assert_eq!(t.get2(1, 2), Ok(0.75));
    /// assert!(matches!(t.get1(1), Err(TableError::ArityMismatch { .. })));
    /// assert!(FunctionTable::new(&[]).is_err());
    /// ```
    pub fn new(dims: &[usize]) -> Result<Self, TableError> {
        Self::with_config(dims, &TableConfig::default())
    }

    /// Build a table with explicit allocation parameters.
    pub fn with_config(dims: &[usize], config: &TableConfig) -> Result<Self, TableError> {
        let arity = Arity::try_from(dims.len()).inspect_err(|_| {
            log::debug!("rejected table with {} dimensions", dims.len());
        })?;
        Ok(match arity {
            Arity::One => Self::One(Table1::with_config(dims[0], config)),
            Arity::Two => Self::Two(Table2::with_config(dims[0], dims[1], config)),
            Arity::Three => Self::Three(Table3::with_config(dims[0], dims[1], dims[2], config)),
        })
    }

    fn mismatch(&self, actual: Arity) -> TableError {
        TableError::ArityMismatch {
            expected: self.arity(),
            actual,
        }
    }

    /// Value at `i` of an arity-one table.
    pub fn get1(&self, i: usize) -> Result<f64, TableError> {
        match self {
            Self::One(t) => t.try_value_at(i),
            _ => Err(self.mismatch(Arity::One)),
        }
    }

    /// Value at `(i, j)` of an arity-two table.
    pub fn get2(&self, i: usize, j: usize) -> Result<f64, TableError> {
        match self {
            Self::Two(t) => t.try_value_at(i, j),
            _ => Err(self.mismatch(Arity::Two)),
        }
    }

    /// Value at `(i, j, k)` of an arity-three table.
    pub fn get3(&self, i: usize, j: usize, k: usize) -> Result<f64, TableError> {
        match self {
            Self::Three(t) => t.try_value_at(i, j, k),
            _ => Err(self.mismatch(Arity::Three)),
        }
    }

    /// Store `value` at `i` of an arity-one table.
    pub fn set1(&mut self, i: usize, value: f64) -> Result<(), TableError> {
        match self {
            Self::One(t) => t.try_set_value(i, value),
            _ => Err(self.mismatch(Arity::One)),
        }
    }

    /// Store `value` at `(i, j)` of an arity-two table.
    pub fn set2(&mut self, i: usize, j: usize, value: f64) -> Result<(), TableError> {
        match self {
            Self::Two(t) => t.try_set_value(i, j, value),
            _ => Err(self.mismatch(Arity::Two)),
        }
    }

    /// Store `value` at `(i, j, k)` of an arity-three table.
    pub fn set3(&mut self, i: usize, j: usize, k: usize, value: f64) -> Result<(), TableError> {
        match self {
            Self::Three(t) => t.try_set_value(i, j, k, value),
            _ => Err(self.mismatch(Arity::Three)),
        }
    }

    /// Stored entries of an arity-one table.
    pub fn non_zero_entries1(&self) -> Result<NonZeroEntries<'_>, TableError> {
        match self {
            Self::One(t) => Ok(t.non_zero_entries()),
            _ => Err(self.mismatch(Arity::One)),
        }
    }

    /// Stored entries of row `i` of an arity-two table.
    pub fn non_zero_entries2(&self, i: usize) -> Result<NonZeroEntries<'_>, TableError> {
        match self {
            Self::Two(t) => t.try_non_zero_entries(i),
            _ => Err(self.mismatch(Arity::Two)),
        }
    }

    /// Stored entries of row `(i, j)` of an arity-three table.
    pub fn non_zero_entries3(&self, i: usize, j: usize) -> Result<NonZeroEntries<'_>, TableError> {
        match self {
            Self::Three(t) => t.try_non_zero_entries(i, j),
            _ => Err(self.mismatch(Arity::Three)),
        }
    }

    /// Number of stored entries of an arity-one table.
    pub fn count_non_zero_entries1(&self) -> Result<usize, TableError> {
        self.non_zero_entries1().map(|it| it.len())
    }

    /// Number of stored entries in row `(i, j)` of an arity-three table.
    pub fn count_non_zero_entries3(&self, i: usize, j: usize) -> Result<usize, TableError> {
        self.non_zero_entries3(i, j).map(|it| it.len())
    }

    /// The inner table if this is arity one.
    pub fn as_table1(&self) -> Option<&Table1> {
        match self {
            Self::One(t) => Some(t),
            _ => None,
        }
    }

    /// The inner table if this is arity two.
    pub fn as_table2(&self) -> Option<&Table2> {
        match self {
            Self::Two(t) => Some(t),
            _ => None,
        }
    }

    /// The inner table if this is arity three.
    pub fn as_table3(&self) -> Option<&Table3> {
        match self {
            Self::Three(t) => Some(t),
            _ => None,
        }
    }

    fn as_function(&self) -> &dyn TabularFunction {
        match self {
            Self::One(t) => t,
            Self::Two(t) => t,
            Self::Three(t) => t,
        }
    }
}

impl TabularFunction for FunctionTable {
    fn dims(&self) -> &Dims {
        self.as_function().dims()
    }

    fn bounds(&self) -> ValueBounds {
        self.as_function().bounds()
    }

    fn count_entries(&self) -> usize {
        self.as_function().count_entries()
    }
}

impl From<Table1> for FunctionTable {
    fn from(t: Table1) -> Self {
        Self::One(t)
    }
}

impl From<Table2> for FunctionTable {
    fn from(t: Table2) -> Self {
        Self::Two(t)
    }
}

impl From<Table3> for FunctionTable {
    fn from(t: Table3) -> Self {
        Self::Three(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_on_dims_len() {
        assert_eq!(FunctionTable::new(&[4]).unwrap().arity(), Arity::One);
        assert_eq!(FunctionTable::new(&[4, 2]).unwrap().arity(), Arity::Two);
        assert_eq!(
            FunctionTable::new(&[4, 2, 4]).unwrap().arity(),
            Arity::Three
        );
    }

    #[test]
    fn unsupported_arity_rejected() {
        assert_eq!(
            FunctionTable::new(&[]).unwrap_err(),
            TableError::UnsupportedArity { len: 0 }
        );
        assert_eq!(
            FunctionTable::new(&[1, 2, 3, 4]).unwrap_err(),
            TableError::UnsupportedArity { len: 4 }
        );
    }

    #[test]
    fn wrong_arity_access_faults() {
        let mut t = FunctionTable::new(&[2, 2, 2]).unwrap();
        let expected = TableError::ArityMismatch {
            expected: Arity::Three,
            actual: Arity::Two,
        };
        assert_eq!(t.get2(0, 0), Err(expected.clone()));
        assert_eq!(t.set2(0, 0, 1.0), Err(expected));
        assert!(t.non_zero_entries1().is_err());
        assert!(t.count_non_zero_entries1().is_err());
        assert!(t.non_zero_entries2(0).is_err());
    }

    #[test]
    fn mismatched_set_does_not_touch_bounds() {
        let mut t = FunctionTable::new(&[2]).unwrap();
        assert!(t.set3(0, 0, 0, 9.0).is_err());
        assert!(t.bounds().is_empty());
    }

    #[test]
    fn out_of_range_propagates() {
        let t = FunctionTable::new(&[3]).unwrap();
        assert_eq!(
            t.get1(5),
            Err(TableError::IndexOutOfBounds {
                axis: 0,
                index: 5,
                extent: 3
            })
        );
    }

    #[test]
    fn scenario_two_cubed_through_tag() {
        let mut t = FunctionTable::new(&[2, 2, 2]).unwrap();
        t.set3(0, 1, 1, 0.4).unwrap();
        t.set3(0, 1, 0, 0.6).unwrap();
        assert_eq!(t.count_non_zero_entries3(0, 1), Ok(2));
        assert_eq!(t.count_entries(), 2);
        let mut pairs: Vec<_> = t.non_zero_entries3(0, 1).unwrap().collect();
        pairs.sort_by_key(|&(k, _)| k);
        assert_eq!(pairs, vec![(0, 0.6), (1, 0.4)]);
    }

    #[test]
    fn arity_two_row_through_tag() {
        let mut t = FunctionTable::new(&[3, 4]).unwrap();
        t.set2(2, 1, 0.5).unwrap();
        t.set2(2, 3, -0.5).unwrap();
        t.set2(2, 1, 0.0).unwrap();
        let pairs: Vec<_> = t.non_zero_entries2(2).unwrap().collect();
        assert_eq!(pairs, vec![(3, -0.5)]);
        assert_eq!(t.non_zero_entries2(0).unwrap().count(), 0);
        assert!(matches!(
            t.non_zero_entries2(3),
            Err(TableError::IndexOutOfBounds { axis: 0, .. })
        ));
    }

    #[test]
    fn with_config_rejects_like_arity_conversion() {
        let config = TableConfig::for_successors(2);
        for len in [0usize, 4, 5] {
            let dims = vec![1; len];
            assert_eq!(
                FunctionTable::with_config(&dims, &config).unwrap_err(),
                Arity::try_from(len).unwrap_err()
            );
        }
    }

    #[test]
    fn arity_one_counts() {
        let mut t = FunctionTable::new(&[5]).unwrap();
        t.set1(0, 1.5).unwrap();
        t.set1(4, -1.5).unwrap();
        assert_eq!(t.count_non_zero_entries1(), Ok(2));
        assert_eq!(t.min_value(), -1.5);
        assert_eq!(t.max_value(), 1.5);
    }

    #[test]
    fn downcasts() {
        let t: FunctionTable = Table2::new(2, 2).into();
        assert!(t.as_table2().is_some());
        assert!(t.as_table1().is_none());
        assert!(t.as_table3().is_none());
        assert_eq!(t.dims().as_slice(), &[2, 2]);
    }
}
