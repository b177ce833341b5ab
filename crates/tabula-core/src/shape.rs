//! Function arity and per-dimension extents.

use smallvec::SmallVec;
use std::fmt;

use crate::error::TableError;

/// Number of integer coordinates a tabular function takes.
///
/// Discriminants equal the arity, so `Arity::Two as usize == 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Arity {
    /// `f(s)`, e.g. a state reward.
    One = 1,
    /// `f(s, a)`, e.g. a state-action reward.
    Two = 2,
    /// `f(s, a, s')`, e.g. a transition or observation function.
    Three = 3,
}

impl Arity {
    /// Number of coordinates as a plain integer.
    pub fn rank(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Arity {
    type Error = TableError;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        match len {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(TableError::UnsupportedArity { len }),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// Per-dimension extents of a table, fixed at construction.
///
/// Holds between one and three extents. Axis `i` accepts coordinates in
/// `[0, extent(i))`. An extent of zero is legal and makes every coordinate
/// on that axis out of range.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    extents: SmallVec<[usize; 3]>,
}

impl Dims {
    /// Build from a slice of extents.
    ///
    /// Returns `Err(TableError::UnsupportedArity)` unless `extents.len()`
    /// is 1, 2 or 3.
    pub fn new(extents: &[usize]) -> Result<Self, TableError> {
        Arity::try_from(extents.len())?;
        Ok(Self {
            extents: SmallVec::from_slice(extents),
        })
    }

    /// Extents of an arity-one function.
    pub fn one(n: usize) -> Self {
        Self {
            extents: SmallVec::from_slice(&[n]),
        }
    }

    /// Extents of an arity-two function.
    pub fn two(n0: usize, n1: usize) -> Self {
        Self {
            extents: SmallVec::from_slice(&[n0, n1]),
        }
    }

    /// Extents of an arity-three function.
    pub fn three(n0: usize, n1: usize, n2: usize) -> Self {
        Self {
            extents: SmallVec::from_slice(&[n0, n1, n2]),
        }
    }

    /// Arity implied by the number of extents.
    pub fn arity(&self) -> Arity {
        match self.extents.len() {
            1 => Arity::One,
            2 => Arity::Two,
            _ => Arity::Three,
        }
    }

    /// Extent of a single axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.arity().rank()`.
    pub fn extent(&self, axis: usize) -> usize {
        self.extents[axis]
    }

    /// All extents in axis order.
    pub fn as_slice(&self) -> &[usize] {
        &self.extents
    }

    /// Number of rows the table stores: 1 for arity one, `dims[0]` for
    /// arity two and `dims[0] * dims[1]` for arity three.
    pub fn row_count(&self) -> usize {
        match self.arity() {
            Arity::One => 1,
            Arity::Two => self.extents[0],
            Arity::Three => self.extents[0] * self.extents[1],
        }
    }

    /// Check that `index` is a valid coordinate on `axis`.
    pub fn check(&self, axis: usize, index: usize) -> Result<(), TableError> {
        let extent = self.extents[axis];
        if index < extent {
            Ok(())
        } else {
            Err(TableError::IndexOutOfBounds {
                axis,
                index,
                extent,
            })
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.extents.as_slice())
    }
}
