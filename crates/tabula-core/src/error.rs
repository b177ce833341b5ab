//! Error types for table construction and access.
//!
//! Every variant is a programming error on the caller's side: the model
//! layer asked for a shape that does not exist or a coordinate outside the
//! declared domain. Nothing here is recoverable inside the table itself.

use std::error::Error;
use std::fmt;

use crate::shape::Arity;

/// Faults raised by sparse function tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// A table was requested with a number of dimensions other than 1, 2 or 3.
    UnsupportedArity {
        /// Number of extents supplied.
        len: usize,
    },
    /// An accessor for one arity was called on a table of another.
    ArityMismatch {
        /// The arity the table was constructed with.
        expected: Arity,
        /// The arity of the attempted access.
        actual: Arity,
    },
    /// A coordinate lies outside `[0, extent)` for its axis.
    IndexOutOfBounds {
        /// Zero-based axis of the offending coordinate.
        axis: usize,
        /// The offending coordinate.
        index: usize,
        /// Declared extent of that axis.
        extent: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedArity { len } => {
                write!(f, "unsupported arity: {len} dimensions (expected 1, 2 or 3)")
            }
            Self::ArityMismatch { expected, actual } => {
                write!(
                    f,
                    "arity mismatch: table has arity {expected}, accessed with arity {actual}"
                )
            }
            Self::IndexOutOfBounds {
                axis,
                index,
                extent,
            } => {
                write!(
                    f,
                    "index {index} out of bounds for axis {axis} with extent {extent}"
                )
            }
        }
    }
}

impl Error for TableError {}
