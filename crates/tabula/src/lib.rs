//! Tabula: sparse tabular functions for discrete POMDPs.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the tabula sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! // T(s, a, s') for 3 states and 2 actions, shape known only at load time.
//! let mut transitions = FunctionTable::new(&[3, 2, 3]).unwrap();
//! transitions.set3(0, 1, 2, 0.7).unwrap();
//! transitions.set3(0, 1, 0, 0.3).unwrap();
//!
//! assert_eq!(transitions.get3(0, 1, 2), Ok(0.7));
//! assert_eq!(transitions.get3(0, 1, 1), Ok(0.0));
//! assert_eq!(transitions.count_non_zero_entries3(0, 1), Ok(2));
//!
//! // Wrong arity is a fault, not a zero.
//! assert!(matches!(
//!     transitions.get2(0, 1),
//!     Err(TableError::ArityMismatch { .. })
//! ));
//!
//! // R(s, a) with a static shape.
//! let mut rewards = Table2::new(3, 2);
//! rewards.set_value(2, 0, 10.0);
//! rewards.set_value(1, 1, -1.0);
//! assert_eq!(rewards.max_value(), 10.0);
//! assert_eq!(rewards.min_value(), -1.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tabula-core` | `Arity`, `Dims`, `ValueBounds`, `TableError`, `TabularFunction` |
//! | [`sparse`] | `tabula-sparse` | `Table1`, `Table2`, `Table3`, `FunctionTable`, `SparseRow`, `TableConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shape, bounds, error and trait vocabulary (`tabula-core`).
pub use tabula_core as types;

/// Sparse table implementations (`tabula-sparse`).
///
/// [`sparse::Table1`], [`sparse::Table2`] and [`sparse::Table3`] when the
/// arity is known statically, [`sparse::FunctionTable`] when it is not.
pub use tabula_sparse as sparse;

/// Common imports for typical tabula usage.
///
/// ```rust
/// use tabula::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use tabula_core::{Arity, Dims, TableError, TabularFunction, ValueBounds};

    // Tables
    pub use tabula_sparse::{FunctionTable, Table1, Table2, Table3, TableConfig};
}
