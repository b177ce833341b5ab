//! Sparse multi-arity tabular functions for POMDP models.
//!
//! Stores functions over one, two or three small integer coordinates
//! (state rewards, state-action rewards, transition and observation
//! probabilities) keeping only the non-zero entries.
//!
//! # Layout
//!
//! Storage is two-level: a dense outer vector of rows addressed by all but
//! the last coordinate, and a hashed [`SparseRow`] per row holding the last
//! coordinate.
//!
//! ```text
//! Table1  f(s)        SparseRow
//! Table2  f(s, a)     Vec<SparseRow>            dims[0] rows
//! Table3  f(s, a, s') Vec<SparseRow>            dims[0] * dims[1] rows, row-major
//! FunctionTable       One(Table1) | Two(Table2) | Three(Table3)
//! ```
//!
//! # Value semantics
//!
//! - Writing exactly `0.0` removes the entry; absent entries read as `0.0`.
//! - Every write widens the table's [`ValueBounds`](tabula_core::ValueBounds),
//!   zero writes included.
//! - Every coordinate is range-checked, including the hashed one.
//!
//! Tables are built once through `&mut self` and then shared read-only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod function;
pub mod row;
pub mod table1;
pub mod table2;
pub mod table3;

pub use config::TableConfig;
pub use function::FunctionTable;
pub use row::{NonZeroEntries, SparseRow};
pub use table1::Table1;
pub use table2::Table2;
pub use table3::Table3;

/// Turn a checked result into a panic at the caller's location.
#[inline]
#[track_caller]
pub(crate) fn fault<T>(result: Result<T, tabula_core::TableError>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}
