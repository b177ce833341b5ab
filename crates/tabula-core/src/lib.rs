//! Core types and traits for tabula sparse function tables.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every table implementation: the [`Arity`] of
//! a function, its per-dimension extents ([`Dims`]), the running value
//! range ([`ValueBounds`]), the [`TableError`] fault type, and the
//! [`TabularFunction`] capability trait that solvers read through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod shape;
pub mod traits;

pub use bounds::ValueBounds;
pub use error::TableError;
pub use shape::{Arity, Dims};
pub use traits::TabularFunction;
