//! Capability trait shared by every tabular function implementation.

use crate::bounds::ValueBounds;
use crate::shape::{Arity, Dims};

/// Read-only facts about a tabular function, independent of its arity.
///
/// Solvers that only need the value range or the domain shape (for
/// example to normalise rewards or size a value vector) read through this
/// trait instead of matching on the concrete table type.
pub trait TabularFunction {
    /// Per-dimension extents fixed at construction.
    fn dims(&self) -> &Dims;

    /// Running min/max of every value written so far.
    fn bounds(&self) -> ValueBounds;

    /// Total number of stored (non-zero) entries across all rows.
    fn count_entries(&self) -> usize;

    /// Number of coordinates the function takes.
    fn arity(&self) -> Arity {
        self.dims().arity()
    }

    /// Smallest value written so far (`+inf` before any write).
    fn min_value(&self) -> f64 {
        self.bounds().min()
    }

    /// Largest value written so far (`-inf` before any write).
    fn max_value(&self) -> f64 {
        self.bounds().max()
    }
}
