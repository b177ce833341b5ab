//! Table construction parameters.

/// Configuration for sparse table allocation.
///
/// Only affects how much memory rows reserve up front; the observable
/// contents of a table never depend on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of entries each row map reserves at construction.
    ///
    /// Default: 0 (rows allocate on first insert). For transition tables
    /// with a known branching factor, reserving that many slots avoids
    /// rehashing while the model is loaded.
    pub row_capacity: usize,
}

impl TableConfig {
    /// Default per-row capacity: allocate lazily.
    pub const DEFAULT_ROW_CAPACITY: usize = 0;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            row_capacity: Self::DEFAULT_ROW_CAPACITY,
        }
    }

    /// Config for rows holding distributions over roughly `successors`
    /// outcomes.
    pub fn for_successors(successors: usize) -> Self {
        Self::new().with_row_capacity(successors)
    }

    /// Set the per-row capacity hint.
    pub fn with_row_capacity(mut self, row_capacity: usize) -> Self {
        self.row_capacity = row_capacity;
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}
