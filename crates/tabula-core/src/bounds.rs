//! Running minimum and maximum of values written to a table.

/// Monotone min/max over every value ever passed to `set_value`.
///
/// Bounds are only ever widened. A zero write still widens them even though
/// the zero itself is not stored, so the bounds describe every value the
/// table was asked to hold rather than the values it holds now.
///
/// Before the first observation `min` is `+inf` and `max` is `-inf`.
/// NaN never widens either bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueBounds {
    min: f64,
    max: f64,
}

impl ValueBounds {
    /// Bounds that have observed nothing.
    pub const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Create empty bounds.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Widen the bounds to include `value`.
    #[inline]
    pub fn observe(&mut self, value: f64) {
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
    }

    /// Smallest value observed so far (`+inf` if none).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value observed so far (`-inf` if none).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether no value has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for ValueBounds {
    fn default() -> Self {
        Self::new()
    }
}
