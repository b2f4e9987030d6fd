//! Array configuration parameters.

use crate::error::ArrayError;

/// Configuration for an [`OwningArray`](crate::OwningArray).
///
/// Controls the initial allocation and the growth policy. Validated by
/// [`OwningArray::with_config`](crate::OwningArray::with_config).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 1. Zero is allowed; the first append then grows to 1.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity when an append finds it full.
    ///
    /// Default: 2. Must be at least 2 so that appends stay O(1) amortized.
    pub growth_factor: usize,
}

impl ArrayConfig {
    /// Default initial capacity of an empty array.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

    /// Default growth factor (capacity doubling).
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config with the default values.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Create a default config with the given initial capacity.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::new()
        }
    }

    /// Check the config's constraints.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.growth_factor < 2 {
            return Err(ArrayError::InvalidConfig {
                reason: "growth_factor must be at least 2",
            });
        }
        Ok(())
    }

    /// The capacity that follows `current` under this growth policy.
    ///
    /// An exhausted zero-capacity array grows to one slot.
    pub(crate) fn grown(&self, current: usize) -> Result<usize, ArrayError> {
        if current == 0 {
            return Ok(1);
        }
        current
            .checked_mul(self.growth_factor)
            .ok_or(ArrayError::CapacityOverflow { capacity: current })
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}
