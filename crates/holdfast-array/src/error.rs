//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Checked access past the last occupied slot.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of occupied slots at the time of the access.
        len: usize,
    },
    /// The next capacity does not fit the address space.
    CapacityOverflow {
        /// Capacity at the time growth was attempted.
        capacity: usize,
    },
    /// The allocator could not provide the grown backing store.
    AllocationFailed {
        /// Capacity (in slots) that was requested.
        requested: usize,
    },
    /// An [`ArrayConfig`](crate::ArrayConfig) failed validation.
    InvalidConfig {
        /// Which constraint was violated.
        reason: &'static str,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for array of length {len}")
            }
            Self::CapacityOverflow { capacity } => {
                write!(f, "capacity overflow growing array of capacity {capacity}")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed for {requested} slots")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid array config: {reason}"),
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = ArrayError::OutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 7 is out of range for array of length 3"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn Error> = Box::new(ArrayError::CapacityOverflow { capacity: 4 });
        assert!(err.source().is_none());
    }
}
