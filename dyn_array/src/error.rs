#[cfg(feature = "std")]
use thiserror::Error;

/// Errors raised by [`DynArray`](crate::DynArray) operations.
///
/// Every check happens before the array is touched, so an `Err` always leaves
/// the array exactly as it was.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynArrayError {
    /// A non-positive initial capacity was requested.
    #[cfg_attr(feature = "std", error("Illegal capacity: {0}"))]
    InvalidArgument(isize),

    /// An index-based operation was called outside `[0, size)`.
    #[cfg_attr(feature = "std", error("Index {index} out of range for size {size}"))]
    IndexOutOfRange { index: usize, size: usize },

    /// The buffer cannot grow to the required number of slots.
    #[cfg_attr(
        feature = "std",
        error("Required capacity {required} exceeds maximum {max}")
    )]
    CapacityExceeded { required: usize, max: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for DynArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DynArrayError::InvalidArgument(n) => write!(f, "Illegal capacity: {}", n),
            DynArrayError::IndexOutOfRange { index, size } => {
                write!(f, "Index {} out of range for size {}", index, size)
            }
            DynArrayError::CapacityExceeded { required, max } => {
                write!(f, "Required capacity {} exceeds maximum {}", required, max)
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, DynArrayError>;
