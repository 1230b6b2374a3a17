//! Capacity growth rules.

use crate::{DynArrayError, Result};

/// Slots reserved by the first insertion into an array that has no buffer yet.
pub const DEFAULT_CAPACITY: usize = 10;

/// Largest buffer, in slots, an array will ever request.
///
/// A few slots below `isize::MAX` are left as headroom so that size and
/// capacity differences always fit in an `isize`.
pub const MAX_ARRAY_SIZE: usize = isize::MAX as usize - 8;

/// Tunable limits for how a [`DynArray`](crate::DynArray) grows.
///
/// # Examples
///
/// ```
/// use dyn_array::{DynArray, GrowthPolicy};
///
/// let policy = GrowthPolicy::default()
///     .with_default_capacity(4)
///     .with_max_capacity(6);
///
/// let mut array = DynArray::with_policy(policy);
/// for i in 0..6 {
///     array.append(i).unwrap();
/// }
/// assert_eq!(array.capacity(), 6);
/// assert!(array.append(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    default_capacity: usize,
    max_capacity: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy {
            default_capacity: DEFAULT_CAPACITY,
            max_capacity: MAX_ARRAY_SIZE,
        }
    }
}

impl GrowthPolicy {
    /// Sets the capacity reserved on the first insertion into an unallocated array.
    pub fn with_default_capacity(mut self, default_capacity: usize) -> Self {
        self.default_capacity = default_capacity;
        self
    }

    /// Sets the maximum capacity. Values above [`MAX_ARRAY_SIZE`] are clamped.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity.min(MAX_ARRAY_SIZE);
        self
    }

    #[inline]
    pub fn default_capacity(&self) -> usize {
        self.default_capacity
    }

    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Computes the capacity to reallocate to when `current` slots cannot hold
    /// `min_capacity` elements.
    ///
    /// An unallocated buffer (`current == 0`) jumps straight to the default
    /// capacity. Otherwise the buffer grows by half, or to `min_capacity` if
    /// half is not enough.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CapacityExceeded` if the computed capacity is
    /// above [`max_capacity`](Self::max_capacity).
    pub fn next_capacity(&self, current: usize, min_capacity: usize) -> Result<usize> {
        let min_capacity = if current == 0 {
            min_capacity.max(self.default_capacity)
        } else {
            min_capacity
        };

        let grown = current.saturating_add(current >> 1);
        let new_capacity = grown.max(min_capacity);

        if new_capacity > self.max_capacity {
            return Err(DynArrayError::CapacityExceeded {
                required: new_capacity,
                max: self.max_capacity,
            });
        }
        Ok(new_capacity)
    }
}
