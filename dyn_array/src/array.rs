use core::cmp::Ordering;
use core::fmt;

use bytemuck::Pod;
use tracing::{debug, trace};

use crate::sort::bubble_sort_by;
use crate::storage::Storage;
use crate::{DynArrayError, GrowthPolicy, Result};

/// A growable array with explicit, observable capacity.
///
/// `DynArray<T>` owns a fixed-size slot buffer and a count of the live
/// elements at its front. Elements always occupy `[0, size)` with no gaps.
/// When an insertion needs more room the buffer is reallocated according
/// to its [`GrowthPolicy`]. It never shrinks unless [`trim_to_size`] is called.
///
/// # Examples
///
/// ## Positional editing
///
/// ```
/// use dyn_array::DynArray;
///
/// let mut array = DynArray::new();
/// array.append("b").unwrap();
/// array.append("c").unwrap();
///
/// // Insert in front of an existing element
/// array.insert_at(0, "a").unwrap();
/// assert_eq!(array.as_slice(), &["a", "b", "c"]);
///
/// // Inserting at the tail is not allowed; use append
/// assert!(array.insert_at(3, "d").is_err());
///
/// assert_eq!(array.remove_at(1).unwrap(), "b");
/// assert_eq!(array.size(), 2);
/// ```
///
/// ## Capacity management
///
/// ```
/// use dyn_array::DynArray;
///
/// let mut array = DynArray::with_capacity(4).unwrap();
/// array.append(1u32).unwrap();
/// assert_eq!(array.capacity(), 4);
///
/// array.trim_to_size();
/// assert_eq!(array.capacity(), 1);
///
/// // Growth restarts from the trimmed buffer: 1 + 1/2 is too small, so 2
/// array.append(2).unwrap();
/// assert_eq!(array.capacity(), 2);
/// ```
///
/// [`trim_to_size`]: DynArray::trim_to_size
pub struct DynArray<T> {
    storage: Storage<T>,
    size: usize,
    policy: GrowthPolicy,
}

impl<T> DynArray<T> {
    /// Creates an empty array with no buffer.
    ///
    /// Nothing is allocated until the first insertion, which reserves
    /// [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut array = DynArray::new();
    /// assert_eq!(array.capacity(), 0);
    /// array.append(1).unwrap();
    /// assert_eq!(array.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Creates an empty array governed by a custom growth policy.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        DynArray {
            storage: Storage::empty(),
            size: 0,
            policy,
        }
    }

    /// Creates an empty array with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// - `DynArrayError::InvalidArgument` if `capacity <= 0`
    /// - `DynArrayError::CapacityExceeded` if the buffer cannot be allocated
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::{DynArray, DynArrayError};
    ///
    /// let array = DynArray::<u8>::with_capacity(16).unwrap();
    /// assert_eq!(array.capacity(), 16);
    /// assert_eq!(array.size(), 0);
    ///
    /// assert_eq!(
    ///     DynArray::<u8>::with_capacity(0).unwrap_err(),
    ///     DynArrayError::InvalidArgument(0)
    /// );
    /// ```
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        if capacity <= 0 {
            return Err(DynArrayError::InvalidArgument(capacity));
        }
        let mut array = Self::new();
        array.reallocate(capacity as usize)?;
        Ok(array)
    }

    /// Number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Appends an element after the last live element.
    ///
    /// Always returns `Ok(true)` unless the buffer had to grow and could not.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CapacityExceeded` if growth would pass the
    /// policy's maximum capacity or the allocation fails.
    pub fn append(&mut self, value: T) -> Result<bool> {
        self.ensure_capacity(self.required_for_one_more()?)?;
        // SAFETY: size < capacity after the reservation, and slot `size` is free.
        unsafe { self.storage.write(self.size, value) };
        self.size += 1;
        Ok(true)
    }

    /// Inserts `value` at `index`, shifting `index..size` one slot right.
    ///
    /// `index` must name an existing element. Unlike `Vec::insert`,
    /// `index == size()` is rejected.
    ///
    /// # Errors
    ///
    /// - `DynArrayError::IndexOutOfRange` if `index >= size()`
    /// - `DynArrayError::CapacityExceeded` if the buffer cannot grow
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut array = DynArray::from_slice(&[1, 2, 3]).unwrap();
    /// array.insert_at(1, 9).unwrap();
    /// assert_eq!(array.as_slice(), &[1, 9, 2, 3]);
    /// assert!(array.insert_at(4, 0).is_err());
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.ensure_capacity(self.required_for_one_more()?)?;
        // SAFETY: index < size < capacity, so the shift stays in bounds and
        // leaves slot `index` vacated for the write.
        unsafe {
            self.storage.shift_right(index, self.size);
            self.storage.write(index, value);
        }
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfRange` if `index >= size()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.remove_unchecked(index))
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `true` if an element was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut array = DynArray::from_slice(&["x", "y", "x"]).unwrap();
    /// assert!(array.remove_by_value(&"x"));
    /// assert_eq!(array.as_slice(), &["y", "x"]);
    /// assert!(!array.remove_by_value(&"z"));
    /// ```
    pub fn remove_by_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.position_of(value) {
            Some(index) => {
                drop(self.remove_unchecked(index));
                true
            }
            None => false,
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfRange` if `index >= size()`.
    #[inline]
    pub fn get_at(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfRange` if `index >= size()`.
    #[inline]
    pub fn get_at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Returns `true` if any live element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.position_of(value).is_some()
    }

    /// Reallocates the buffer to exactly `size()` slots.
    ///
    /// Does nothing if the buffer is already that size. Later growth starts
    /// from the trimmed capacity.
    pub fn trim_to_size(&mut self) {
        let old_capacity = self.capacity();
        if old_capacity == self.size {
            return;
        }
        // SAFETY: slots at or above `size` are never live.
        unsafe { self.storage.shrink_to(self.size) };
        trace!(old_capacity, new_capacity = self.size, "trimmed dyn array");
    }

    /// Sorts the elements in non-decreasing order with a stable bubble sort.
    ///
    /// The buffer is trimmed to `size()` first, so `capacity()` equals
    /// `size()` afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut array = DynArray::new();
    /// for v in [3, 1, 2] {
    ///     array.append(v).unwrap();
    /// }
    /// array.sort();
    /// assert_eq!(array.as_slice(), &[1, 2, 3]);
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Like [`sort`](Self::sort), ordering elements with `compare`.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.trim_to_size();
        let swaps = bubble_sort_by(self.as_mut_slice(), compare);
        trace!(size = self.size, swaps, "sorted dyn array");
    }

    /// Orders two arrays by their number of live elements.
    ///
    /// Returns `self.size() - other.size()`. Element values and capacities
    /// play no part.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let small = DynArray::from_slice(&[1]).unwrap();
    /// let large = DynArray::from_slice(&["a", "b", "c"]).unwrap();
    /// assert_eq!(small.compare_to(&large), -2);
    /// assert_eq!(large.compare_to(&small), 2);
    /// ```
    pub fn compare_to<U>(&self, other: &DynArray<U>) -> isize {
        self.size as isize - other.size as isize
    }

    /// Drops every element. The buffer is kept.
    pub fn clear(&mut self) {
        let len = self.size;
        self.size = 0;
        // SAFETY: slots `0..len` were live and are no longer reachable.
        unsafe { core::ptr::drop_in_place(self.storage.as_mut_slice(len)) };
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `0..size` are always live.
        unsafe { self.storage.as_slice(self.size) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots `0..size` are always live.
        unsafe { self.storage.as_mut_slice(self.size) }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(DynArrayError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    fn required_for_one_more(&self) -> Result<usize> {
        self.size
            .checked_add(1)
            .ok_or(DynArrayError::CapacityExceeded {
                required: usize::MAX,
                max: self.policy.max_capacity(),
            })
    }

    fn position_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    fn remove_unchecked(&mut self, index: usize) -> T {
        debug_assert!(index < self.size);
        // SAFETY: index < size, so the slot is live; after the take it is
        // vacated and the tail can slide over it.
        let value = unsafe {
            let value = self.storage.take(index);
            self.storage.shift_left(index, self.size);
            value
        };
        self.size -= 1;
        value
    }

    fn ensure_capacity(&mut self, min_capacity: usize) -> Result<()> {
        let capacity = self.capacity();
        if min_capacity <= capacity {
            return Ok(());
        }
        let new_capacity = self
            .policy
            .next_capacity(capacity, min_capacity)
            .inspect_err(|err| debug!(capacity, min_capacity, %err, "dyn array growth refused"))?;
        self.reallocate(new_capacity)
    }

    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        let old_capacity = self.capacity();
        if new_capacity > self.policy.max_capacity() {
            debug!(old_capacity, new_capacity, "dyn array capacity above policy maximum");
            return Err(DynArrayError::CapacityExceeded {
                required: new_capacity,
                max: self.policy.max_capacity(),
            });
        }
        // SAFETY: callers only ever grow, so `size <= new_capacity`.
        unsafe { self.storage.relocate(new_capacity, self.size) }.map_err(|_| {
            debug!(old_capacity, new_capacity, "dyn array allocation failed");
            DynArrayError::CapacityExceeded {
                required: new_capacity,
                max: self.policy.max_capacity(),
            }
        })?;
        trace!(old_capacity, new_capacity, size = self.size, "grew dyn array");
        Ok(())
    }
}

impl<T: Clone> DynArray<T> {
    /// Creates an array holding clones of `values`.
    ///
    /// The buffer starts at the default capacity, or larger when `values`
    /// needs more.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        let mut array = Self::new();
        array.extend_from_slice(values)?;
        Ok(array)
    }

    /// Appends clones of `values`, reserving room for all of them up front.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CapacityExceeded` if the buffer cannot grow.
    /// Nothing is appended in that case.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        let required = self
            .size
            .checked_add(values.len())
            .ok_or(DynArrayError::CapacityExceeded {
                required: usize::MAX,
                max: self.policy.max_capacity(),
            })?;
        self.ensure_capacity(required)?;
        for value in values {
            // SAFETY: capacity was reserved for every value.
            unsafe { self.storage.write(self.size, value.clone()) };
            self.size += 1;
        }
        Ok(())
    }
}

impl<T: Pod> DynArray<T> {
    /// Returns the live elements as raw bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let array = DynArray::from_slice(&[1u16, 2]).unwrap();
    /// assert_eq!(array.as_bytes().len(), 4);
    /// ```
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    /// Clones the elements into a buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut array = DynArray::with_policy(self.policy);
        if self.capacity() > 0 {
            if let Err(err) = array.reallocate(self.capacity()) {
                panic!("failed to clone dyn array: {err}");
            }
        }
        for value in self.iter() {
            // SAFETY: same capacity as `self`, and `array.size < self.size`.
            unsafe { array.storage.write(array.size, value.clone()) };
            array.size += 1;
        }
        array
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> core::ops::Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get_at(index).expect("index out of range")
    }
}

impl<T> core::ops::IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_at_mut(index).expect("index out of range")
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
