use alloc::boxed::Box;
use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::mem::MaybeUninit;
use core::ptr;

/// The low-level slot buffer behind a [`DynArray`](crate::DynArray).
///
/// - A fixed number of slots, each either holding a live `T` or uninitialised
/// - Does not track which slots are live; the owner passes the live length in
/// - Never drops a `T`; the owner is responsible for dropping live slots
pub struct Storage<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> Storage<T> {
    /// Create storage with no slots
    pub fn empty() -> Self {
        Storage {
            slots: Vec::new().into_boxed_slice(),
        }
    }

    /// Allocate exactly `capacity` uninitialised slots
    pub fn try_allocate(capacity: usize) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, MaybeUninit::uninit);
        Ok(Storage {
            slots: slots.into_boxed_slice(),
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Write `value` into slot `index`.
    ///
    /// # Safety
    ///
    /// `index < capacity()` and the slot must not hold a live value.
    #[inline]
    pub unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.capacity());
        unsafe { self.slots.get_unchecked_mut(index) }.write(value);
    }

    /// Move the value out of slot `index`, leaving it uninitialised.
    ///
    /// # Safety
    ///
    /// Slot `index` must hold a live value.
    #[inline]
    pub unsafe fn take(&mut self, index: usize) -> T {
        debug_assert!(index < self.capacity());
        unsafe { self.slots.get_unchecked(index).assume_init_read() }
    }

    /// Move slots `index..len` one slot to the right, leaving `index` uninitialised.
    ///
    /// # Safety
    ///
    /// `index <= len < capacity()`.
    pub unsafe fn shift_right(&mut self, index: usize, len: usize) {
        debug_assert!(index <= len && len < self.capacity());
        let base = self.slots.as_mut_ptr();
        unsafe { ptr::copy(base.add(index), base.add(index + 1), len - index) };
    }

    /// Move slots `index + 1..len` one slot to the left, over the vacated `index`.
    ///
    /// # Safety
    ///
    /// `index < len <= capacity()` and slot `index` must already be vacated.
    pub unsafe fn shift_left(&mut self, index: usize, len: usize) {
        debug_assert!(index < len && len <= self.capacity());
        let base = self.slots.as_mut_ptr();
        unsafe { ptr::copy(base.add(index + 1), base.add(index), len - index - 1) };
    }

    /// Move the first `len` slots into a fresh buffer of `new_capacity` slots
    /// and release the old one. Leaves `self` untouched on failure.
    ///
    /// # Safety
    ///
    /// `len <= new_capacity` and `len <= capacity()`.
    pub unsafe fn relocate(
        &mut self,
        new_capacity: usize,
        len: usize,
    ) -> Result<(), TryReserveError> {
        debug_assert!(len <= new_capacity && len <= self.capacity());
        let mut fresh = Storage::try_allocate(new_capacity)?;
        unsafe {
            ptr::copy_nonoverlapping(self.slots.as_ptr(), fresh.slots.as_mut_ptr(), len);
        }
        self.slots = fresh.slots;
        Ok(())
    }

    /// Shrink the buffer to exactly `len` slots.
    ///
    /// # Safety
    ///
    /// `len <= capacity()`. Slots at or above `len` must not hold live values.
    pub unsafe fn shrink_to(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        let mut slots = core::mem::replace(&mut self.slots, Vec::new().into_boxed_slice())
            .into_vec();
        slots.truncate(len);
        self.slots = slots.into_boxed_slice();
    }

    /// View the first `len` slots as initialised values.
    ///
    /// # Safety
    ///
    /// Slots `0..len` must all hold live values.
    #[inline]
    pub unsafe fn as_slice(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.capacity());
        unsafe { core::slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), len) }
    }

    /// Mutable view of the first `len` slots.
    ///
    /// # Safety
    ///
    /// Slots `0..len` must all hold live values.
    #[inline]
    pub unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.capacity());
        unsafe { core::slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), len) }
    }
}
