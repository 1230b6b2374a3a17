//! Orderings between whole arrays.
//!
//! Arrays have two notions of "how big": the number of live elements
//! ([`DynArray::compare_to`], [`by_size`]) and the number of slots in the
//! backing buffer ([`length_comparator`], [`by_length`]). These are kept as
//! separate functions and never mixed.

use core::cmp::Ordering;

use crate::DynArray;

/// Compares two arrays by capacity, returning `a.capacity() - b.capacity()`.
///
/// # Examples
///
/// ```
/// use dyn_array::{DynArray, length_comparator};
///
/// let a = DynArray::<u8>::with_capacity(4).unwrap();
/// let b = DynArray::<u8>::with_capacity(10).unwrap();
/// assert_eq!(length_comparator(&a, &b), -6);
/// ```
pub fn length_comparator<T, U>(a: &DynArray<T>, b: &DynArray<U>) -> isize {
    a.capacity() as isize - b.capacity() as isize
}

/// [`DynArray::compare_to`] as an [`Ordering`], for use with `sort_by`.
pub fn by_size<T>(a: &DynArray<T>, b: &DynArray<T>) -> Ordering {
    a.compare_to(b).cmp(&0)
}

/// [`length_comparator`] as an [`Ordering`], for use with `sort_by`.
pub fn by_length<T>(a: &DynArray<T>, b: &DynArray<T>) -> Ordering {
    length_comparator(a, b).cmp(&0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn length_ignores_size() -> Result<()> {
        let mut big = DynArray::with_capacity(20)?;
        big.append(1)?;
        let small = DynArray::from_slice(&[1, 2, 3])?;

        // fewer elements but more slots
        assert!(big.compare_to(&small) < 0);
        assert_eq!(length_comparator(&big, &small), 10);
        assert_eq!(by_size(&big, &small), Ordering::Less);
        assert_eq!(by_length(&big, &small), Ordering::Greater);
        Ok(())
    }

    #[test]
    fn sorts_arrays_by_either_measure() -> Result<()> {
        let mut arrays = vec![
            DynArray::from_slice(&[1, 2, 3, 4])?,
            DynArray::with_capacity(30)?,
            DynArray::from_slice(&[5])?,
        ];

        arrays.sort_by(by_size);
        let sizes: Vec<usize> = arrays.iter().map(DynArray::size).collect();
        assert_eq!(sizes, [0, 1, 4]);

        arrays.sort_by(by_length);
        let capacities: Vec<usize> = arrays.iter().map(DynArray::capacity).collect();
        assert_eq!(capacities, [10, 10, 30]);
        Ok(())
    }
}
