//! Bubble sort over a slice.

use core::cmp::Ordering;

/// Sorts `values` in place with bubble sort, returning the number of swaps.
///
/// Each pass carries the largest remaining element to the end of the unsorted
/// prefix. Only strict inversions (`compare` returning `Greater`) are swapped,
/// so elements that compare equal keep their relative order. Stops early once
/// a pass makes no swaps.
pub fn bubble_sort_by<T, F>(values: &mut [T], mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut swaps = 0;
    for end in (1..values.len()).rev() {
        let mut swapped = false;
        for j in 0..end {
            if compare(&values[j], &values[j + 1]) == Ordering::Greater {
                values.swap(j, j + 1);
                swapped = true;
                swaps += 1;
            }
        }
        if !swapped {
            break;
        }
    }
    swaps
}

/// [`bubble_sort_by`] using the natural order of `T`.
pub fn bubble_sort<T: Ord>(values: &mut [T]) -> usize {
    bubble_sort_by(values, T::cmp)
}
