//! Property-based tests for DynArray.

use dyn_array::{DEFAULT_CAPACITY, DynArray, DynArrayError, length_comparator};
use proptest::prelude::*;

use bytemuck_derive::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Zeroable, Pod)]
struct Reading {
    sensor: u32,
    value: u32,
}

fn reading_strategy() -> impl Strategy<Value = Reading> {
    (0u32..8, any::<u32>()).prop_map(|(sensor, value)| Reading { sensor, value })
}

fn filled(values: &[i32]) -> DynArray<i32> {
    let mut array = DynArray::new();
    for v in values {
        array.append(*v).unwrap();
    }
    array
}

//
// -----------------------------------------------------------------------------
// Append / read
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_append_preserves_order(values: Vec<i32>) {
        let array = filled(&values);

        prop_assert_eq!(array.size(), values.len());
        prop_assert!(array.capacity() >= array.size());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(array.get_at(i).unwrap(), v);
        }
        prop_assert!(array.get_at(values.len()).is_err());
    }

    #[test]
    fn prop_capacity_follows_growth_rule(count in 1usize..300) {
        let mut array = DynArray::new();
        let mut expected = 0usize;
        for i in 0..count {
            if i == expected {
                expected = if expected == 0 {
                    DEFAULT_CAPACITY
                } else {
                    expected + expected / 2
                };
            }
            array.append(i).unwrap();
            prop_assert_eq!(array.capacity(), expected);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Positional insert / remove
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_insert_shifts_right(
        values in prop::collection::vec(any::<i32>(), 1..100),
        seed: usize,
        inserted: i32,
    ) {
        let index = seed % values.len();
        let mut array = filled(&values);

        array.insert_at(index, inserted).unwrap();

        let mut expected = values.clone();
        expected.insert(index, inserted);
        prop_assert_eq!(array.as_slice(), expected.as_slice());
    }

    #[test]
    fn prop_insert_at_size_is_rejected(values: Vec<i32>, extra in 0usize..5) {
        let mut array = filled(&values);
        let index = values.len() + extra;

        prop_assert_eq!(
            array.insert_at(index, 0),
            Err(DynArrayError::IndexOutOfRange { index, size: values.len() })
        );
        prop_assert_eq!(array.as_slice(), values.as_slice());
    }

    #[test]
    fn prop_remove_shifts_left(
        values in prop::collection::vec(any::<i32>(), 1..100),
        seed: usize,
    ) {
        let index = seed % values.len();
        let mut array = filled(&values);

        let removed = array.remove_at(index).unwrap();

        let mut expected = values.clone();
        prop_assert_eq!(removed, expected.remove(index));
        prop_assert_eq!(array.as_slice(), expected.as_slice());
    }

    #[test]
    fn prop_insert_remove_round_trip(
        values in prop::collection::vec(any::<i32>(), 1..100),
        seed: usize,
        inserted: i32,
    ) {
        let index = seed % values.len();
        let mut array = filled(&values);

        array.insert_at(index, inserted).unwrap();
        prop_assert_eq!(*array.get_at(index).unwrap(), inserted);
        prop_assert_eq!(array.remove_at(index).unwrap(), inserted);
        prop_assert_eq!(array.as_slice(), values.as_slice());
    }
}

//
// -----------------------------------------------------------------------------
// Search
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_remove_by_value_matches_vec(values in prop::collection::vec(0i32..10, 0..50), target in 0i32..12) {
        let mut array = filled(&values);
        let mut expected = values.clone();

        prop_assert_eq!(array.contains(&target), expected.contains(&target));

        let removed = array.remove_by_value(&target);
        match expected.iter().position(|v| *v == target) {
            Some(i) => {
                prop_assert!(removed);
                expected.remove(i);
            }
            None => prop_assert!(!removed),
        }
        prop_assert_eq!(array.as_slice(), expected.as_slice());
    }

    #[test]
    fn prop_removed_values_are_not_found(values in prop::collection::vec(any::<i64>(), 1..50)) {
        let mut array = DynArray::new();
        for v in &values {
            array.append(*v).unwrap();
        }
        // Vacated slots must never be matched.
        while let Ok(last) = array.remove_at(array.size().saturating_sub(1)) {
            let still_present = array.iter().any(|v| *v == last);
            prop_assert_eq!(array.contains(&last), still_present);
        }
        prop_assert!(array.is_empty());
    }
}

//
// -----------------------------------------------------------------------------
// Trim / sort / compare
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_trim_is_idempotent(values: Vec<i32>) {
        let mut array = filled(&values);

        array.trim_to_size();
        let once = array.capacity();
        array.trim_to_size();

        prop_assert_eq!(once, values.len());
        prop_assert_eq!(array.capacity(), once);
        prop_assert_eq!(array.as_slice(), values.as_slice());
    }

    #[test]
    fn prop_sort_matches_stable_sort(readings in prop::collection::vec(reading_strategy(), 0..60)) {
        let mut array = DynArray::new();
        for r in &readings {
            array.append(*r).unwrap();
        }

        array.sort_by(|a, b| a.sensor.cmp(&b.sensor));

        let mut expected = readings.clone();
        expected.sort_by_key(|r| r.sensor);
        prop_assert_eq!(array.as_slice(), expected.as_slice());
        prop_assert_eq!(array.capacity(), readings.len());
    }

    #[test]
    fn prop_sort_is_idempotent(values: Vec<i32>) {
        let mut array = filled(&values);
        array.sort();
        let once: Vec<i32> = array.iter().copied().collect();
        array.sort();

        prop_assert!(once.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(array.as_slice(), once.as_slice());
    }

    #[test]
    fn prop_compare_to_is_size_difference(a: Vec<i32>, b: Vec<u8>) {
        let left = filled(&a);
        let mut right = DynArray::new();
        for v in &b {
            right.append(*v).unwrap();
        }

        prop_assert_eq!(left.compare_to(&right), a.len() as isize - b.len() as isize);
        prop_assert_eq!(
            length_comparator(&left, &right),
            left.capacity() as isize - right.capacity() as isize
        );
    }

    #[test]
    fn prop_bytes_cover_live_elements(readings in prop::collection::vec(reading_strategy(), 0..40)) {
        let mut array = DynArray::new();
        for r in &readings {
            array.append(*r).unwrap();
        }

        let expected: &[u8] = bytemuck::cast_slice(&readings);
        prop_assert_eq!(array.as_bytes(), expected);
    }
}
