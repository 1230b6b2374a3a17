//! # dyn_array
//!
//! A `no_std` compatible resizable array with explicit capacity management.
//!
//! ```rust
//! use dyn_array::DynArray;
//!
//! let mut array = DynArray::new();
//! array.append(1).unwrap();
//! array.append(2).unwrap();
//! array.append(3).unwrap();
//!
//! array.insert_at(1, 9).unwrap();
//! assert_eq!(array.as_slice(), &[1, 9, 2, 3]);
//!
//! assert_eq!(array.remove_at(0).unwrap(), 1);
//! array.sort();
//! assert_eq!(array.as_slice(), &[2, 3, 9]);
//! assert_eq!(array.capacity(), 3);
//! ```
//!
//! ## Growth
//!
//! An empty array allocates nothing until the first insertion, which reserves
//! [`DEFAULT_CAPACITY`] slots. After that every reallocation grows the buffer
//! by half of its current capacity, or to the required capacity if that is larger.
//! See [`GrowthPolicy`] for tuning both limits.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod array;
pub mod error;
pub mod growth;
pub mod ordering;
pub mod sort;
#[doc(hidden)]
pub mod storage;

pub use array::DynArray;
pub use error::{DynArrayError, Result};
pub use growth::{DEFAULT_CAPACITY, GrowthPolicy, MAX_ARRAY_SIZE};
pub use ordering::{by_length, by_size, length_comparator};
