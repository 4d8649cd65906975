//! A growable array with explicit capacity hysteresis, plus a few things
//! built on top of it.
//!
//! [`DynamicArray<T>`] stores its elements in a [`FixedBuffer<T>`] and
//! replaces that buffer when it runs out of room (doubling the capacity) or
//! when it becomes mostly empty (shrinking it, but never below
//! [`DynamicArray::SHRINK_FLOOR`]). All indexed access is bounds-checked and
//! reports an [`Error`] instead of panicking.
//!
//! On top of the array sit:
//!
//! * [`chunk`], which splits an array into its non-descending runs;
//! * [`find_mode`], which finds the most frequent values of a sorted array;
//! * [`Bag<T>`], a multiset whose equality ignores order.
//!
//! ## Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use dynbag::DynamicArray;
//!
//! let mut arr = DynamicArray::new();
//! for word in ["pear", "fig", "apple"] {
//!     arr.append(word);
//! }
//! arr.insert_at(0, "kiwi").unwrap();
//!
//! assert_eq!(arr.len(), 4);
//! assert_eq!(arr.get(0), Ok(&"kiwi"));
//!
//! // higher-order helpers never touch the receiver
//! let lengths = arr.map(|w| w.len());
//! let short = arr.filter(|w| w.len() <= 4);
//! assert_eq!(lengths.fold(0, |acc, n| acc + n), 16);
//! assert_eq!(short.len(), 3);
//! assert_eq!(arr.len(), 4);
//! ```
//!
//! ### Runs and Modes
//!
//! ```rust
//! use dynbag::{DynamicArray, chunk, find_mode};
//!
//! let readings = DynamicArray::from([1, 4, 4, 2, 3, 3, 0]);
//!
//! let runs = chunk(&readings);
//! let sizes: Vec<_> = runs.iter().map(|run| run.len()).collect();
//! assert_eq!(sizes, [3, 3, 1]);
//!
//! let (modes, freq) = find_mode(&DynamicArray::from([2, 2, 5, 7, 7]));
//! assert_eq!(modes, DynamicArray::from([2, 7]));
//! assert_eq!(freq, 2);
//! ```
//!
//! ### Bags
//!
//! ```rust
//! use dynbag::Bag;
//!
//! let mut tally: Bag<&str> = ["red", "blue", "red"].into_iter().collect();
//! tally.add("green");
//!
//! assert_eq!(tally.count(&"red"), 2);
//! assert_eq!(tally, Bag::from(["green", "red", "blue", "red"]));
//! assert_ne!(tally, Bag::from(["green", "red", "blue", "blue"]));
//! ```
//!
//! ## Features
//!
//! * `log` (default): reports every buffer reallocation at `trace` level
//!   through the [`log`](https://docs.rs/log) facade.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        {
            log::trace!($($arg)*);
        }
    }};
}

pub mod algorithms;
pub mod array;
pub mod bag;
pub mod buffer;
mod error;

pub use algorithms::{chunk, find_mode};
pub use array::DynamicArray;
pub use bag::Bag;
pub use buffer::FixedBuffer;
pub use error::{Error, Result};
