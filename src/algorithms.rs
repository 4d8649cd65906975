//! Batch algorithms over a [`DynamicArray`].
//!
//! Both functions borrow their input and return freshly allocated arrays.

use core::mem;

use crate::array::DynamicArray;

/// Splits `arr` into its maximal non-descending runs, in order.
///
/// An element continues the current run when it is `>=` the element right
/// before it; anything else (a smaller or incomparable element) starts a new
/// run. An empty input yields no runs at all.
///
/// # Examples
///
/// ```
/// use dynbag::{DynamicArray, chunk};
///
/// let runs = chunk(&DynamicArray::from([3, 5, 2, 2, 9, 1]));
/// assert_eq!(runs.len(), 3);
/// assert_eq!(runs.get(0), Ok(&DynamicArray::from([3, 5])));
/// assert_eq!(runs.get(1), Ok(&DynamicArray::from([2, 2, 9])));
/// assert_eq!(runs.get(2), Ok(&DynamicArray::from([1])));
///
/// assert!(chunk(&DynamicArray::<i32>::new()).is_empty());
/// ```
pub fn chunk<T>(arr: &DynamicArray<T>) -> DynamicArray<DynamicArray<T>>
where
    T: PartialOrd + Clone,
{
    let mut runs = DynamicArray::new();
    let mut iter = arr.iter();
    let Some(first) = iter.next() else {
        return runs;
    };

    let mut current = DynamicArray::new();
    current.append(first.clone());
    let mut previous = first;

    for value in iter {
        if value >= previous {
            current.append(value.clone());
        } else {
            runs.append(mem::take(&mut current));
            current.append(value.clone());
        }
        previous = value;
    }

    // the last run never sees a smaller successor
    runs.append(current);
    runs
}

/// Finds the most frequent values of a **sorted** array.
///
/// Returns the tied values in the order they first appear, together with
/// their frequency. An empty input yields `([], 0)`.
///
/// Only runs of adjacent equal elements are counted, so an unsorted input
/// gives per-run counts rather than overall frequencies. The ordering is not
/// checked.
///
/// # Examples
///
/// ```
/// use dynbag::{DynamicArray, find_mode};
///
/// let (modes, freq) = find_mode(&DynamicArray::from([1, 1, 2, 2, 2, 3]));
/// assert_eq!(modes, DynamicArray::from([2]));
/// assert_eq!(freq, 3);
///
/// let (modes, freq) = find_mode(&DynamicArray::from(["a", "a", "b", "b"]));
/// assert_eq!(modes, DynamicArray::from(["a", "b"]));
/// assert_eq!(freq, 2);
/// ```
pub fn find_mode<T>(arr: &DynamicArray<T>) -> (DynamicArray<T>, usize)
where
    T: PartialEq + Clone,
{
    let mut modes = DynamicArray::new();
    let mut max_count = 0;

    let mut iter = arr.iter();
    let Some(mut current) = iter.next() else {
        return (modes, max_count);
    };
    let mut count = 1;

    for value in iter {
        if value == current {
            count += 1;
            continue;
        }
        record_run(&mut modes, &mut max_count, current, count);
        current = value;
        count = 1;
    }
    record_run(&mut modes, &mut max_count, current, count);

    (modes, max_count)
}

fn record_run<T: Clone>(
    modes: &mut DynamicArray<T>,
    max_count: &mut usize,
    value: &T,
    count: usize,
) {
    if count > *max_count {
        *modes = DynamicArray::new();
        modes.append(value.clone());
        *max_count = count;
    } else if count == *max_count {
        modes.append(value.clone());
    }
}
