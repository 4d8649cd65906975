//! The growable array at the core of the crate.
//!
//! [`DynamicArray<T>`] keeps its elements in a [`FixedBuffer<T>`] and swaps
//! that buffer for a bigger or smaller one as the logical size changes:
//!
//! * when an insertion finds the buffer full, the capacity doubles;
//! * when a removal leaves the array less than a quarter full and the
//!   capacity is above [`SHRINK_FLOOR`](DynamicArray::SHRINK_FLOOR), the
//!   capacity drops to `max(len * 2, SHRINK_FLOOR)`.
//!
//! The gap between the grow point (full) and the shrink point (a quarter
//! full) keeps alternating appends and removals from reallocating on every
//! call.

use alloc::vec::Vec;
use core::{cmp, fmt, iter::FusedIterator, mem, slice};

use crate::buffer::FixedBuffer;
use crate::error::{Error, Result};

/// A growable array with amortized `O(1)` append and explicit capacity
/// management.
///
/// # Examples
///
/// ```
/// use dynbag::DynamicArray;
///
/// let mut arr = DynamicArray::new();
/// arr.append(10);
/// arr.append(30);
/// arr.insert_at(1, 20).unwrap();
///
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.get(1), Ok(&20));
/// assert_eq!(arr.remove_at(0), Ok(10));
/// assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [20, 30]);
/// ```
#[derive(Clone)]
pub struct DynamicArray<T> {
    size: usize,
    buffer: FixedBuffer<T>,
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Capacity of a freshly constructed array.
    pub const INITIAL_CAPACITY: usize = 4;

    /// Automatic shrinking never takes the capacity below this value, and
    /// only happens while the capacity is above it.
    pub const SHRINK_FLOOR: usize = 10;

    /// Constructs a new, empty `DynamicArray<T>` with capacity
    /// [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY).
    ///
    /// Unlike [`Vec::new`], this allocates immediately.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::DynamicArray;
    ///
    /// let arr: DynamicArray<i32> = DynamicArray::new();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.capacity(), 4);
    /// ```
    pub fn new() -> Self {
        Self {
            size: 0,
            buffer: FixedBuffer::new(Self::INITIAL_CAPACITY),
        }
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the current buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(occupied(self.buffer.get(index)?))
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`; the array is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::{DynamicArray, Error};
    ///
    /// let mut arr = DynamicArray::from([1, 2, 3]);
    /// arr.set(2, 9).unwrap();
    /// assert_eq!(arr.get(2), Ok(&9));
    /// assert_eq!(arr.set(3, 0), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.buffer.set(index, value)?;
        Ok(())
    }

    /// Appends an element to the back of the array, doubling the capacity
    /// first if the buffer is full.
    ///
    /// # Panics
    ///
    /// Panics or aborts if a larger buffer cannot be allocated. See
    /// [`try_append`](Self::try_append) for the fallible version.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::DynamicArray;
    ///
    /// let mut arr = DynamicArray::new();
    /// for i in 0..5 {
    ///     arr.append(i);
    /// }
    /// assert_eq!(arr.len(), 5);
    /// assert_eq!(arr.capacity(), 8);
    /// ```
    pub fn append(&mut self, value: T) {
        if self.size == self.capacity() {
            self.reallocate(FixedBuffer::new(self.capacity() * 2));
        }
        self.buffer[self.size] = Some(value);
        self.size += 1;
    }

    /// Like [`append`](Self::append), but reports allocation failure instead
    /// of panicking.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailed`] if the array was full and a buffer of twice
    /// the capacity could not be allocated. The array is unchanged.
    pub fn try_append(&mut self, value: T) -> Result<()> {
        if self.size == self.capacity() {
            let grown = FixedBuffer::try_new(self.capacity().saturating_mul(2))?;
            self.reallocate(grown);
        }
        self.buffer[self.size] = Some(value);
        self.size += 1;
        Ok(())
    }

    /// Inserts an element at `index`, shifting everything after it one slot
    /// to the right.
    ///
    /// `index == len` is allowed and behaves like [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index > len`; the array is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([1, 3]);
    /// arr.insert_at(1, 2).unwrap();
    /// arr.insert_at(3, 4).unwrap();
    /// assert_eq!(arr, DynamicArray::from([1, 2, 3, 4]));
    /// assert!(arr.insert_at(5, 0).is_err());
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.size {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.size,
            });
        }

        if self.size == self.capacity() {
            self.reallocate(FixedBuffer::new(self.capacity() * 2));
        }

        // walk the empty slot at `size` down to `index`, tail first
        for i in (index..self.size).rev() {
            self.buffer.swap(i, i + 1)?;
        }
        self.buffer.set(index, value)?;
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one slot to the left.
    ///
    /// Afterwards, if `len < capacity / 4` and `capacity > SHRINK_FLOOR`, the
    /// buffer is replaced by one of `max(len * 2, SHRINK_FLOOR)` slots.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`; the array is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::DynamicArray;
    ///
    /// let mut arr: DynamicArray<_> = (0..40).collect();
    /// assert_eq!(arr.capacity(), 64);
    ///
    /// while arr.len() > 15 {
    ///     arr.remove_at(0).unwrap();
    /// }
    /// // 15 < 64 / 4, so the last removal shrank the buffer
    /// assert_eq!(arr.capacity(), 30);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let removed = self.buffer.take(index)?;
        // bubble the hole up to the last live slot
        for i in index..self.size - 1 {
            self.buffer.swap(i, i + 1)?;
        }
        self.size -= 1;

        if self.size < self.capacity() / 4 && self.capacity() > Self::SHRINK_FLOOR {
            let target = cmp::max(self.size * 2, Self::SHRINK_FLOOR);
            self.reallocate(FixedBuffer::new(target));
        }

        Ok(occupied(removed))
    }

    /// Moves the elements into a buffer of exactly `new_capacity` slots.
    ///
    /// Does nothing if `new_capacity` is zero or smaller than the current
    /// length; this is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([1, 2, 3]);
    /// arr.resize(100);
    /// assert_eq!(arr.capacity(), 100);
    ///
    /// arr.resize(2); // smaller than len: ignored
    /// assert_eq!(arr.capacity(), 100);
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity == 0 || new_capacity < self.size {
            return;
        }
        self.reallocate(FixedBuffer::new(new_capacity));
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.buffer.as_slots()[..self.size].iter(),
        }
    }

    /// Returns a new array holding `f` applied to every element, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::DynamicArray;
    ///
    /// let words = DynamicArray::from(["a", "bcd", "ef"]);
    /// assert_eq!(words.map(|w| w.len()), DynamicArray::from([1, 3, 2]));
    /// ```
    pub fn map<U, F>(&self, f: F) -> DynamicArray<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Left fold over the elements, starting from `seed`.
    ///
    /// Returns `seed` untouched when the array is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::DynamicArray;
    ///
    /// let arr = DynamicArray::from([1, 2, 3]);
    /// assert_eq!(arr.fold(10, |acc, x| acc + x), 16);
    /// assert_eq!(DynamicArray::<i32>::new().fold(10, |acc, x| acc + x), 10);
    /// ```
    pub fn fold<A, F>(&self, seed: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(seed, f)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.size,
            })
        }
    }

    /// Replaces the buffer with `fresh`, moving the live elements across.
    fn reallocate(&mut self, fresh: FixedBuffer<T>) {
        debug_assert!(fresh.capacity() >= self.size);
        trace!(
            "reallocating buffer: {} -> {} slots ({} live)",
            self.capacity(),
            fresh.capacity(),
            self.size
        );
        let mut old = mem::replace(&mut self.buffer, fresh);
        old.transfer_into(&mut self.buffer, self.size);
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Copies `count` elements starting at `start` into a new array.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `start + count > len`, or if the array is
    /// non-empty and `start >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::DynamicArray;
    ///
    /// let arr = DynamicArray::from([1, 2, 3, 4, 5]);
    /// assert_eq!(arr.slice(1, 3), Ok(DynamicArray::from([2, 3, 4])));
    /// assert!(arr.slice(5, 0).is_err());
    /// assert!(arr.slice(3, 3).is_err());
    /// ```
    pub fn slice(&self, start: usize, count: usize) -> Result<Self> {
        let len = self.size;
        let past_end = len > 0 && start >= len;
        let overruns = start.checked_add(count).is_none_or(|end| end > len);
        if past_end || overruns {
            return Err(Error::InvalidRange { start, count, len });
        }
        Ok(self.iter().skip(start).take(count).cloned().collect())
    }

    /// Returns a new array with the elements for which `predicate` holds, in
    /// order.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|value| predicate(value)).cloned().collect()
    }

    /// Left fold that uses the first element as the starting accumulator.
    ///
    /// Returns `None` for an empty array. A single-element array yields that
    /// element without calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::DynamicArray;
    ///
    /// let arr = DynamicArray::from([3, 1, 4]);
    /// assert_eq!(arr.reduce(|acc, &x| acc.max(x)), Some(4));
    /// assert_eq!(DynamicArray::<i32>::new().reduce(|a, b| a + b), None);
    /// ```
    pub fn reduce<F>(&self, f: F) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        let mut iter = self.iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, f))
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`DynamicArray`], created by
/// [`DynamicArray::iter`].
pub struct Iter<'a, T> {
    /// Live slots only; every one of them is occupied
    inner: slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| occupied(slot.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|slot| occupied(slot.as_ref()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Unwraps a slot below `size`, which is always occupied.
#[inline]
fn occupied<T>(slot: Option<T>) -> T {
    match slot {
        Some(value) => value,
        None => unreachable!("live slot below len was empty"),
    }
}
