use alloc::{boxed::Box, vec::Vec};
use core::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// A fixed number of slots, allocated once and never resized.
///
/// Each slot is either empty (`None`) or holds one value. Every accessor is
/// bounds-checked against the capacity chosen at construction and reports
/// [`Error::IndexOutOfRange`] instead of panicking.
///
/// # Examples
///
/// ```
/// use dynbag::FixedBuffer;
///
/// let mut buf = FixedBuffer::new(2);
/// buf.set(1, "b").unwrap();
/// assert_eq!(buf.get(0).unwrap(), None);
/// assert_eq!(buf.get(1).unwrap(), Some(&"b"));
/// assert!(buf.get(2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBuffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> FixedBuffer<T> {
    /// Allocates a buffer of `capacity` empty slots.
    ///
    /// # Panics
    ///
    /// Aborts or panics the same way [`Vec`] does if the allocation fails.
    /// Use [`try_new`](FixedBuffer::try_new) to get an error instead.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Allocates a buffer of `capacity` empty slots, reporting allocation
    /// failure as [`Error::AllocationFailed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::{Error, FixedBuffer};
    ///
    /// let buf: FixedBuffer<u8> = FixedBuffer::try_new(8).unwrap();
    /// assert_eq!(buf.capacity(), 8);
    ///
    /// let huge = FixedBuffer::<u64>::try_new(usize::MAX);
    /// assert!(matches!(huge, Err(Error::AllocationFailed(_))));
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the value in slot `index`, or `None` if the slot is empty.
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        self.check(index)?;
        Ok(self.slots[index].as_ref())
    }

    /// Stores `value` in slot `index`, returning whatever the slot held before.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>> {
        self.check(index)?;
        Ok(self.slots[index].replace(value))
    }

    /// Empties slot `index`, returning its previous contents.
    pub fn take(&mut self, index: usize) -> Result<Option<T>> {
        self.check(index)?;
        Ok(self.slots[index].take())
    }

    /// Exchanges the contents of two slots.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check(a)?;
        self.check(b)?;
        self.slots.swap(a, b);
        Ok(())
    }

    /// Moves the first `count` values into the same slots of `dst`, leaving
    /// them empty here. Stops early at the end of the shorter buffer.
    pub(crate) fn transfer_into(&mut self, dst: &mut Self, count: usize) {
        for (from, to) in self.slots.iter_mut().zip(dst.slots.iter_mut()).take(count) {
            *to = from.take();
        }
    }

    pub(crate) fn as_slots(&self) -> &[Option<T>] {
        &self.slots
    }

    #[inline]
    fn check(&self, index: usize) -> Result<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.slots.len(),
            })
        }
    }
}

/// Direct slot access.
///
/// # Panics
///
/// Panics if `index >= capacity`.
impl<T> Index<usize> for FixedBuffer<T> {
    type Output = Option<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for FixedBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slots[index]
    }
}
