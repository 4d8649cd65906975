//! An unordered collection with duplicates, backed by a [`DynamicArray`].

use alloc::vec;
use core::{fmt, iter::FusedIterator};

use crate::array::DynamicArray;

/// A multiset: duplicates are kept, order is not significant.
///
/// Members are stored in insertion order, but two bags compare equal when
/// they hold the same values with the same multiplicities, whatever the
/// order.
///
/// # Examples
///
/// ```
/// use dynbag::Bag;
///
/// let mut bag = Bag::from([1, 2, 2, 3]);
/// assert_eq!(bag.count(&2), 2);
///
/// assert!(bag.remove(&2));
/// assert!(!bag.remove(&7));
/// assert_eq!(bag.count(&2), 1);
///
/// assert_eq!(bag, Bag::from([3, 2, 1]));
/// ```
#[derive(Clone)]
pub struct Bag<T> {
    items: DynamicArray<T>,
}

impl<T: fmt::Debug> fmt::Debug for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bag").field("items", &self.items).finish()
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bag<T> {
    /// Constructs a new, empty bag.
    pub fn new() -> Self {
        Self {
            items: DynamicArray::new(),
        }
    }

    /// Returns the number of members, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the bag has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a member. Duplicates are always accepted.
    pub fn add(&mut self, value: T) {
        self.items.append(value);
    }

    /// Removes every member, dropping the old storage.
    pub fn clear(&mut self) {
        self.items = DynamicArray::new();
    }

    /// Returns a cursor over the members in storage order.
    ///
    /// The cursor can be rewound with [`Iter::restart`]. Several cursors over
    /// the same bag advance independently.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynbag::Bag;
    ///
    /// let bag = Bag::from(["x", "y"]);
    /// let mut iter = bag.iter();
    /// assert_eq!(iter.next(), Some(&"x"));
    /// assert_eq!(iter.next(), Some(&"y"));
    /// assert_eq!(iter.next(), None);
    ///
    /// iter.restart();
    /// assert_eq!(iter.next(), Some(&"x"));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            items: &self.items,
            index: 0,
        }
    }
}

impl<T: PartialEq> Bag<T> {
    /// Removes one member equal to `value`.
    ///
    /// Returns `false`, leaving the bag untouched, if there is no such member.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => self.items.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Returns how many members are equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.items.iter().filter(|&item| item == value).count()
    }

    /// Multiset equality: `true` if both bags hold the same values with the
    /// same multiplicities.
    ///
    /// Each member of `self` claims the first unclaimed equal member of
    /// `other`, which costs `O(n²)` comparisons in the worst case. Only
    /// `PartialEq` is required, so no hashing or sorting shortcut is taken.
    pub fn equal(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut claimed = vec![false; other.len()];
        for value in &self.items {
            let slot = other
                .items
                .iter()
                .zip(claimed.iter_mut())
                .find(|(candidate, taken)| !**taken && *candidate == value);
            match slot {
                Some((_, taken)) => *taken = true,
                None => return false,
            }
        }
        true
    }
}

impl<T: PartialEq> PartialEq for Bag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Eq> Eq for Bag<T> {}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for Bag<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A restartable cursor over a [`Bag`], created by [`Bag::iter`].
pub struct Iter<'a, T> {
    items: &'a DynamicArray<T>,
    /// Position of the next member to yield
    index: usize,
}

impl<T> Iter<'_, T> {
    /// Rewinds the cursor to the first member.
    pub fn restart(&mut self) {
        self.index = 0;
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            index: self.index,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.items.get(self.index).ok()?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
