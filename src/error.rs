use alloc::collections::TryReserveError;
use thiserror::Error;

/// Failures reported by [`FixedBuffer`](crate::FixedBuffer),
/// [`DynamicArray`](crate::DynamicArray) and friends.
///
/// Every fallible operation validates its arguments before touching any
/// state, so an `Err` always leaves the receiver exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index fell outside the valid range for the operation.
    ///
    /// For reads, writes and removals the valid range is `0..len`; for
    /// insertion it is `0..=len`.
    #[error("index {index} is out of range (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A `(start, count)` pair did not describe a range inside the array.
    #[error("invalid range: start {start}, count {count} (len: {len})")]
    InvalidRange {
        start: usize,
        count: usize,
        len: usize,
    },

    /// The allocator could not provide storage for a new buffer.
    #[error("buffer allocation failed: {0}")]
    AllocationFailed(#[from] TryReserveError),
}

pub type Result<T> = core::result::Result<T, Error>;
