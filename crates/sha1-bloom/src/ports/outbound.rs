//! Outbound Ports (Driven Ports)
//!
//! The filter depends on a bit store it does not implement itself. Any
//! backend (locked bit vector, atomic words, memory map) can be plugged in
//! as long as it honours this contract.

use crate::error::FilterError;

/// Fixed-capacity, internally synchronized bit array (Driven Port)
///
/// CONTRACT:
/// - `size()` never changes after construction and is never 0
/// - `get`/`set` return `IndexOutOfRange` for `index >= size()`
/// - `set` is idempotent and bits never go back to false
/// - Reads may run concurrently with reads and writes; implementations do
///   their own locking because the filter does none
pub trait BitStore: Send + Sync {
    /// Total number of addressable bits
    fn size(&self) -> usize;

    /// Current value of the bit at `index`
    fn get(&self, index: usize) -> Result<bool, FilterError>;

    /// Set the bit at `index` to true
    fn set(&self, index: usize) -> Result<(), FilterError>;

    /// Number of bits currently set
    ///
    /// The provided implementation probes every index in `0..size()`;
    /// backends should override it with a word-level popcount. Those indices
    /// are always in range, so a store that still fails `get` on one has
    /// that bit counted as clear.
    fn count_ones(&self) -> usize {
        (0..self.size())
            .filter(|&index| self.get(index).unwrap_or(false))
            .count()
    }
}

impl<S: BitStore + ?Sized> BitStore for Box<S> {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn get(&self, index: usize) -> Result<bool, FilterError> {
        (**self).get(index)
    }

    fn set(&self, index: usize) -> Result<(), FilterError> {
        (**self).set(index)
    }

    fn count_ones(&self) -> usize {
        (**self).count_ones()
    }
}
