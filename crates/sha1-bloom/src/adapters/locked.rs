//! Reader/writer-locked bit store
//!
//! A `bitvec` byte array behind a `parking_lot::RwLock`: shared lock for
//! reads, exclusive lock for every mutation.

use bitvec::prelude::*;
use parking_lot::RwLock;

use crate::error::FilterError;
use crate::ports::BitStore;

/// Bits per storage unit (one byte)
pub const BYTE_BOUNDARY: usize = 8;

/// Bit store guarded by a single reader/writer lock
#[derive(Debug)]
pub struct LockedBitStore {
    bits: RwLock<BitVec<u8, Lsb0>>,
    /// Cached length so `size()` never takes the lock
    len: usize,
}

impl LockedBitStore {
    /// Allocate at least `requested_bits` bits, rounded up to a whole byte.
    ///
    /// A request of 0 still allocates one byte.
    pub fn new(requested_bits: usize) -> Self {
        let len = super::round_up(requested_bits, BYTE_BOUNDARY);
        Self {
            bits: RwLock::new(bitvec![u8, Lsb0; 0; len]),
            len,
        }
    }
}

impl BitStore for LockedBitStore {
    fn size(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<bool, FilterError> {
        FilterError::check_index(index, self.len)?;
        Ok(self.bits.read()[index])
    }

    fn set(&self, index: usize) -> Result<(), FilterError> {
        FilterError::check_index(index, self.len)?;
        self.bits.write().set(index, true);
        Ok(())
    }

    fn count_ones(&self) -> usize {
        self.bits.read().count_ones()
    }
}
