//! Lock-free bit store
//!
//! Bits are packed into `AtomicU64` words:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! `set` is a single `fetch_or` with `Release`, `get` an `Acquire` load, so
//! a reader that observes a bit also observes everything written before it.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::FilterError;
use crate::ports::BitStore;

/// Bits per storage unit (one 64-bit word)
pub const WORD_BOUNDARY: usize = 64;

/// Bit store backed by atomic 64-bit words
#[derive(Debug)]
pub struct AtomicBitStore {
    blocks: Box<[AtomicU64]>,
}

impl AtomicBitStore {
    /// Allocate at least `requested_bits` bits, rounded up to a whole word.
    ///
    /// A request of 0 still allocates one word.
    pub fn new(requested_bits: usize) -> Self {
        let len = super::round_up(requested_bits, WORD_BOUNDARY);
        let blocks = (0..len / WORD_BOUNDARY)
            .map(|_| AtomicU64::new(0))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { blocks }
    }

    #[inline]
    fn locate(index: usize) -> (usize, u64) {
        (index / WORD_BOUNDARY, 1u64 << (index % WORD_BOUNDARY))
    }
}

impl BitStore for AtomicBitStore {
    fn size(&self) -> usize {
        self.blocks.len() * WORD_BOUNDARY
    }

    fn get(&self, index: usize) -> Result<bool, FilterError> {
        FilterError::check_index(index, self.size())?;
        let (block, mask) = Self::locate(index);
        Ok(self.blocks[block].load(Ordering::Acquire) & mask != 0)
    }

    fn set(&self, index: usize) -> Result<(), FilterError> {
        FilterError::check_index(index, self.size())?;
        let (block, mask) = Self::locate(index);
        self.blocks[block].fetch_or(mask, Ordering::Release);
        Ok(())
    }

    fn count_ones(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| block.load(Ordering::Relaxed).count_ones() as usize)
            .sum()
    }
}
