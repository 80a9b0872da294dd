//! Inbound Ports (Driving Ports)
//!
//! The membership API callers program against, independent of which bit
//! store backs the filter.

use crate::domain::{decompose_hash, BloomFilter, FilterVals, HashResult};
use crate::error::FilterError;
use crate::ports::BitStore;

/// Primary membership filter API (Driving Port)
pub trait MembershipFilter: Send + Sync {
    /// Actual bit capacity
    fn size(&self) -> usize;

    /// Insert a precomputed hash, returning the collision signal
    fn write_hash(&self, hash: &HashResult) -> Result<bool, FilterError>;

    /// Look up a precomputed hash
    fn read_hash(&self, hash: &HashResult) -> Result<(FilterVals, bool), FilterError>;

    /// Insert a value, returning the collision signal
    fn write(&self, value: &[u8]) -> Result<bool, FilterError> {
        self.write_hash(&decompose_hash(value)?)
    }

    /// Look up a value
    fn read(&self, value: &[u8]) -> Result<(FilterVals, bool), FilterError> {
        self.read_hash(&decompose_hash(value)?)
    }
}

impl<S: BitStore> MembershipFilter for BloomFilter<S> {
    fn size(&self) -> usize {
        BloomFilter::size(self)
    }

    fn write_hash(&self, hash: &HashResult) -> Result<bool, FilterError> {
        BloomFilter::write_hash(self, hash)
    }

    fn read_hash(&self, hash: &HashResult) -> Result<(FilterVals, bool), FilterError> {
        BloomFilter::read_hash(self, hash)
    }
}
