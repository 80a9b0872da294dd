//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - INVARIANT-1: Every bit index is `word % size()`, so no access is out of bounds
//! - INVARIANT-2: No false negatives - once `write(v)` returns Ok, `read(v)` reports
//!   possible membership
//! - INVARIANT-3: Bits only ever go from false to true
//!
//! The filter takes no locks of its own. A write sets its five positions one
//! at a time through the bit store, so a concurrent reader may observe a
//! value whose write is still in flight with only some positions set.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::config::{FilterConfig, StoreBackend};
use super::hash_decomposer::{decompose_hash, HashResult, HASH_COUNT};
use super::parameters::{calculate_fpr, fpr_from_fill};
use crate::adapters::{AnyBitStore, AtomicBitStore, LockedBitStore};
use crate::error::FilterError;
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::ports::BitStore;

/// Bit values observed at a value's five positions, in hash-word order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterVals([bool; HASH_COUNT]);

impl FilterVals {
    /// True when every position was set
    pub fn all(&self) -> bool {
        self.0.iter().all(|&bit| bit)
    }

    pub fn as_array(&self) -> &[bool; HASH_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for FilterVals {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}

impl From<FilterVals> for [bool; HASH_COUNT] {
    fn from(vals: FilterVals) -> Self {
        vals.0
    }
}

/// Bloom filter for probabilistic membership testing
///
/// Every value maps to five bit positions derived from its SHA-1 digest.
/// `read` may report a value that was never written (false positive) but
/// never misses a value whose `write` completed.
///
/// The filter is `Sync` whenever its store is, and all operations take
/// `&self`, so one instance can be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct BloomFilter<S = LockedBitStore> {
    /// Bit storage; capacity is fixed for the filter's lifetime
    store: S,
    /// Operation counters
    metrics: Metrics,
}

impl BloomFilter<LockedBitStore> {
    /// Create a filter over a locked bit vector of at least `requested_bits`
    /// bits, rounded up to a byte boundary
    ///
    /// Fewer than five bits is accepted but makes every value alias into the
    /// same few positions, so the filter saturates almost immediately.
    pub fn new(requested_bits: u32) -> Self {
        warn_if_degenerate(requested_bits);
        let store = LockedBitStore::new(requested_bits as usize);
        debug!(
            requested_bits,
            capacity = store.size(),
            backend = ?StoreBackend::Locked,
            "Created bloom filter"
        );
        Self::from_store(store)
    }
}

impl BloomFilter<AtomicBitStore> {
    /// Create a filter over lock-free atomic words of at least
    /// `requested_bits` bits, rounded up to a 64-bit boundary
    pub fn new_atomic(requested_bits: u32) -> Self {
        warn_if_degenerate(requested_bits);
        let store = AtomicBitStore::new(requested_bits as usize);
        debug!(
            requested_bits,
            capacity = store.size(),
            backend = ?StoreBackend::Atomic,
            "Created bloom filter"
        );
        Self::from_store(store)
    }
}

impl BloomFilter<AnyBitStore> {
    /// Create a filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        config.validate()?;
        let store = AnyBitStore::new(config.backend, config.requested_bits as usize);
        debug!(
            requested_bits = config.requested_bits,
            capacity = store.size(),
            backend = ?config.backend,
            "Created bloom filter from config"
        );
        Ok(Self::from_store(store))
    }
}

impl<S: BitStore> BloomFilter<S> {
    /// Wrap an existing bit store
    ///
    /// Rejects a store that reports zero capacity, since no index could be
    /// reduced into it.
    pub fn with_store(store: S) -> Result<Self, FilterError> {
        if store.size() == 0 {
            return Err(FilterError::InvalidParameters(
                "bit store capacity cannot be 0".to_string(),
            ));
        }
        debug!(capacity = store.size(), "Created bloom filter over custom store");
        Ok(Self::from_store(store))
    }

    fn from_store(store: S) -> Self {
        Self {
            store,
            metrics: Metrics::new(),
        }
    }

    /// Actual bit capacity (at least the requested size)
    pub fn size(&self) -> usize {
        self.store.size()
    }

    /// The underlying bit store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Insert a value
    ///
    /// Returns the collision signal: true only if all five positions were
    /// already set before this write touched them. It does not prove the
    /// value was written before, since other values may have set those bits.
    pub fn write(&self, value: impl AsRef<[u8]>) -> Result<bool, FilterError> {
        let hash = decompose_hash(value)?;
        self.write_hash(&hash)
    }

    /// Insert a precomputed hash
    ///
    /// Each position is read, folded into the collision signal, then set.
    /// If the store fails part-way the positions already set stay set.
    pub fn write_hash(&self, hash: &HashResult) -> Result<bool, FilterError> {
        let positions = hash.positions(self.store.size())?;
        let mut collision = true;

        for (done, &index) in positions.iter().enumerate() {
            let existing = self
                .store
                .get(index)
                .map_err(|err| abort_write(done, err))?;
            collision &= existing;
            self.store.set(index).map_err(|err| abort_write(done, err))?;
        }

        self.metrics.record_write(collision);
        trace!(?positions, collision, "Wrote value");
        Ok(collision)
    }

    /// Look up a value
    ///
    /// Returns the bit at each of the value's positions and whether all of
    /// them are set. `false` means definitely absent.
    pub fn read(&self, value: impl AsRef<[u8]>) -> Result<(FilterVals, bool), FilterError> {
        let hash = decompose_hash(value)?;
        self.read_hash(&hash)
    }

    /// Look up a precomputed hash
    pub fn read_hash(&self, hash: &HashResult) -> Result<(FilterVals, bool), FilterError> {
        let positions = hash.positions(self.store.size())?;
        let mut bits = [false; HASH_COUNT];

        for (bit, &index) in bits.iter_mut().zip(positions.iter()) {
            *bit = self.store.get(index)?;
        }

        let vals = FilterVals(bits);
        let possibly_present = vals.all();
        self.metrics.record_read(possibly_present);
        trace!(?positions, possibly_present, "Read value");
        Ok((vals, possibly_present))
    }

    /// Test if a value might be in the filter
    pub fn contains(&self, value: impl AsRef<[u8]>) -> Result<bool, FilterError> {
        self.read(value).map(|(_, possibly_present)| possibly_present)
    }

    /// Number of bits set in the store
    pub fn bits_set(&self) -> usize {
        self.store.count_ones()
    }

    /// Fraction of bits set, between 0 and 1
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.size() as f64
    }

    /// False positive rate implied by the current fill: (bits_set / m)^k
    pub fn current_fpr(&self) -> f64 {
        fpr_from_fill(self.bits_set(), self.size())
    }

    /// Theoretical false positive rate after `elements` distinct insertions
    pub fn estimated_fpr(&self, elements: usize) -> f64 {
        calculate_fpr(self.size(), elements)
    }

    /// Counters for completed writes and reads
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Zero the operation counters; the stored bits are untouched
    pub fn reset_metrics(&self) {
        self.metrics.reset();
    }
}

fn warn_if_degenerate(requested_bits: u32) {
    if (requested_bits as usize) < HASH_COUNT {
        warn!(
            requested_bits,
            hash_count = HASH_COUNT,
            "Filter has fewer requested bits than positions per value"
        );
    }
}

fn abort_write(positions_set: usize, err: FilterError) -> FilterError {
    warn!(positions_set, error = %err, "Write aborted; positions already set remain set");
    err
}
