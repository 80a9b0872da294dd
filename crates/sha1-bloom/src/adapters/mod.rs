//! Adapters Layer (Driven Adapters)
//!
//! Concrete `BitStore` backends:
//!
//! - `LockedBitStore` - byte-granular bit vector behind a reader/writer lock
//! - `AtomicBitStore` - lock-free atomic 64-bit words
//! - `AnyBitStore` - runtime choice between the two, used by config-driven
//!   construction

pub mod atomic;
pub mod locked;

pub use atomic::{AtomicBitStore, WORD_BOUNDARY};
pub use locked::{LockedBitStore, BYTE_BOUNDARY};

use crate::domain::config::StoreBackend;
use crate::error::FilterError;
use crate::ports::BitStore;

/// Round `requested` up to a multiple of `unit`, never below one unit
pub(crate) fn round_up(requested: usize, unit: usize) -> usize {
    requested.max(1).div_ceil(unit) * unit
}

/// Bit store selected at runtime
#[derive(Debug)]
pub enum AnyBitStore {
    Locked(LockedBitStore),
    Atomic(AtomicBitStore),
}

impl AnyBitStore {
    /// Allocate the configured backend with at least `requested_bits` bits
    pub fn new(backend: StoreBackend, requested_bits: usize) -> Self {
        match backend {
            StoreBackend::Locked => Self::Locked(LockedBitStore::new(requested_bits)),
            StoreBackend::Atomic => Self::Atomic(AtomicBitStore::new(requested_bits)),
        }
    }

    pub fn backend(&self) -> StoreBackend {
        match self {
            Self::Locked(_) => StoreBackend::Locked,
            Self::Atomic(_) => StoreBackend::Atomic,
        }
    }
}

impl BitStore for AnyBitStore {
    fn size(&self) -> usize {
        match self {
            Self::Locked(store) => store.size(),
            Self::Atomic(store) => store.size(),
        }
    }

    fn get(&self, index: usize) -> Result<bool, FilterError> {
        match self {
            Self::Locked(store) => store.get(index),
            Self::Atomic(store) => store.get(index),
        }
    }

    fn set(&self, index: usize) -> Result<(), FilterError> {
        match self {
            Self::Locked(store) => store.set(index),
            Self::Atomic(store) => store.set(index),
        }
    }

    fn count_ones(&self) -> usize {
        match self {
            Self::Locked(store) => store.count_ones(),
            Self::Atomic(store) => store.count_ones(),
        }
    }
}

impl From<LockedBitStore> for AnyBitStore {
    fn from(store: LockedBitStore) -> Self {
        Self::Locked(store)
    }
}

impl From<AtomicBitStore> for AnyBitStore {
    fn from(store: AtomicBitStore) -> Self {
        Self::Atomic(store)
    }
}
