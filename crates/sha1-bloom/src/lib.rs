//! # SHA-1 Bloom Filter
//!
//! Probabilistic set membership: a value is either definitely absent or
//! possibly present. Used as a cheap pre-filter in front of expensive exact
//! lookups.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O, no locking
//!   - `decompose_hash`: One SHA-1 digest split into five little-endian `u32` words
//!   - `BloomFilter`: Write (insert) and read (query) protocol over five positions
//!   - `FilterConfig` / `FilterConfigBuilder`: Validated configuration
//!   - `parameters`: Sizing and false positive estimates for k = 5
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipFilter`: Driving port (inbound API)
//!   - `BitStore`: Driven port, the fixed-capacity synchronized bit array
//!
//! - **Adapters Layer** (`adapters/`): Bit store backends
//!   - `LockedBitStore`: `bitvec` bytes behind a `parking_lot::RwLock`
//!   - `AtomicBitStore`: Lock-free `AtomicU64` words
//!   - `AnyBitStore`: Runtime selection for config-driven filters
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: Every index is reduced modulo the store size before use
//! - **INVARIANT-2**: No false negatives - once `write` returns, `read` reports
//!   possible membership
//! - **INVARIANT-3**: Bits only go from false to true; there is no delete or clear
//!
//! ## Concurrency
//!
//! All operations take `&self`. The filter adds no locking of its own, so a
//! write's five bit sets are not atomic as a group: a reader racing an
//! in-flight write may see only some of its positions set.
//!
//! ## Usage Example
//!
//! ```
//! use sha1_bloom::{decompose_hash, BloomFilter};
//!
//! let filter = BloomFilter::new(800_000);
//! assert!(filter.size() >= 800_000);
//!
//! let collision = filter.write("hello").unwrap();
//! assert!(!collision);
//!
//! let (bits, possibly_present) = filter.read("hello").unwrap();
//! assert!(possibly_present);
//! assert!(bits.all());
//!
//! // Hash once, reuse for a write + read pair
//! let hash = decompose_hash("world").unwrap();
//! filter.write_hash(&hash).unwrap();
//! assert!(filter.read_hash(&hash).unwrap().1);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;

// Re-exports for convenience
pub use adapters::{AnyBitStore, AtomicBitStore, LockedBitStore};
pub use domain::{
    decompose_hash, BloomFilter, FilterConfig, FilterConfigBuilder, FilterVals, HashResult,
    StoreBackend, HASH_COUNT,
};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsSnapshot};
pub use ports::{BitStore, MembershipFilter};
