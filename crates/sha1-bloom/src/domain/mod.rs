//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Hash decomposition (one SHA-1 digest into five words)
//! - Core Bloom filter write/read protocol
//! - Sizing parameters for k = 5
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No locking; synchronization belongs to the bit store

pub mod bloom_filter;
pub mod config;
pub mod hash_decomposer;
pub mod parameters;

pub use bloom_filter::{BloomFilter, FilterVals};
pub use config::{FilterConfig, FilterConfigBuilder, StoreBackend};
pub use hash_decomposer::{decompose_hash, HashResult, HASH_COUNT};
pub use parameters::{calculate_fpr, fpr_from_fill, minimum_bits};
