//! Filter configuration and validation
//!
//! # Example
//!
//! ```
//! use sha1_bloom::{BloomFilter, FilterConfigBuilder, StoreBackend};
//!
//! let config = FilterConfigBuilder::new()
//!     .sized_for(10_000, 0.01)
//!     .backend(StoreBackend::Atomic)
//!     .build()
//!     .expect("Valid config");
//!
//! let filter = BloomFilter::from_config(&config).expect("Valid filter");
//! assert!(filter.size() >= config.requested_bits as usize);
//! ```

use serde::{Deserialize, Serialize};

use super::hash_decomposer::HASH_COUNT;
use super::parameters::minimum_bits;
use crate::error::FilterError;

/// Which bit store backs a configured filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Byte-granular bit vector behind a reader/writer lock
    #[default]
    Locked,
    /// Lock-free atomic 64-bit words
    Atomic,
}

impl StoreBackend {
    /// Every available backend
    pub const fn all() -> [StoreBackend; 2] {
        [StoreBackend::Locked, StoreBackend::Atomic]
    }
}

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum number of bits; the store rounds this up to its boundary
    pub requested_bits: u32,
    /// Bit store implementation
    pub backend: StoreBackend,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            requested_bits: 800_000, // ~100 KB
            backend: StoreBackend::Locked,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(requested_bits: u32, backend: StoreBackend) -> Result<Self, FilterError> {
        let config = Self {
            requested_bits,
            backend,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes that cannot hold even one value's positions
    pub fn validate(&self) -> Result<(), FilterError> {
        if (self.requested_bits as usize) < HASH_COUNT {
            return Err(FilterError::InvalidParameters(format!(
                "requested_bits must be at least {}, got {}",
                HASH_COUNT, self.requested_bits
            )));
        }
        Ok(())
    }

    /// Builder-style method to set the requested bit count
    pub fn with_requested_bits(mut self, bits: u32) -> Self {
        self.requested_bits = bits;
        self
    }

    /// Builder-style method to set the backend
    pub fn with_backend(mut self, backend: StoreBackend) -> Self {
        self.backend = backend;
        self
    }
}

/// Builder for FilterConfig with validation
///
/// ```
/// use sha1_bloom::FilterConfigBuilder;
///
/// let config = FilterConfigBuilder::new()
///     .requested_bits(1 << 20)
///     .build()
///     .unwrap();
/// assert_eq!(config.requested_bits, 1 << 20);
/// ```
#[derive(Default)]
pub struct FilterConfigBuilder {
    requested_bits: Option<u32>,
    backend: Option<StoreBackend>,
    target: Option<(usize, f64)>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested bit count directly
    pub fn requested_bits(mut self, bits: u32) -> Self {
        self.requested_bits = Some(bits);
        self
    }

    /// Set the bit store implementation
    pub fn backend(mut self, backend: StoreBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Size the filter so `expected_elements` insertions stay at or below
    /// `target_fpr`. Overrides `requested_bits`.
    pub fn sized_for(mut self, expected_elements: usize, target_fpr: f64) -> Self {
        self.target = Some((expected_elements, target_fpr));
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        if let Some((_, fpr)) = self.target {
            if !(fpr > 0.0 && fpr < 1.0) {
                return Err(FilterError::InvalidParameters(format!(
                    "target false positive rate must be in (0, 1), got {}",
                    fpr
                )));
            }
        }

        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> FilterConfig {
        let defaults = FilterConfig::default();

        let requested_bits = match self.target {
            Some((n, fpr)) => minimum_bits(n, fpr),
            None => self.requested_bits.unwrap_or(defaults.requested_bits),
        };

        FilterConfig {
            requested_bits,
            backend: self.backend.unwrap_or(defaults.backend),
        }
    }
}
