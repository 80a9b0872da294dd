//! Error types for the SHA-1 Bloom filter

use thiserror::Error;

/// Errors that can occur while hashing, writing or reading a filter
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The 160-bit digest could not be split into five 32-bit words.
    #[error("Digest failure: {0}")]
    DigestFailure(String),

    /// A bit store rejected an index at or beyond its capacity.
    #[error("Index out of range: {index} >= {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// A configuration or store that cannot back a filter.
    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),
}

impl FilterError {
    /// Build an `IndexOutOfRange` error if `index` is not addressable in `size` bits.
    pub(crate) fn check_index(index: usize, size: usize) -> Result<(), FilterError> {
        if index >= size {
            return Err(FilterError::IndexOutOfRange { index, size });
        }
        Ok(())
    }
}
