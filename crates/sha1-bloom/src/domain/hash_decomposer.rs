//! Hash decomposition for the Bloom filter
//!
//! A single SHA-1 digest (160 bits) is split into five consecutive
//! little-endian `u32` words. Each word becomes one bit position after
//! reduction modulo the filter capacity, so no second hash function or
//! double-hashing scheme is needed.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::error::FilterError;

/// Number of bit positions touched per value (k)
pub const HASH_COUNT: usize = 5;

/// Width of one decomposed word in bytes
const WORD_BYTES: usize = 4;

/// Length of a SHA-1 digest in bytes
const DIGEST_BYTES: usize = HASH_COUNT * WORD_BYTES;

/// Five 32-bit words taken from one SHA-1 digest, in digest order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashResult([u32; HASH_COUNT]);

impl HashResult {
    /// Wrap precomputed words.
    pub const fn from_words(words: [u32; HASH_COUNT]) -> Self {
        Self(words)
    }

    pub fn words(&self) -> &[u32; HASH_COUNT] {
        &self.0
    }

    /// Reduce every word modulo `capacity`, yielding in-bounds bit indices.
    ///
    /// Returns an error for a zero capacity instead of dividing by zero.
    pub fn positions(&self, capacity: usize) -> Result<[usize; HASH_COUNT], FilterError> {
        if capacity == 0 {
            return Err(FilterError::InvalidParameters(
                "capacity cannot be 0".to_string(),
            ));
        }
        Ok(self.0.map(|word| reduce(word, capacity)))
    }
}

impl Index<usize> for HashResult {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

impl From<[u32; HASH_COUNT]> for HashResult {
    fn from(words: [u32; HASH_COUNT]) -> Self {
        Self(words)
    }
}

/// Reduce one word into `0..capacity`. `capacity` must be non-zero.
#[inline]
pub(crate) fn reduce(word: u32, capacity: usize) -> usize {
    // u64 keeps the arithmetic exact when capacity exceeds u32::MAX
    (u64::from(word) % capacity as u64) as usize
}

/// Decompose a value into five little-endian words of its SHA-1 digest
///
/// Pure and deterministic: identical bytes always give identical words.
pub fn decompose_hash(value: impl AsRef<[u8]>) -> Result<HashResult, FilterError> {
    let digest = Sha1::digest(value.as_ref());
    if digest.len() != DIGEST_BYTES {
        return Err(FilterError::DigestFailure(format!(
            "expected {} digest bytes, got {}",
            DIGEST_BYTES,
            digest.len()
        )));
    }

    let mut words = [0u32; HASH_COUNT];
    for (word, chunk) in words.iter_mut().zip(digest.chunks_exact(WORD_BYTES)) {
        let bytes: [u8; WORD_BYTES] = chunk
            .try_into()
            .map_err(|_| FilterError::DigestFailure("truncated digest word".to_string()))?;
        *word = u32::from_le_bytes(bytes);
    }

    Ok(HashResult(words))
}
