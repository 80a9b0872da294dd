//! Bloom filter sizing for a fixed hash count
//!
//! The number of positions per value is fixed at k = 5, so only the bit
//! count is tunable.
//!
//! Formulas:
//! - FPR = (1 - e^(-kn/m))^k
//! - m = -k*n / ln(1 - fpr^(1/k))   -- minimum bits for a target FPR

use super::hash_decomposer::HASH_COUNT;

/// Calculate the theoretical false positive rate after `n` insertions
/// into `m` bits
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let k = HASH_COUNT as f64;
    let exponent = -k * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(HASH_COUNT as i32)
}

/// Calculate the minimum number of bits that keeps `n` insertions at or
/// below `target_fpr`
///
/// Saturates at `u32::MAX` since filters are constructed from a 32-bit
/// request. Returns `HASH_COUNT` for `n == 0` or an FPR of 1 or more.
pub fn minimum_bits(n: usize, target_fpr: f64) -> u32 {
    if n == 0 || target_fpr >= 1.0 {
        return HASH_COUNT as u32;
    }
    if target_fpr <= 0.0 {
        return u32::MAX;
    }

    let k = HASH_COUNT as f64;
    let per_position = target_fpr.powf(1.0 / k);
    let m = (-k * n as f64 / (1.0 - per_position).ln()).ceil();

    if m >= u32::MAX as f64 {
        u32::MAX
    } else {
        (m as u32).max(HASH_COUNT as u32)
    }
}

/// Estimate the false positive rate from how full the store is
///
/// Formula: FPR ≈ (bits_set / m)^k
pub fn fpr_from_fill(bits_set: usize, m: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    (bits_set as f64 / m as f64).powi(HASH_COUNT as i32)
}
