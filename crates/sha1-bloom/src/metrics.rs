//! Per-filter operation counters
//!
//! Lock-free counters updated on every write and read, so callers can see
//! how often writes hit fully occupied positions and how often reads
//! report possible membership.
//!
//! ```
//! use sha1_bloom::BloomFilter;
//!
//! let filter = BloomFilter::new(8_000);
//! filter.write("a").unwrap();
//! filter.write("a").unwrap();
//!
//! let snapshot = filter.metrics();
//! assert_eq!(snapshot.writes, 2);
//! assert_eq!(snapshot.collisions, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Metrics collector for filter operations
#[derive(Debug, Default)]
pub struct Metrics {
    /// Completed writes
    writes: AtomicU64,
    /// Completed writes whose positions were all already set
    collisions: AtomicU64,
    /// Completed reads
    reads: AtomicU64,
    /// Completed reads reporting possible membership
    positive_reads: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed write
    pub fn record_write(&self, collision: bool) {
        self.writes.fetch_add(1, Ordering::Relaxed);
        if collision {
            self.collisions.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a completed read
    pub fn record_read(&self, possibly_present: bool) {
        self.reads.fetch_add(1, Ordering::Relaxed);
        if possibly_present {
            self.positive_reads.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            writes: self.writes.load(Ordering::Relaxed),
            collisions: self.collisions.load(Ordering::Relaxed),
            reads: self.reads.load(Ordering::Relaxed),
            positive_reads: self.positive_reads.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.writes.store(0, Ordering::Relaxed);
        self.collisions.store(0, Ordering::Relaxed);
        self.reads.store(0, Ordering::Relaxed);
        self.positive_reads.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub writes: u64,
    pub collisions: u64,
    pub reads: u64,
    pub positive_reads: u64,
}

impl MetricsSnapshot {
    /// Fraction of writes that found every position already set
    pub fn collision_rate(&self) -> f64 {
        ratio(self.collisions, self.writes)
    }

    /// Fraction of reads reporting possible membership
    ///
    /// Includes true positives; it equals the false positive rate only
    /// when every queried value is known to be absent.
    pub fn observed_positive_rate(&self) -> f64 {
        ratio(self.positive_reads, self.reads)
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total > 0 {
        part as f64 / total as f64
    } else {
        0.0
    }
}
