//! # Concurrency
//!
//! One filter shared between threads. The filter itself takes no locks, so
//! these tests pin down what the bit stores guarantee:
//!
//! - Completed writes are never lost, whichever backend is used
//! - Readers racing writers never error
//! - A write in flight is visible position by position, not all at once

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    use sha1_bloom::{
        AtomicBitStore, BitStore, BloomFilter, FilterError, HashResult, LockedBitStore,
        MembershipFilter,
    };

    use crate::init_tracing;

    const THREADS: usize = 4;
    const ITEMS_PER_THREAD: usize = 2_000;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn item(thread: usize, index: usize) -> String {
        format!("thread-{}-item-{}", thread, index)
    }

    /// Parks the writer after a given number of `set` calls until released
    struct GatedStore {
        inner: LockedBitStore,
        sets: AtomicUsize,
        pause_after: usize,
        reached: Barrier,
        resume: Barrier,
    }

    impl GatedStore {
        fn new(bits: usize, pause_after: usize) -> Self {
            Self {
                inner: LockedBitStore::new(bits),
                sets: AtomicUsize::new(0),
                pause_after,
                reached: Barrier::new(2),
                resume: Barrier::new(2),
            }
        }
    }

    impl BitStore for GatedStore {
        fn size(&self) -> usize {
            self.inner.size()
        }

        fn get(&self, index: usize) -> Result<bool, FilterError> {
            self.inner.get(index)
        }

        fn set(&self, index: usize) -> Result<(), FilterError> {
            self.inner.set(index)?;
            if self.sets.fetch_add(1, Ordering::SeqCst) + 1 == self.pause_after {
                self.reached.wait();
                self.resume.wait();
            }
            Ok(())
        }

        fn count_ones(&self) -> usize {
            self.inner.count_ones()
        }
    }

    fn run_concurrent_writers(filter: Arc<dyn MembershipFilter>) {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || {
                    for i in 0..ITEMS_PER_THREAD {
                        filter.write(item(t, i).as_bytes()).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        for t in 0..THREADS {
            for i in 0..ITEMS_PER_THREAD {
                let (_, possibly_present) = filter.read(item(t, i).as_bytes()).unwrap();
                assert!(possibly_present, "False negative for {}", item(t, i));
            }
        }
    }

    // =============================================================================
    // TESTS
    // =============================================================================

    #[test]
    fn test_concurrent_writers_locked_store() {
        init_tracing();
        run_concurrent_writers(Arc::new(BloomFilter::new(200_000)));
    }

    #[test]
    fn test_concurrent_writers_atomic_store() {
        run_concurrent_writers(Arc::new(BloomFilter::new_atomic(200_000)));
    }

    #[test]
    fn test_readers_race_writers_without_errors() {
        let filter = Arc::new(BloomFilter::new_atomic(200_000));
        let done = Arc::new(AtomicUsize::new(0));

        thread::scope(|scope| {
            for t in 0..THREADS {
                let filter = Arc::clone(&filter);
                let done = Arc::clone(&done);
                scope.spawn(move || {
                    for i in 0..ITEMS_PER_THREAD {
                        filter.write(item(t, i)).unwrap();
                    }
                    done.fetch_add(1, Ordering::SeqCst);
                });
            }

            for t in 0..THREADS {
                let filter = Arc::clone(&filter);
                let done = Arc::clone(&done);
                scope.spawn(move || {
                    while done.load(Ordering::SeqCst) < THREADS {
                        for i in (0..ITEMS_PER_THREAD).step_by(97) {
                            // Result may be either; it must never be an error
                            filter.read(item(t, i)).unwrap();
                        }
                    }
                });
            }
        });

        assert_eq!(filter.metrics().writes, (THREADS * ITEMS_PER_THREAD) as u64);
    }

    #[test]
    fn test_in_flight_write_is_partially_visible() {
        init_tracing();
        let filter = Arc::new(BloomFilter::with_store(GatedStore::new(1024, 3)).unwrap());
        let hash = HashResult::from_words([10, 20, 30, 40, 50]);

        let writer = {
            let filter = Arc::clone(&filter);
            thread::spawn(move || filter.write_hash(&hash).unwrap())
        };

        // Writer is parked after its third set
        filter.store().reached.wait();
        let (vals, possibly_present) = filter.read_hash(&hash).unwrap();
        assert_eq!(vals.as_array(), &[true, true, true, false, false]);
        assert!(!possibly_present, "A reader may see an incomplete write");
        filter.store().resume.wait();

        let collision = writer.join().unwrap();
        assert!(!collision);
        assert!(filter.read_hash(&hash).unwrap().1, "Completed write reads as present");
    }

    #[test]
    fn test_atomic_store_shared_directly() {
        let store = Arc::new(AtomicBitStore::new(4096));
        thread::scope(|scope| {
            for t in 0..THREADS {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    for i in (t..4096).step_by(THREADS) {
                        store.set(i).unwrap();
                    }
                });
            }
        });
        assert_eq!(store.count_ones(), 4096);
    }
}
