//! Cache Statistics Module
//!
//! Tracks cache hits and misses. Counters are atomic because cache hits are
//! recorded without holding the backing store guard.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of cache performance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of reads served by a live entry
    pub hits: u64,
    /// Number of reads that found no entry or an expired one
    pub misses: u64,
    /// Current number of entries in the cache, expired ones included
    pub total_entries: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Counters ==
/// Monotonic hit/miss counters, reset only by an explicit clear.
#[derive(Debug, Default)]
pub struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StatsCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Builds a snapshot with the given entry count.
    pub fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_counters_new() {
        let stats = StatsCounters::new().snapshot(0);
        assert_eq!(stats, CacheStats::default());
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let counters = StatsCounters::new();
        counters.record_hit();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();
        assert_eq!(counters.snapshot(0).hit_rate(), 0.75);
    }

    #[test]
    fn test_reset() {
        let counters = StatsCounters::new();
        counters.record_hit();
        counters.record_miss();
        counters.reset();

        let stats = counters.snapshot(3);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.total_entries, 3);
    }

    #[test]
    fn test_concurrent_increments() {
        let counters = Arc::new(StatsCounters::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counters = Arc::clone(&counters);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        counters.record_hit();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counters.snapshot(0).hits, 8000);
    }
}
