//! Per-identity, per-day request quota.
//!
//! State lives in day-of-week buckets behind the [`CounterStore`]
//! abstraction: one live bucket for the current day, with the previous
//! day's bucket deleted on each call, giving a rolling window of at most
//! one live bucket plus the one being retired. The caller supplies the
//! current day, so the limiter itself is clock-free and fully testable
//! with injected day values.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Weekday;

use crate::config::DAILY_REQUEST_LIMIT;

/// Atomic counter storage keyed by (bucket, key).
///
/// The conditional increment keeps the compare-and-increment critical
/// section inside the store, so two concurrent callers for a key sitting
/// one below the limit can never both succeed.
pub trait CounterStore: Send + Sync {
    /// Atomically increments `key` within `bucket` if its current count is
    /// below `limit`. Returns `true` when the increment was applied.
    fn increment_below(&self, bucket: &str, key: &str, limit: u32) -> bool;

    /// Current count for `key` within `bucket` (0 when absent).
    fn count(&self, bucket: &str, key: &str) -> u32;

    /// Deletes an entire bucket and every count in it.
    fn delete_bucket(&self, bucket: &str);
}

/// In-memory [`CounterStore`] guarded by a mutex.
///
/// The default production backing; any atomic counter store (a database,
/// a cache server) can replace it by implementing the trait.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    buckets: Mutex<HashMap<String, HashMap<String, u32>>>,
}

impl MemoryCounterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, HashMap<String, u32>>> {
        // A poisoned mutex only means another thread panicked mid-update of
        // a counter; the map itself is still usable.
        self.buckets
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CounterStore for MemoryCounterStore {
    fn increment_below(&self, bucket: &str, key: &str, limit: u32) -> bool {
        let mut buckets = self.lock();
        let counts = buckets.entry(bucket.to_string()).or_default();
        let count = counts.entry(key.to_string()).or_insert(0);
        if *count < limit {
            *count += 1;
            true
        } else {
            false
        }
    }

    fn count(&self, bucket: &str, key: &str) -> u32 {
        let buckets = self.lock();
        buckets
            .get(bucket)
            .and_then(|counts| counts.get(key))
            .copied()
            .unwrap_or(0)
    }

    fn delete_bucket(&self, bucket: &str) {
        self.lock().remove(bucket);
    }
}

/// Gates pipeline entry to [`DAILY_REQUEST_LIMIT`] runs per identity per day.
pub struct RateLimiter {
    store: Arc<dyn CounterStore>,
    limit: u32,
}

impl RateLimiter {
    /// Builds a limiter over an injected store.
    pub fn new(store: Arc<dyn CounterStore>, limit: u32) -> Self {
        RateLimiter { store, limit }
    }

    /// Builds a limiter over a fresh in-memory store with the default limit.
    pub fn in_memory() -> Self {
        RateLimiter::new(Arc::new(MemoryCounterStore::new()), DAILY_REQUEST_LIMIT)
    }

    /// Records a request for `identity` on `day` if its quota allows it.
    ///
    /// Returns `true` and records one occurrence while the identity's count
    /// for the day is below the limit; returns `false` without recording
    /// anything once the quota is exhausted. Each call also retires the
    /// previous day's bucket, so yesterday's counts never linger past
    /// rollover.
    pub fn allow(&self, identity: &str, day: Weekday) -> bool {
        self.store.delete_bucket(&bucket_name(day.pred()));

        let allowed = self.store.increment_below(&bucket_name(day), identity, self.limit);
        if !allowed {
            log::info!(
                "identity {} exhausted its daily quota of {} requests",
                identity,
                self.limit
            );
        }
        allowed
    }
}

fn bucket_name(day: Weekday) -> String {
    // chrono renders Weekday as its three-letter name ("Mon", "Tue", ...).
    day.to_string()
}
