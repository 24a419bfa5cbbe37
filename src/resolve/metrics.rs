//! Resolver Metrics Module
//!
//! Tracks resolve-path counters: cache hits and misses, generations and
//! their failures, and coalesced waits. Counters are atomics so the read
//! path can record a hit without taking a write lock.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Resolver Metrics ==
/// Monotonic counters for the resolve path.
#[derive(Debug, Default)]
pub struct ResolverMetrics {
    /// Requests answered straight from the cache
    hits: AtomicU64,
    /// Requests that found no fresh cache entry
    misses: AtomicU64,
    /// Successful upstream generations
    generations: AtomicU64,
    /// Failed upstream generations
    generation_failures: AtomicU64,
    /// Requests that waited on another requester's generation
    coalesced_waits: AtomicU64,
}

impl ResolverMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_generation(&self) {
        self.generations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_generation_failure(&self) {
        self.generation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_coalesced_wait(&self) {
        self.coalesced_waits.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Captures the current counter values.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            generations: self.generations.load(Ordering::Relaxed),
            generation_failures: self.generation_failures.load(Ordering::Relaxed),
            coalesced_waits: self.coalesced_waits.load(Ordering::Relaxed),
        }
    }
}

// == Metrics Snapshot ==
/// Point-in-time view of the resolver counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub generations: u64,
    pub generation_failures: u64,
    pub coalesced_waits: u64,
}

impl MetricsSnapshot {
    /// Cache hit rate: hits / (hits + misses), or 0.0 before any request.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
