//! Resolver Module
//!
//! Orchestrates the resolve path: cache lookup, request coalescing, and
//! generation commit. This is the only entry point callers use; the
//! generator is injected per call and is never invoked concurrently for
//! the same key.

use std::future::Future;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::error::{ResolveError, Result};

use super::coalesce::{self, Flight, InFlight};
use super::metrics::{MetricsSnapshot, ResolverMetrics};

// == Resolver ==
/// Request-coalescing, TTL-cached front for a slow generator.
///
/// Owns its cache and in-flight registry as an explicitly constructed
/// instance; share it across tasks behind an `Arc`. The cache lock and
/// the registry lock are each held only for map access, never across a
/// generator call or a follower's wait.
#[derive(Debug)]
pub struct Resolver {
    /// Answer storage, many concurrent readers
    cache: RwLock<CacheStore>,
    /// In-flight generation registry
    inflight: InFlight,
    /// How long a committed answer stays fresh
    ttl: Duration,
    /// Resolve-path counters
    metrics: ResolverMetrics,
}

impl Resolver {
    // == Constructor ==
    /// Creates a resolver whose committed answers live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: RwLock::new(CacheStore::new()),
            inflight: InFlight::new(),
            ttl,
            metrics: ResolverMetrics::new(),
        }
    }

    // == Resolve ==
    /// Returns the answer for `key`, generating it at most once across
    /// all concurrent callers.
    ///
    /// A fresh cache entry is returned immediately. Otherwise the caller
    /// either leads the generation or waits for the in-flight one:
    ///
    /// - The leader runs `generate`, commits a successful result to the
    ///   cache before releasing the slot, and receives the generator's
    ///   error verbatim on failure (nothing is cached then).
    /// - A follower wakes when the leader finishes and re-reads the
    ///   cache; a miss at that point means the generation failed, and the
    ///   follower gets [`ResolveError::CoalesceFailed`] since the signal
    ///   carries no error payload.
    ///
    /// Timeouts are the caller's concern: wrapping this future in a
    /// deadline and dropping it stops the wait but never cancels the
    /// leader's generation, which still populates the cache for future
    /// callers.
    pub async fn resolve<F, Fut>(&self, key: &str, generate: F) -> Result<String>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = anyhow::Result<String>>,
    {
        if let Some(value) = self.cache.read().await.get(key) {
            self.metrics.record_hit();
            debug!(key, "cache hit");
            return Ok(value);
        }
        self.metrics.record_miss();

        match self.inflight.acquire(key).await {
            Flight::Leader(guard) => {
                debug!(key, "leading generation");
                match generate(key.to_owned()).await {
                    Ok(value) => {
                        // Commit before releasing the slot: a follower that
                        // wakes and re-reads must observe this entry.
                        self.cache
                            .write()
                            .await
                            .set(key.to_owned(), value.clone(), self.ttl);
                        self.inflight.complete(guard).await;
                        self.metrics.record_generation();
                        Ok(value)
                    }
                    Err(err) => {
                        self.inflight.complete(guard).await;
                        self.metrics.record_generation_failure();
                        warn!(key, error = %err, "generation failed");
                        Err(ResolveError::Generation(err))
                    }
                }
            }
            Flight::Follower(rx) => {
                debug!(key, "joining in-flight generation");
                self.metrics.record_coalesced_wait();
                coalesce::wait(rx).await;
                match self.cache.read().await.get(key) {
                    Some(value) => Ok(value),
                    None => Err(ResolveError::CoalesceFailed),
                }
            }
        }
    }

    // == Sweep Expired ==
    /// Removes expired entries from the cache, returning the count.
    pub async fn sweep_expired(&self) -> usize {
        self.cache.write().await.sweep_expired()
    }

    // == Entry Count ==
    /// Number of entries currently occupying cache storage.
    pub async fn entry_count(&self) -> usize {
        self.cache.read().await.len()
    }

    // == Metrics ==
    /// Snapshot of the resolve-path counters.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
