//! Cache Entry Module
//!
//! Defines the structure for individual cached answers with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached answer with its absolute expiry instant.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored answer payload
    pub value: String,
    /// Instant past which the entry is treated as absent
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `value` - The answer to store
    /// * `ttl` - How long the entry stays usable
    pub fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiry instant, so a zero TTL is
    /// expired immediately.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining TTL, saturating at zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
