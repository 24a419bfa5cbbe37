//! Request Coalescing Module
//!
//! Tracks in-flight generations so that concurrent requests for the same
//! key produce exactly one upstream call. The first requester for a key
//! becomes the leader and runs the generation; everyone else follows the
//! existing slot and waits on its completion signal.

use std::collections::HashMap;

use tokio::sync::{watch, Mutex};

// == In-Flight Registry ==
/// Registry of in-flight generations, at most one slot per key.
///
/// The completion signal is a watch channel over a resolved flag: it
/// broadcasts to any number of waiters, and a waiter that subscribes
/// after resolution observes the flag immediately, so there are no lost
/// wakeups in either order.
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    /// Key to completion-signal receiver for every running generation
    slots: Mutex<HashMap<String, watch::Receiver<bool>>>,
}

/// Role handed to a requester that missed the cache.
#[derive(Debug)]
pub(crate) enum Flight {
    /// This requester runs the generation and must call [`InFlight::complete`]
    Leader(FlightGuard),
    /// Another requester is already generating; wait on the signal
    Follower(watch::Receiver<bool>),
}

/// Held by the leader for the duration of its generation attempt.
#[derive(Debug)]
pub(crate) struct FlightGuard {
    key: String,
    tx: watch::Sender<bool>,
}

impl InFlight {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // == Acquire ==
    /// Joins the in-flight generation for `key`, or starts one.
    ///
    /// The lookup and the slot insertion happen in a single critical
    /// section, so two concurrent requesters can never both become the
    /// leader for the same key.
    pub(crate) async fn acquire(&self, key: &str) -> Flight {
        let mut slots = self.slots.lock().await;

        if let Some(rx) = slots.get(key) {
            // A dead sender means the leader vanished without completing;
            // take over the slot instead of waiting forever.
            if rx.has_changed().is_ok() {
                return Flight::Follower(rx.clone());
            }
        }

        let (tx, rx) = watch::channel(false);
        slots.insert(key.to_owned(), rx);
        Flight::Leader(FlightGuard {
            key: key.to_owned(),
            tx,
        })
    }

    // == Complete ==
    /// Tears down the leader's slot and wakes every follower.
    ///
    /// Removal happens under the same lock `acquire` uses, and the caller
    /// must have committed any cache write beforehand: a follower that
    /// wakes and re-reads the cache is guaranteed to observe the entry.
    pub(crate) async fn complete(&self, guard: FlightGuard) {
        self.slots.lock().await.remove(&guard.key);
        let _ = guard.tx.send(true);
    }

    // == Length ==
    /// Number of generations currently in flight.
    pub(crate) async fn len(&self) -> usize {
        self.slots.lock().await.len()
    }
}

/// Blocks until the slot's generation resolves, however it ends.
///
/// A dropped sender counts as resolution; the caller re-reads the cache
/// to learn the outcome either way.
pub(crate) async fn wait(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|resolved| *resolved).await;
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn leader(flight: Flight) -> FlightGuard {
        match flight {
            Flight::Leader(guard) => guard,
            Flight::Follower(_) => panic!("expected leader role"),
        }
    }

    fn follower(flight: Flight) -> watch::Receiver<bool> {
        match flight {
            Flight::Follower(rx) => rx,
            Flight::Leader(_) => panic!("expected follower role"),
        }
    }

    #[tokio::test]
    async fn test_first_requester_leads() {
        let inflight = InFlight::new();

        let flight = inflight.acquire("key").await;
        assert!(matches!(flight, Flight::Leader(_)));
        assert_eq!(inflight.len().await, 1);
    }

    #[tokio::test]
    async fn test_second_requester_follows() {
        let inflight = InFlight::new();

        let _guard = leader(inflight.acquire("key").await);
        let flight = inflight.acquire("key").await;

        assert!(matches!(flight, Flight::Follower(_)));
        assert_eq!(inflight.len().await, 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_lead_independently() {
        let inflight = InFlight::new();

        let _a = leader(inflight.acquire("a").await);
        let flight = inflight.acquire("b").await;

        assert!(matches!(flight, Flight::Leader(_)));
        assert_eq!(inflight.len().await, 2);
    }

    #[tokio::test]
    async fn test_complete_wakes_waiting_follower() {
        let inflight = InFlight::new();

        let guard = leader(inflight.acquire("key").await);
        let rx = follower(inflight.acquire("key").await);

        let waiter = tokio::spawn(wait(rx));
        inflight.complete(guard).await;

        waiter.await.expect("waiter should finish after complete");
        assert_eq!(inflight.len().await, 0);
    }

    #[tokio::test]
    async fn test_wait_after_complete_returns_immediately() {
        let inflight = InFlight::new();

        let guard = leader(inflight.acquire("key").await);
        let rx = follower(inflight.acquire("key").await);

        inflight.complete(guard).await;

        // Subscribing to the outcome after the signal fired still resolves.
        wait(rx).await;
    }

    #[tokio::test]
    async fn test_key_is_free_after_complete() {
        let inflight = InFlight::new();

        let guard = leader(inflight.acquire("key").await);
        inflight.complete(guard).await;

        let flight = inflight.acquire("key").await;
        assert!(matches!(flight, Flight::Leader(_)));
    }

    #[tokio::test]
    async fn test_abandoned_slot_is_taken_over() {
        let inflight = InFlight::new();

        let guard = leader(inflight.acquire("key").await);
        drop(guard);

        // The sender is gone without complete(); the next requester must
        // lead rather than wait on a slot nobody will resolve.
        let flight = inflight.acquire("key").await;
        assert!(matches!(flight, Flight::Leader(_)));
    }

    #[tokio::test]
    async fn test_many_followers_all_wake() {
        let inflight = InFlight::new();

        let guard = leader(inflight.acquire("key").await);

        let mut waiters = Vec::new();
        for _ in 0..32 {
            let rx = follower(inflight.acquire("key").await);
            waiters.push(tokio::spawn(wait(rx)));
        }

        inflight.complete(guard).await;

        for waiter in waiters {
            waiter.await.expect("every follower should wake");
        }
    }
}
