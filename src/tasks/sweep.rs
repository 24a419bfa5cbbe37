//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries. The
//! resolve path never depends on it; it only bounds the memory held by
//! stale entries between overwrites.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::resolve::Resolver;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps.
///
/// # Arguments
/// * `resolver` - Shared resolver whose cache is swept
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task(resolver: Arc<Resolver>, sweep_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = resolver.sweep_expired().await;

            if removed > 0 {
                info!("Expiry sweep: removed {} stale entries", removed);
            } else {
                debug!("Expiry sweep: no stale entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let resolver = Arc::new(Resolver::new(Duration::from_millis(50)));

        resolver
            .resolve("expire_soon", |_| async { Ok("value".to_string()) })
            .await
            .unwrap();
        assert_eq!(resolver.entry_count().await, 1);

        // Spawn sweep task with 1 second interval
        let handle = spawn_sweep_task(Arc::clone(&resolver), 1);

        // Wait for the entry to expire and the sweep to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            resolver.entry_count().await,
            0,
            "Expired entry should have been swept"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_valid_entries() {
        let resolver = Arc::new(Resolver::new(Duration::from_secs(3600)));

        resolver
            .resolve("long_lived", |_| async { Ok("value".to_string()) })
            .await
            .unwrap();

        let handle = spawn_sweep_task(Arc::clone(&resolver), 1);

        // Wait for a sweep to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            resolver.entry_count().await,
            1,
            "Valid entry should not be removed"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let resolver = Arc::new(Resolver::new(Duration::from_secs(300)));

        let handle = spawn_sweep_task(resolver, 1);

        // Abort immediately
        handle.abort();

        // Wait a bit and verify task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
