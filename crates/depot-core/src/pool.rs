//! Process-wide bound on concurrently running processing units.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::config::ProcessingConfig;

/// A fixed-size pool of worker slots shared by every batch call.
///
/// Cloning is cheap and every clone draws from the same permits, so the pool
/// is created once at startup and handed to each processor.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    /// Creates a pool with `size` slots (minimum 1).
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    pub fn from_config(config: &ProcessingConfig) -> Self {
        Self::new(config.worker_pool_size)
    }

    /// Total number of slots.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of slots currently free.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Waits for a free slot. The slot is released when the permit drops.
    ///
    /// Returns `None` only if the pool has been closed, which never happens
    /// for pools built through this type.
    pub async fn acquire(&self) -> Option<OwnedSemaphorePermit> {
        Arc::clone(&self.permits).acquire_owned().await.ok()
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::from_config(&ProcessingConfig::default())
    }
}
