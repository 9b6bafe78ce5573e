//! Configuration types for Depot components.

/// Default number of processing units allowed to run at once.
pub const DEFAULT_WORKER_POOL_SIZE: usize = 10;

/// Batch processing configuration.
///
/// `worker_pool_size` bounds how many items are processed concurrently
/// across all batch calls in the process, not per call.
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    /// Number of concurrent processing units.
    pub worker_pool_size: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            worker_pool_size: DEFAULT_WORKER_POOL_SIZE,
        }
    }
}

impl ProcessingConfig {
    /// Creates a new ProcessingConfig with a custom pool size (minimum 1).
    pub fn with_worker_pool_size(mut self, size: usize) -> Self {
        self.worker_pool_size = size.max(1);
        self
    }
}
