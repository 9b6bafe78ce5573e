//! Concurrent batch processing of items.
//!
//! [`BatchProcessor::process_all`] marks every unprocessed item as
//! `PROCESSED`:
//!
//! ```text
//! ids = store.list_all_ids()          // one snapshot, fatal on failure
//! for id in ids:                      // fan-out, one task per id
//!     wait for a WorkerPool slot
//!     find_by_id -> absent?    Missing
//!                -> PROCESSED? Skipped
//!                -> else       mark, save, push to accumulator
//!     any error -> Failed (logged, never propagated)
//! join every task                     // fan-in
//! return accumulator
//! ```
//!
//! Units are detached tasks, so a batch keeps running to completion even if
//! the caller's future is dropped. The only state shared between units is the
//! result accumulator (a mutex held for a single push), the
//! [`AtomicProcessStats`] counters and the processor's lifetime
//! `processed_count`. No lock is held across a store call.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::join_all;

use crate::error::AppError;
use crate::models::Item;
use crate::pool::WorkerPool;
use crate::progress::{ProcessEvent, ProcessReporter, SilentReporter};
use crate::traits::ItemStore;

/// Outcome of one processing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Status changed to PROCESSED and the item was saved.
    Processed,
    /// The item was already PROCESSED.
    Skipped,
    /// The identifier no longer resolved to an item.
    Missing,
    /// The store failed or the unit panicked.
    Failed,
}

/// Statistics for one batch invocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessStats {
    pub processed: usize,
    pub skipped: usize,
    pub missing: usize,
    pub failed: usize,
}

impl ProcessStats {
    /// Creates a new empty stats tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an outcome, incrementing the appropriate counter.
    pub fn record(&mut self, outcome: ProcessOutcome) {
        match outcome {
            ProcessOutcome::Processed => self.processed += 1,
            ProcessOutcome::Skipped => self.skipped += 1,
            ProcessOutcome::Missing => self.missing += 1,
            ProcessOutcome::Failed => self.failed += 1,
        }
    }

    /// Returns the number of units that reached a terminal state.
    pub fn total(&self) -> usize {
        self.processed + self.skipped + self.missing + self.failed
    }
}

/// Lock-free counterpart of [`ProcessStats`] for concurrent units.
#[derive(Debug, Default)]
pub struct AtomicProcessStats {
    processed: AtomicUsize,
    skipped: AtomicUsize,
    missing: AtomicUsize,
    failed: AtomicUsize,
}

impl AtomicProcessStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: ProcessOutcome) {
        let counter = match outcome {
            ProcessOutcome::Processed => &self.processed,
            ProcessOutcome::Skipped => &self.skipped,
            ProcessOutcome::Missing => &self.missing,
            ProcessOutcome::Failed => &self.failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of the current counts.
    pub fn to_stats(&self) -> ProcessStats {
        ProcessStats {
            processed: self.processed.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            missing: self.missing.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

/// Processes every stored item concurrently.
///
/// # Type Parameters
///
/// * `S` - Item store implementation (e.g., `ItemRepository`)
///
/// # Example
///
/// ```ignore
/// use depot_core::{BatchProcessor, WorkerPool};
///
/// let pool = WorkerPool::new(10);
/// let processor = BatchProcessor::with_pool(repo, pool);
/// let processed = processor.process_all().await?;
/// println!("Marked {} items as processed", processed.len());
/// ```
pub struct BatchProcessor<S: ItemStore> {
    store: S,
    pool: WorkerPool,
    processed_count: Arc<AtomicUsize>,
}

impl<S: ItemStore> Clone for BatchProcessor<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            pool: self.pool.clone(),
            processed_count: Arc::clone(&self.processed_count),
        }
    }
}

impl<S: ItemStore> BatchProcessor<S> {
    /// Creates a processor with its own default-sized pool.
    pub fn new(store: S) -> Self {
        Self::with_pool(store, WorkerPool::default())
    }

    /// Creates a processor drawing from a shared pool.
    pub fn with_pool(store: S, pool: WorkerPool) -> Self {
        Self {
            store,
            pool,
            processed_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Number of items found by processing units over the lifetime of this
    /// processor and its clones. Diagnostic only.
    pub fn processed_count(&self) -> usize {
        self.processed_count.load(Ordering::Relaxed)
    }

    /// Marks all unprocessed items as PROCESSED.
    ///
    /// # Returns
    ///
    /// The items transitioned during this call, in no particular order.
    /// Items already PROCESSED, items deleted mid-run and items whose
    /// processing failed are not included.
    ///
    /// # Errors
    ///
    /// Returns an error only if the identifier list cannot be read.
    pub async fn process_all(&self) -> Result<Vec<Item>, AppError> {
        self.process_all_with_progress(&SilentReporter).await
    }

    /// Same as [`process_all`](Self::process_all), but emits progress events
    /// through the provided reporter.
    pub async fn process_all_with_progress<R: ProcessReporter>(
        &self,
        reporter: &R,
    ) -> Result<Vec<Item>, AppError> {
        let (items, _stats) = self.process_all_with_stats(reporter).await?;
        Ok(items)
    }

    /// Runs a batch and also returns its statistics.
    pub async fn process_all_with_stats<R: ProcessReporter>(
        &self,
        reporter: &R,
    ) -> Result<(Vec<Item>, ProcessStats), AppError> {
        let ids = self.store.list_all_ids().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to list item identifiers");
        })?;

        reporter.report(ProcessEvent::Started { total: ids.len() });

        let processed: Arc<Mutex<Vec<Item>>> = Arc::new(Mutex::new(Vec::with_capacity(ids.len())));
        let stats = Arc::new(AtomicProcessStats::new());
        let mut units = Vec::with_capacity(ids.len());

        for id in ids {
            let store = self.store.clone();
            let pool = self.pool.clone();
            let processed = Arc::clone(&processed);
            let stats = Arc::clone(&stats);
            let processed_count = Arc::clone(&self.processed_count);

            units.push(tokio::spawn(async move {
                let _permit = pool.acquire().await;
                let result = process_item(&store, id, &processed, &processed_count).await;
                stats.record(match &result {
                    Ok(visit) => (*visit).into(),
                    Err(_) => ProcessOutcome::Failed,
                });
                (id, result)
            }));
        }

        for joined in join_all(units).await {
            match joined {
                Ok((item_id, Ok(visit))) => reporter.report(match visit {
                    Visit::Processed => ProcessEvent::ItemProcessed { item_id },
                    Visit::Skipped => ProcessEvent::ItemSkipped { item_id },
                    Visit::Missing => ProcessEvent::ItemMissing { item_id },
                }),
                Ok((item_id, Err(e))) => {
                    tracing::warn!(item_id, error = %e, "Error processing item, skipping");
                    let message = e.to_string();
                    reporter.report(ProcessEvent::ItemFailed {
                        item_id,
                        error: &message,
                    });
                }
                Err(e) => {
                    // The unit panicked before recording its outcome.
                    tracing::error!(error = %e, "Processing unit aborted");
                    stats.record(ProcessOutcome::Failed);
                }
            }
        }

        let items = {
            let mut guard = match processed.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            std::mem::take(&mut *guard)
        };
        let stats = stats.to_stats();
        reporter.report(ProcessEvent::Completed { stats: &stats });

        Ok((items, stats))
    }
}

/// How a unit that reached the store without error left its item.
#[derive(Debug, Clone, Copy)]
enum Visit {
    Processed,
    Skipped,
    Missing,
}

impl From<Visit> for ProcessOutcome {
    fn from(visit: Visit) -> Self {
        match visit {
            Visit::Processed => ProcessOutcome::Processed,
            Visit::Skipped => ProcessOutcome::Skipped,
            Visit::Missing => ProcessOutcome::Missing,
        }
    }
}

/// One processing unit: fetch, check, mark, save, record.
async fn process_item<S: ItemStore>(
    store: &S,
    id: i64,
    processed: &Mutex<Vec<Item>>,
    processed_count: &AtomicUsize,
) -> Result<Visit, AppError> {
    let Some(mut item) = store.find_by_id(id).await? else {
        return Ok(Visit::Missing);
    };
    processed_count.fetch_add(1, Ordering::Relaxed);

    if item.is_processed() {
        return Ok(Visit::Skipped);
    }

    item.mark_processed();
    let saved = store.save(&item).await?;

    match processed.lock() {
        Ok(mut items) => items.push(saved),
        Err(poisoned) => poisoned.into_inner().push(saved),
    }
    Ok(Visit::Processed)
}
