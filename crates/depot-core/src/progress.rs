//! Progress reporting for batch processing.
//!
//! The processor emits [`ProcessEvent`]s through a [`ProcessReporter`] so the
//! caller decides whether they become log lines, metrics, or nothing.

use tracing::{debug, info};

use crate::process::ProcessStats;

/// Events emitted while a batch is running.
#[derive(Debug, Clone)]
pub enum ProcessEvent<'a> {
    /// The identifier snapshot was read.
    Started { total: usize },
    /// An item was transitioned to PROCESSED and saved.
    ItemProcessed { item_id: i64 },
    /// An item was already PROCESSED and left untouched.
    ItemSkipped { item_id: i64 },
    /// The identifier no longer resolved to an item.
    ItemMissing { item_id: i64 },
    /// Processing this item failed; the batch continues.
    ItemFailed { item_id: i64, error: &'a str },
    /// Every unit has finished.
    Completed { stats: &'a ProcessStats },
}

/// Trait for reporting batch progress.
///
/// Events are delivered from the batch's own future as units are joined,
/// never from inside the spawned units.
pub trait ProcessReporter: Send + Sync {
    /// Called when a processing event occurs.
    ///
    /// The default implementation does nothing (silent mode).
    fn report(&self, event: ProcessEvent<'_>) {
        let _ = event;
    }
}

/// Silent reporter that ignores all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProcessReporter for SilentReporter {}

/// Tracing-based reporter for server logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ProcessReporter for TracingReporter {
    fn report(&self, event: ProcessEvent<'_>) {
        match event {
            ProcessEvent::Started { total } => {
                info!(total, "Batch processing started");
            }
            ProcessEvent::ItemProcessed { item_id } => {
                debug!(item_id, "Item processed");
            }
            ProcessEvent::ItemSkipped { item_id } => {
                debug!(item_id, "Item already processed, skipping");
            }
            ProcessEvent::ItemMissing { item_id } => {
                debug!(item_id, "Item no longer exists, skipping");
            }
            // Already logged at warn by the processor.
            ProcessEvent::ItemFailed { .. } => {}
            ProcessEvent::Completed { stats } => {
                info!(
                    processed = stats.processed,
                    skipped = stats.skipped,
                    missing = stats.missing,
                    failed = stats.failed,
                    "Batch processing completed"
                );
            }
        }
    }
}
