//! Item service used by the request layer.
//!
//! Wraps an [`ItemStore`] with the validation rules of the HTTP surface and
//! owns the [`BatchProcessor`] for that store.

use crate::error::AppError;
use crate::models::Item;
use crate::pool::WorkerPool;
use crate::process::BatchProcessor;
use crate::progress::TracingReporter;
use crate::traits::ItemStore;

/// Service for item CRUD and batch processing.
///
/// # Type Parameters
///
/// * `S` - Item store implementation
pub struct ItemService<S: ItemStore> {
    store: S,
    processor: BatchProcessor<S>,
}

impl<S: ItemStore> Clone for ItemService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            processor: self.processor.clone(),
        }
    }
}

impl<S: ItemStore> ItemService<S> {
    /// Creates a service whose batch processor draws from `pool`.
    pub fn new(store: S, pool: WorkerPool) -> Self {
        Self {
            processor: BatchProcessor::with_pool(store.clone(), pool),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn processor(&self) -> &BatchProcessor<S> {
        &self.processor
    }

    pub async fn find_all(&self) -> Result<Vec<Item>, AppError> {
        self.store.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError> {
        self.store.find_by_id(id).await
    }

    /// Validates and inserts a new item.
    ///
    /// Any identifier supplied by the client is discarded; the store assigns one.
    pub async fn create(&self, mut item: Item) -> Result<Item, AppError> {
        item.validate()?;
        item.id = None;
        self.store.save(&item).await
    }

    /// Replaces the item with identifier `id`.
    ///
    /// Returns `Ok(None)` when no such item exists.
    pub async fn update(&self, id: i64, mut item: Item) -> Result<Option<Item>, AppError> {
        if self.store.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        item.validate()?;
        item.id = Some(id);
        match self.store.save(&item).await {
            Ok(saved) => Ok(Some(saved)),
            // Deleted between the lookup and the save.
            Err(AppError::ItemNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Deletes the item with identifier `id`. Returns false if it did not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        if self.store.find_by_id(id).await?.is_none() {
            return Ok(false);
        }
        self.store.delete_by_id(id).await?;
        Ok(true)
    }

    /// Runs a batch over every stored item, logging progress via `tracing`.
    pub async fn process_all(&self) -> Result<Vec<Item>, AppError> {
        self.processor.process_all_with_progress(&TracingReporter).await
    }
}
