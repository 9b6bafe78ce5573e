//! Trait definitions for external dependencies.
//!
//! The item store is the only collaborator the core depends on. Keeping it
//! behind a trait lets the batch processor run against PostgreSQL, the
//! in-memory store, or a test double that injects failures.
//!
//! # Example
//!
//! ```
//! use depot_core::traits::ItemStore;
//! use depot_core::{AppError, Item};
//!
//! async fn unprocessed<S: ItemStore>(store: &S) -> Result<Vec<Item>, AppError> {
//!     let items = store.find_all().await?;
//!     Ok(items.into_iter().filter(|i| !i.is_processed()).collect())
//! }
//! ```

use std::future::Future;

use crate::{AppError, Item};

/// Store for item persistence and retrieval.
///
/// Implementations are expected to be internally synchronized: every method
/// may be called concurrently from many processing units.
pub trait ItemStore: Send + Sync + Clone + 'static {
    /// Lists the identifiers of all stored items, without duplicates.
    fn list_all_ids(&self) -> impl Future<Output = Result<Vec<i64>, AppError>> + Send;

    /// Retrieves an item by identifier.
    ///
    /// Returns `Ok(None)` when no item has that identifier.
    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Option<Item>, AppError>> + Send;

    /// Persists an item.
    ///
    /// Inserts when `item.id` is `None` (the store assigns the identifier),
    /// otherwise updates the existing row.
    ///
    /// # Returns
    ///
    /// The persisted item, with its identifier set.
    ///
    /// # Errors
    ///
    /// `AppError::ItemNotFound` when updating an identifier that does not exist.
    fn save(&self, item: &Item) -> impl Future<Output = Result<Item, AppError>> + Send;

    /// Deletes an item by identifier. Deleting a missing item is not an error.
    fn delete_by_id(&self, id: i64) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Retrieves all items.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Item>, AppError>> + Send;

    /// Checks store connectivity.
    fn health_check(&self) -> impl Future<Output = Result<(), AppError>> + Send;
}
