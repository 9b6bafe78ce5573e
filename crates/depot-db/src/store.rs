//! Runtime selection of the item store.
//!
//! # Why an Enum Instead of `dyn Trait`?
//!
//! The [`ItemStore`] trait uses `impl Future` return types (RPITIT), which
//! makes it not object-safe. We use an enum to provide dynamic dispatch
//! while maintaining the ergonomic async trait syntax.

use depot_core::error::AppError;
use depot_core::models::Item;
use depot_core::traits::ItemStore;
use sqlx::PgPool;

use crate::{ItemRepository, MemoryItemStore};

/// Unified item store that wraps concrete implementations.
#[derive(Clone)]
pub enum ItemStoreEnum {
    /// PostgreSQL-backed repository.
    Postgres(ItemRepository),
    /// Process-local store.
    Memory(MemoryItemStore),
}

impl ItemStoreEnum {
    pub fn postgres(pool: PgPool) -> Self {
        Self::Postgres(ItemRepository::new(pool))
    }

    pub fn memory() -> Self {
        Self::Memory(MemoryItemStore::new())
    }

    /// Short backend name for logs and health output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

impl ItemStore for ItemStoreEnum {
    async fn list_all_ids(&self) -> Result<Vec<i64>, AppError> {
        match self {
            Self::Postgres(store) => store.list_all_ids().await,
            Self::Memory(store) => store.list_all_ids().await,
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError> {
        match self {
            Self::Postgres(store) => store.find_by_id(id).await,
            Self::Memory(store) => store.find_by_id(id).await,
        }
    }

    async fn save(&self, item: &Item) -> Result<Item, AppError> {
        match self {
            Self::Postgres(store) => store.save(item).await,
            Self::Memory(store) => store.save(item).await,
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        match self {
            Self::Postgres(store) => store.delete_by_id(id).await,
            Self::Memory(store) => store.delete_by_id(id).await,
        }
    }

    async fn find_all(&self) -> Result<Vec<Item>, AppError> {
        match self {
            Self::Postgres(store) => store.find_all().await,
            Self::Memory(store) => store.find_all().await,
        }
    }

    async fn health_check(&self) -> Result<(), AppError> {
        match self {
            Self::Postgres(store) => store.health_check().await,
            Self::Memory(store) => store.health_check().await,
        }
    }
}
