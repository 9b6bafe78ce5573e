//! In-process item store.
//!
//! Used when no database is configured. Contents live only as long as the
//! process.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use depot_core::error::AppError;
use depot_core::models::Item;

/// Item store backed by a mutex-guarded `BTreeMap`.
///
/// Clones share the same contents.
#[derive(Clone, Default)]
pub struct MemoryItemStore {
    items: Arc<Mutex<BTreeMap<i64, Item>>>,
    last_id: Arc<AtomicI64>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<i64, Item>>, AppError> {
        self.items
            .lock()
            .map_err(|_| AppError::Store("memory store lock poisoned".to_string()))
    }
}

impl depot_core::traits::ItemStore for MemoryItemStore {
    async fn list_all_ids(&self) -> Result<Vec<i64>, AppError> {
        Ok(self.lock()?.keys().copied().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError> {
        Ok(self.lock()?.get(&id).cloned())
    }

    async fn save(&self, item: &Item) -> Result<Item, AppError> {
        let mut items = self.lock()?;
        let saved = match item.id {
            Some(id) => {
                if !items.contains_key(&id) {
                    return Err(AppError::ItemNotFound(id));
                }
                item.clone()
            }
            None => {
                let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
                item.clone().with_id(id)
            }
        };
        if let Some(id) = saved.id {
            items.insert(id, saved.clone());
        }
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.lock()?.remove(&id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Item>, AppError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
