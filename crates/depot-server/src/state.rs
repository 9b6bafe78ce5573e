use depot_core::{ItemService, WorkerPool};
use depot_db::ItemStoreEnum;

/// Shared application state for all handlers.
///
/// Axum clones this per request; the store and worker pool are reference
/// counted internally, so every clone shares one backend and one set of
/// worker permits.
#[derive(Clone)]
pub struct AppState {
    /// Item CRUD and batch processing
    pub item_service: ItemService<ItemStoreEnum>,

    /// Store handle for health checks
    pub store: ItemStoreEnum,
}

impl AppState {
    /// Creates a new application state over the given store and worker pool.
    pub fn new(store: ItemStoreEnum, pool: WorkerPool) -> Self {
        Self {
            item_service: ItemService::new(store.clone(), pool),
            store,
        }
    }
}
