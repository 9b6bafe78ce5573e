//! Integration tests for ItemService.

use depot_core::{AppError, Item, ItemService, STATUS_PROCESSED, STATUS_UNPROCESSED, WorkerPool};

use crate::integration::common::{MockItemStore, sorted_ids};

fn service(store: &MockItemStore) -> ItemService<MockItemStore> {
    ItemService::new(store.clone(), WorkerPool::new(4))
}

#[tokio::test]
async fn test_create_assigns_id() {
    let store = MockItemStore::new();
    let service = service(&store);

    let created = service
        .create(Item::new("Widget", "owner@example.com").with_description("blue"))
        .await
        .unwrap();

    assert_eq!(created.id, Some(1));
    assert_eq!(created.status, STATUS_UNPROCESSED);
    assert_eq!(store.get(1).unwrap().description.as_deref(), Some("blue"));
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let store = MockItemStore::new();
    let service = service(&store);

    let created = service
        .create(Item::new("Widget", "owner@example.com").with_id(99))
        .await
        .unwrap();

    assert_eq!(created.id, Some(1));
    assert!(store.get(99).is_none());
}

#[tokio::test]
async fn test_create_rejects_invalid_email() {
    let store = MockItemStore::new();
    let service = service(&store);

    let result = service.create(Item::new("Widget", "@username.com")).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(store.len(), 0);
    assert_eq!(store.save_calls(), 0);
}

#[tokio::test]
async fn test_create_propagates_save_failure() {
    let store = MockItemStore::new();
    store.fail_inserts();
    let service = service(&store);

    let result = service.create(Item::new("Widget", "owner@example.com")).await;

    assert!(matches!(result, Err(AppError::Store(_))));
    assert_eq!(store.save_calls(), 1);
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn test_update_existing() {
    let store = MockItemStore::new();
    let existing = store.insert(Item::new("Widget", "owner@example.com"));
    let service = service(&store);

    let updated = service
        .update(
            existing.id.unwrap(),
            Item::new("Gadget", "new@example.com").with_status(STATUS_PROCESSED),
        )
        .await
        .unwrap()
        .expect("item should exist");

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.name, "Gadget");
    assert_eq!(store.get(1).unwrap().email, "new@example.com");
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let store = MockItemStore::new();
    let service = service(&store);

    let result = service
        .update(42, Item::new("Gadget", "new@example.com"))
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(store.save_calls(), 0);
}

#[tokio::test]
async fn test_update_rejects_invalid_email() {
    let store = MockItemStore::new();
    store.insert(Item::new("Widget", "owner@example.com"));
    let service = service(&store);

    let result = service.update(1, Item::new("Widget", "username@.com")).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(store.get(1).unwrap().email, "owner@example.com");
}

#[tokio::test]
async fn test_delete() {
    let store = MockItemStore::new();
    store.insert(Item::new("Widget", "owner@example.com"));
    let service = service(&store);

    assert!(service.delete(1).await.unwrap());
    assert!(!service.delete(1).await.unwrap());
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn test_find_all_and_by_id() {
    let store = MockItemStore::with_statuses(&["A", "B"]);
    let service = service(&store);

    let all = service.find_all().await.unwrap();
    assert_eq!(sorted_ids(&all), vec![1, 2]);
    assert_eq!(service.find_by_id(2).await.unwrap().unwrap().status, "B");
    assert!(service.find_by_id(3).await.unwrap().is_none());
}

#[tokio::test]
async fn test_process_all_delegates_to_processor() {
    let store = MockItemStore::with_statuses(&[STATUS_UNPROCESSED, STATUS_PROCESSED]);
    let service = service(&store);

    let processed = service.process_all().await.unwrap();

    assert_eq!(sorted_ids(&processed), vec![1]);
    assert_eq!(service.processor().processed_count(), 2);
    assert_eq!(service.processor().pool().size(), 4);
}
