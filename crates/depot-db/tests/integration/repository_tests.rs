//! Integration tests for ItemRepository.
//!
//! These tests verify the repository layer against a real PostgreSQL
//! database. Each test runs in an isolated container.

use depot_core::traits::ItemStore;
use depot_core::{AppError, BatchProcessor, STATUS_PROCESSED, WorkerPool};
use depot_db::{ItemRepository, ensure_schema};

use crate::integration::common::{sample_item, setup_test_db};

#[tokio::test]
async fn test_insert_assigns_id() {
    let (pool, _container) = setup_test_db().await;
    let repo = ItemRepository::new(pool);

    let item = sample_item("Widget", "NEW");
    let saved = repo.save(&item).await.expect("save should succeed");

    let id = saved.id.expect("saved item should have an id");
    let retrieved = repo
        .find_by_id(id)
        .await
        .expect("find should succeed")
        .expect("item should exist");

    assert_eq!(retrieved.name, "Widget");
    assert_eq!(retrieved.email, "widget@example.com");
    assert_eq!(retrieved.description, item.description);
    assert_eq!(retrieved.status, "NEW");
}

#[tokio::test]
async fn test_save_updates_existing_item() {
    let (pool, _container) = setup_test_db().await;
    let repo = ItemRepository::new(pool);

    let mut saved = repo.save(&sample_item("Widget", "NEW")).await.unwrap();
    saved.mark_processed();
    saved.description = None;
    let updated = repo.save(&saved).await.unwrap();

    assert_eq!(updated.id, saved.id);
    let retrieved = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(retrieved.status, STATUS_PROCESSED);
    assert!(retrieved.description.is_none());
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_unknown_id_is_not_found() {
    let (pool, _container) = setup_test_db().await;
    let repo = ItemRepository::new(pool);

    let result = repo.save(&sample_item("Ghost", "NEW").with_id(999)).await;

    assert!(matches!(result, Err(AppError::ItemNotFound(999))));
}

#[tokio::test]
async fn test_list_ids_ordered() {
    let (pool, _container) = setup_test_db().await;
    let repo = ItemRepository::new(pool);

    let mut expected = Vec::new();
    for name in ["A", "B", "C"] {
        expected.push(repo.save(&sample_item(name, "NEW")).await.unwrap().id.unwrap());
    }

    assert_eq!(repo.list_all_ids().await.unwrap(), expected);
}

#[tokio::test]
async fn test_delete() {
    let (pool, _container) = setup_test_db().await;
    let repo = ItemRepository::new(pool);

    let id = repo.save(&sample_item("Widget", "NEW")).await.unwrap().id.unwrap();

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(repo.delete_by_id(id).await.is_ok());
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let (pool, _container) = setup_test_db().await;

    ensure_schema(&pool).await.expect("second run should succeed");
    assert!(ItemRepository::new(pool).health_check().await.is_ok());
}

/// Full batch run against PostgreSQL.
#[tokio::test]
async fn test_batch_processing_against_postgres() {
    let (pool, _container) = setup_test_db().await;
    let repo = ItemRepository::new(pool);

    for (i, status) in ["NEW", STATUS_PROCESSED, "NEW", "NEW"].iter().enumerate() {
        repo.save(&sample_item(&format!("Item{}", i), status))
            .await
            .unwrap();
    }

    let processor = BatchProcessor::with_pool(repo.clone(), WorkerPool::new(4));
    let first = processor.process_all().await.unwrap();
    let second = processor.process_all().await.unwrap();

    assert_eq!(first.len(), 3);
    assert!(second.is_empty());
    assert!(
        repo.find_all()
            .await
            .unwrap()
            .iter()
            .all(|i| i.is_processed())
    );
}
