//! Depot Core - Domain types, batch processing, and services.
//!
//! This crate provides the core functionality for Depot, including:
//!
//! - **Domain models**: [`Item`] and its email validation rule
//! - **Batch processing**: [`BatchProcessor`] marks every unprocessed item as
//!   `PROCESSED` concurrently, isolating per-item failures
//! - **Services**: [`ItemService`] for the CRUD operations of the REST API
//! - **Traits**: [`ItemStore`] for dependency injection
//! - **Progress reporting**: [`ProcessReporter`] trait for decoupled logging
//!
//! # Architecture
//!
//! Business logic is decoupled from I/O through the [`ItemStore`] trait.
//! `depot-db` provides PostgreSQL and in-memory implementations and
//! `depot-server` exposes the service over HTTP.
//!
//! # Example
//!
//! ```ignore
//! use depot_core::{ItemService, WorkerPool};
//!
//! let pool = WorkerPool::new(10);
//! let service = ItemService::new(store, pool);
//! let processed = service.process_all().await?;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod pool;
pub mod process;
pub mod progress;
pub mod service;
pub mod traits;
pub mod validation;

// Configuration
pub use config::{DEFAULT_WORKER_POOL_SIZE, ProcessingConfig};

// Error handling
pub use error::AppError;

// Domain models
pub use models::{Item, STATUS_PROCESSED, STATUS_UNPROCESSED};
pub use validation::is_valid_email;

// Batch processing
pub use pool::WorkerPool;
pub use process::{AtomicProcessStats, BatchProcessor, ProcessOutcome, ProcessStats};

// Progress reporting
pub use progress::{ProcessEvent, ProcessReporter, SilentReporter, TracingReporter};

// Services
pub use service::ItemService;

// Traits for dependency injection
pub use traits::ItemStore;
