//! Depot DB - Item store implementations
//!
//! This crate provides the repository pattern for item persistence.
//!
//! # Overview
//!
//! The main components are:
//! - [`ItemRepository`] - Item persistence in PostgreSQL
//! - [`MemoryItemStore`] - Process-local store for development and tests
//! - [`ItemStoreEnum`] - Runtime choice between the two

mod memory;
mod repository;
mod store;

pub use memory::MemoryItemStore;
pub use repository::{ItemRepository, ensure_schema};
pub use store::ItemStoreEnum;
