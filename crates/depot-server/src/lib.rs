//! Depot Server - REST API for item management
//!
//! This crate exposes the item service over HTTP:
//!
//! - **Items**: create, read, replace and delete items
//! - **Processing**: run one concurrent batch over every stored item
//!
//! # API Documentation
//!
//! When running the server, interactive API documentation is available
//! at `/swagger-ui`.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
