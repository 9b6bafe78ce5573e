//! Response DTOs for API endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use depot_core::Item;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("healthy" or "degraded")
    pub status: String,
    /// Server version
    pub version: String,
    /// Item store backend ("postgres" or "memory")
    pub store: String,
    /// Store connectivity status
    pub database: ServiceStatus,
}

/// Status of an individual service component.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    /// Whether the service is reachable
    pub healthy: bool,
    /// Optional message (e.g., error details)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A persisted item.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    /// Item id
    pub id: i64,
    /// Item name
    pub name: String,
    /// Item description
    pub description: Option<String>,
    /// Item status ("PROCESSED" once handled by the batch endpoint)
    pub status: String,
    /// Contact email
    pub email: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.unwrap_or_default(),
            name: item.name,
            description: item.description,
            status: item.status,
            email: item.email,
        }
    }
}
