//! Health check endpoint.

use axum::{Json, extract::State};

use depot_core::traits::ItemStore;

use crate::dto::{HealthResponse, ServiceStatus};
use crate::error::ApiError;
use crate::state::AppState;

/// Health check endpoint.
///
/// Returns the server health status, version and store connectivity.
/// An unreachable store reports "degraded" rather than failing the request.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let database = match state.store.health_check().await {
        Ok(()) => ServiceStatus {
            healthy: true,
            message: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, store = state.store.name(), "Store health check failed");
            ServiceStatus {
                healthy: false,
                message: Some(e.to_string()),
            }
        }
    };

    let status = if database.healthy {
        "healthy"
    } else {
        "degraded"
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store.name().to_string(),
        database,
    }))
}
