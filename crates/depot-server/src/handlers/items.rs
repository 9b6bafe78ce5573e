//! Item endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use depot_core::AppError;

use crate::dto::{ItemRequest, ItemResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// List all items.
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All stored items", body = [ItemResponse]),
        (status = 500, description = "Item store unavailable"),
    ),
    tag = "items"
)]
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.item_service.find_all().await?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Get an item by id.
///
/// A missing item answers 204 with an empty body.
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 204, description = "Item not found"),
        (status = 500, description = "Item store unavailable"),
    ),
    tag = "items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state
        .item_service
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NoContent)?;

    Ok(Json(ItemResponse::from(item)))
}

/// Create an item.
///
/// The store assigns the id. Invalid input and failed saves both answer 400.
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Invalid item or save failed"),
    ),
    tag = "items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let Json(request) = payload?;
    let item = request.into_item()?;

    let created = state.item_service.create(item).await.map_err(|e| match e {
        AppError::Validation(msg) => ApiError::BadRequest(msg),
        other => {
            tracing::warn!(error = %other, "Failed to create item");
            ApiError::BadRequest(other.to_string())
        }
    })?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(created))))
}

/// Replace an existing item.
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Item updated", body = ItemResponse),
        (status = 204, description = "Item not found"),
        (status = 400, description = "Invalid item"),
        (status = 500, description = "Item store unavailable"),
    ),
    tag = "items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let Json(request) = payload?;
    let item = request.into_item()?;

    let updated = state
        .item_service
        .update(id, item)
        .await?
        .ok_or(ApiError::NoContent)?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(updated))))
}

/// Delete an item.
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 204, description = "Item not found"),
        (status = 500, description = "Item store unavailable"),
    ),
    tag = "items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.item_service.delete(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NoContent)
    }
}

/// Process every unprocessed item.
///
/// Runs one batch over a snapshot of all ids and returns the items this
/// call moved to PROCESSED. Items that fail individually are left out of
/// the result and logged.
#[utoipa::path(
    get,
    path = "/api/items/process",
    responses(
        (status = 200, description = "Items processed by this call", body = [ItemResponse]),
        (status = 500, description = "Could not read item ids"),
    ),
    tag = "items"
)]
pub async fn process_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let processed = state.item_service.process_all().await?;

    Ok(Json(processed.into_iter().map(ItemResponse::from).collect()))
}
