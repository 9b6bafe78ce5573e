//! Request DTOs for API endpoints.

use serde::Deserialize;
use utoipa::ToSchema;

use depot_core::{Item, STATUS_UNPROCESSED};

use crate::error::ApiError;

/// Request body for creating or replacing an item.
///
/// Any `id` in the body is ignored; the path or the store decides it.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ItemRequest {
    /// Item name (required)
    #[schema(example = "Pallet jack")]
    #[serde(default)]
    pub name: Option<String>,

    /// Free-text description
    #[schema(example = "Manual, 2500 kg capacity")]
    #[serde(default)]
    pub description: Option<String>,

    /// Free-form status (default: UNPROCESSED)
    #[schema(example = "UNPROCESSED")]
    #[serde(default)]
    pub status: Option<String>,

    /// Contact email (required)
    #[schema(example = "warehouse@example.com")]
    #[serde(default)]
    pub email: Option<String>,
}

impl ItemRequest {
    /// Converts the body into an unsaved item.
    ///
    /// Fails if a required field is missing. Format checks happen in the service.
    pub fn into_item(self) -> Result<Item, ApiError> {
        let name = self
            .name
            .ok_or_else(|| ApiError::BadRequest("name is required".to_string()))?;
        let email = self
            .email
            .ok_or_else(|| ApiError::BadRequest("email is required".to_string()))?;

        Ok(Item {
            id: None,
            name,
            description: self.description,
            status: self.status.unwrap_or_else(|| STATUS_UNPROCESSED.to_string()),
            email,
        })
    }
}
