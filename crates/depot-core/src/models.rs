//! Domain models.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::validation::is_valid_email;

/// Status marking an item as handled by the batch processor.
pub const STATUS_PROCESSED: &str = "PROCESSED";

/// Status given to newly created items that do not specify one.
pub const STATUS_UNPROCESSED: &str = "UNPROCESSED";

/// An inventory item.
///
/// `id` is `None` until the item has been persisted; the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub email: String,
}

impl Item {
    /// Creates an unsaved item with the default status.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            status: STATUS_UNPROCESSED.to_string(),
            email: email.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns true if the status is exactly [`STATUS_PROCESSED`].
    pub fn is_processed(&self) -> bool {
        self.status == STATUS_PROCESSED
    }

    pub fn mark_processed(&mut self) {
        self.status = STATUS_PROCESSED.to_string();
    }

    /// Checks the fields a client must supply.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the name is blank or the email
    /// does not satisfy [`is_valid_email`].
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(AppError::Validation(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }
        Ok(())
    }
}
