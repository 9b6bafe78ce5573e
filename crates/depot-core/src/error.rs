use thiserror::Error;

/// Application-wide error types.
///
/// This enum represents all possible errors that can occur in Depot.
/// It uses the `thiserror` crate for ergonomic error handling and automatic
/// conversion from underlying library errors.
///
/// # Error Conversion
///
/// - `sqlx::Error` → `AppError::DatabaseError`
///
/// # Examples
///
/// ```no_run
/// use depot_core::error::AppError;
///
/// fn example() -> Result<(), AppError> {
///     Err(AppError::Validation("email is not valid".to_string()))
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed.
    ///
    /// This error wraps all errors from SQLx database operations, including
    /// connection failures, query errors, and constraint violations.
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Item not found in the store.
    ///
    /// Returned when updating an item whose identifier no longer exists.
    #[error("Item not found: {0}")]
    ItemNotFound(i64),

    /// The item failed validation (blank name, malformed email).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A store failed for a reason other than the database driver.
    #[error("Store error: {0}")]
    Store(String),
}
