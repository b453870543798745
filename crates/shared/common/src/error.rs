//! Unified error handling.
//!
//! Repository failures travel through services unchanged inside
//! [`AppError::Database`]; absence in lookups is an `Option`, not an error.

use domain::DomainError;
use thiserror::Error;

/// Error returned by every repository and service call.
#[derive(Error, Debug)]
pub enum AppError {
    /// A lookup that must succeed found nothing; carries the entity name
    #[error("{0} not found")]
    NotFound(String),

    /// Input rejected by the application itself
    #[error("{0}")]
    Validation(String),

    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Stable code for logs and exit reporting
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to print. Details of database and internal failures go
    /// to the log instead.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(_) => self.to_string(),
            AppError::Validation(msg) => msg.clone(),
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!(error = ?e, "Database error");
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                "An internal error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::PasswordTooShort { .. } => AppError::Validation(err.to_string()),
            DomainError::PasswordHash(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    /// Turn absence into [`AppError::NotFound`] naming `entity`
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(entity.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        AppError::NotFound(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
