//! Domain errors.

use thiserror::Error;

/// Rules the domain types enforce themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
