use thiserror::Error;

/// Errors raised by booking and back-office rules, independent of transport
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl From<crate::domain::services::appointment_lifecycle::TransitionError> for DomainError {
    fn from(err: crate::domain::services::appointment_lifecycle::TransitionError) -> Self {
        DomainError::Conflict(err.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
