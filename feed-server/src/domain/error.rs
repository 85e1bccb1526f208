use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("validation failed for '{field}': {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("{entity} does not exist")]
    ReferentialIntegrity { entity: &'static str },

    #[error("resource already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(String),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}
