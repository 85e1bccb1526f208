use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::domain::error::DomainError;

/// Body text for every 500. The real cause is logged, never returned.
const STORAGE_FAILURE_MESSAGE: &str = "Something went wrong, please try again later!";

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    NotFound(&'static str),

    /// No token was presented at all.
    #[error("Access Denied")]
    Unauthenticated,

    /// A token was presented but failed signature, structure, or expiry.
    #[error("Invalid Token")]
    InvalidToken,
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Domain(err) => {
                let (status, msg) = match &err {
                    DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
                    DomainError::ReferentialIntegrity { .. } => {
                        (StatusCode::BAD_REQUEST, err.to_string())
                    }
                    DomainError::AlreadyExists(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                    DomainError::InvalidCredentials => (StatusCode::UNAUTHORIZED, err.to_string()),
                    DomainError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                    DomainError::Storage(cause) => {
                        error!(%cause, "storage failure");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            STORAGE_FAILURE_MESSAGE.to_string(),
                        )
                    }
                    DomainError::Unexpected(cause) => {
                        error!(%cause, "unexpected domain error");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            STORAGE_FAILURE_MESSAGE.to_string(),
                        )
                    }
                };
                (status, msg)
            }
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            AppError::Unauthenticated => (StatusCode::UNAUTHORIZED, "Access Denied".to_string()),
            AppError::InvalidToken => (StatusCode::BAD_REQUEST, "Invalid Token".to_string()),
        };

        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::AppError;
    use crate::domain::error::DomainError;

    #[test]
    fn missing_token_is_unauthorized() {
        let response = AppError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_token_is_bad_request() {
        let response = AppError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_referenced_user_is_bad_request() {
        let response = AppError::Domain(DomainError::ReferentialIntegrity { entity: "User" })
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn no_posts_condition_is_not_found() {
        let response = AppError::NotFound("No posts found for this user").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failure_is_internal_error() {
        let response =
            AppError::Domain(DomainError::Storage("connection reset".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
