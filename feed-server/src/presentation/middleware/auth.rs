use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::presentation::AppState;
use crate::presentation::app_error::AppError;

/// Identity proven by the bearer token in the `Authorization` header.
/// The header carries the raw token; an optional `Bearer ` prefix is
/// tolerated. A missing header rejects with `Unauthenticated` (401), a
/// present-but-invalid token with `InvalidToken` (400). The two kinds
/// are never collapsed.
#[derive(Debug, Clone)]
pub(crate) struct AuthenticatedUser {
    pub(crate) user_id: i64,
    pub(crate) username: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::Unauthenticated)?;

        let raw = auth_header.to_str().map_err(|_| AppError::InvalidToken)?;
        let token = raw
            .strip_prefix("Bearer ")
            .or_else(|| raw.strip_prefix("bearer "))
            .unwrap_or(raw)
            .trim();
        if token.is_empty() {
            return Err(AppError::Unauthenticated);
        }

        let state = AppState::from_ref(state);
        let claims = state
            .jwt
            .verify_token(token)
            .map_err(|_| AppError::InvalidToken)?;

        Ok(AuthenticatedUser {
            user_id: claims.id,
            username: claims.username,
        })
    }
}
