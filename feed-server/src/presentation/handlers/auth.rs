use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::user::{LoginRequest, SignupRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::handlers::MessageDto;
use crate::presentation::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct SignupDto {
    #[validate(length(min = 1, max = 64))]
    pub(crate) username: String,
    #[validate(length(min = 1))]
    pub(crate) password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct LoginDto {
    #[validate(length(min = 1, max = 64))]
    pub(crate) username: String,
    #[validate(length(min = 1))]
    pub(crate) password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LoginResponseDto {
    pub(crate) auth: bool,
    pub(crate) token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UsernameDto {
    pub(crate) username: String,
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    request_body = SignupDto,
    responses(
        (status = 201, description = "User registered", body = MessageDto),
        (status = 400, description = "Username already taken", body = MessageDto),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn signup(
    State(state): State<AppState>,
    Json(dto): Json<SignupDto>,
) -> AppResult<Response> {
    dto.validate()?;

    let req = SignupRequest {
        username: dto.username,
        password: dto.password,
    };

    let response = match state.auth_service.signup(req).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(MessageDto::new("User registered successfully")),
        )
            .into_response(),
        Err(DomainError::AlreadyExists(_)) => (
            StatusCode::BAD_REQUEST,
            Json(MessageDto::new("Username already taken.")),
        )
            .into_response(),
        Err(err) => return Err(err.into()),
    };

    Ok(response)
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 400, description = "Unknown username", body = MessageDto),
        (status = 401, description = "Wrong password", body = LoginResponseDto),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> AppResult<Response> {
    dto.validate()?;

    let req = LoginRequest {
        username: dto.username,
        password: dto.password,
    };

    let response = match state.auth_service.login(req).await {
        Ok(token) => (
            StatusCode::OK,
            Json(LoginResponseDto {
                auth: true,
                token: Some(token),
            }),
        )
            .into_response(),
        Err(DomainError::NotFound(_)) => (
            StatusCode::BAD_REQUEST,
            Json(MessageDto::new("Username or password incorrect")),
        )
            .into_response(),
        Err(DomainError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponseDto {
                auth: false,
                token: None,
            }),
        )
            .into_response(),
        Err(err) => return Err(err.into()),
    };

    Ok(response)
}

#[utoipa::path(
    get,
    path = "/username",
    tag = "auth",
    security(
        ("token_auth" = [])
    ),
    responses(
        (status = 200, description = "Identity from the token", body = UsernameDto),
        (status = 400, description = "Invalid or expired token"),
        (status = 401, description = "Missing token")
    )
)]
pub(crate) async fn username(auth: AuthenticatedUser) -> AppResult<Json<UsernameDto>> {
    debug!(user_id = auth.user_id, "token identity resolved");

    Ok(Json(UsernameDto {
        username: auth.username,
    }))
}
