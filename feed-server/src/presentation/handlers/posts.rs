use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::post::{CreatePostRequest, Post};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreatePostDto {
    #[validate(length(min = 1, max = 255))]
    pub(crate) title: String,
    #[validate(length(min = 1))]
    pub(crate) content: String,
    pub(crate) user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) user_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            created_at: post.created_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostDto,
    responses(
        (status = 200, description = "Post created", body = PostDto),
        (status = 400, description = "Referenced user does not exist"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    Json(dto): Json<CreatePostDto>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    dto.validate()?;

    let req = CreatePostRequest {
        title: dto.title,
        content: dto.content,
        user_id: dto.user_id,
    };

    let post = state.post_service.create_post(req).await?;
    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    get,
    path = "/posts/user/{user_id}",
    tag = "posts",
    params(
        ("user_id" = i64, Path, description = "Author id")
    ),
    responses(
        (status = 200, description = "Posts by the user", body = [PostDto]),
        (status = 404, description = "User has no posts"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn posts_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let posts = state.post_service.posts_by_user(user_id).await?;

    // Zero rows is a no-content condition, reported as 404 by contract.
    if posts.is_empty() {
        return Err(AppError::NotFound("No posts found for this user"));
    }

    let posts = posts.into_iter().map(PostDto::from).collect();
    Ok((StatusCode::OK, Json(posts)))
}
