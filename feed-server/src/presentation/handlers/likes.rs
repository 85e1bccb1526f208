use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::like::{Like, PostLiker};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::handlers::MessageDto;

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateLikeDto {
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LikeDto {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
    pub(crate) active: bool,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<Like> for LikeDto {
    fn from(like: Like) -> Self {
        Self {
            id: like.id,
            user_id: like.user_id,
            post_id: like.post_id,
            active: like.active,
            created_at: like.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostLikerDto {
    pub(crate) username: String,
    pub(crate) user_id: i64,
    pub(crate) likes_id: i64,
}

impl From<PostLiker> for PostLikerDto {
    fn from(liker: PostLiker) -> Self {
        Self {
            username: liker.username,
            user_id: liker.user_id,
            likes_id: liker.likes_id,
        }
    }
}

#[utoipa::path(
    post,
    path = "/likes",
    tag = "likes",
    request_body = CreateLikeDto,
    responses(
        (status = 200, description = "Like is active", body = LikeDto),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_like(
    State(state): State<AppState>,
    Json(dto): Json<CreateLikeDto>,
) -> AppResult<(StatusCode, Json<LikeDto>)> {
    let like = state.like_service.like(dto.user_id, dto.post_id).await?;
    Ok((StatusCode::OK, Json(LikeDto::from(like))))
}

#[utoipa::path(
    put,
    path = "/likes/{user_id}/{post_id}",
    tag = "likes",
    params(
        ("user_id" = i64, Path, description = "Liker id"),
        ("post_id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Like removed (idempotent)", body = MessageDto),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn remove_like(
    State(state): State<AppState>,
    Path((user_id, post_id)): Path<(i64, i64)>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.like_service.unlike(user_id, post_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("The like has been removed successfully!")),
    ))
}

#[utoipa::path(
    get,
    path = "/likes/post/{post_id}",
    tag = "likes",
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Active likers, empty array when none", body = [PostLikerDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn likers_of_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> AppResult<(StatusCode, Json<Vec<PostLikerDto>>)> {
    let likers = state.like_service.likers_of_post(post_id).await?;

    let likers = likers.into_iter().map(PostLikerDto::from).collect();
    Ok((StatusCode::OK, Json(likers)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::PostLikerDto;

    #[test]
    fn liker_body_exposes_join_fields() {
        let body = serde_json::to_value(PostLikerDto {
            username: "alice".to_string(),
            user_id: 1,
            likes_id: 7,
        })
        .expect("body must serialize");

        assert_eq!(
            body,
            json!({"username": "alice", "user_id": 1, "likes_id": 7})
        );
    }
}
