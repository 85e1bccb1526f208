use axum::{
    Router,
    routing::{get, post},
};

use crate::presentation::AppState;
use crate::presentation::handlers::posts::{create_post, posts_by_user};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", post(create_post))
        .route("/posts/user/{user_id}", get(posts_by_user))
}
