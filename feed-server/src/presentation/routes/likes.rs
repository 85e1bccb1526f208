use axum::{
    Router,
    routing::{get, post, put},
};

use crate::presentation::AppState;
use crate::presentation::handlers::likes::{create_like, likers_of_post, remove_like};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/likes", post(create_like))
        .route("/likes/post/{post_id}", get(likers_of_post))
        .route("/likes/{user_id}/{post_id}", put(remove_like))
}
