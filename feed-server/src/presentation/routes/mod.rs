use axum::Router;

use super::AppState;

pub(crate) mod auth;
pub(crate) mod likes;
pub(crate) mod posts;

// Paths are flat by contract, no common prefix to nest under.
pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(posts::router())
        .merge(likes::router())
}
