use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::application::auth_service::AuthService;
use crate::application::like_service::LikeService;
use crate::application::post_service::PostService;
use crate::data::repositories::postgres::like_repository::PostgresLikeRepository;
use crate::data::repositories::postgres::post_repository::PostgresPostRepository;
use crate::data::repositories::postgres::user_repository::PostgresUserRepository;
use crate::infrastructure::jwt::JwtService;
use crate::infrastructure::settings::Settings;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub(crate) post_service: Arc<PostService<PostgresUserRepository, PostgresPostRepository>>,
    pub(crate) like_service: Arc<LikeService<PostgresLikeRepository>>,
    pub(crate) jwt: Arc<JwtService>,
}

impl AppState {
    pub(crate) fn build(pool: PgPool, settings: &Settings) -> Self {
        let jwt = Arc::new(JwtService::new(
            &settings.secret_key,
            settings.jwt_ttl_seconds,
        ));
        info!("session tokens valid for {}s", jwt.ttl_seconds());

        let users = PostgresUserRepository::new(pool.clone());
        let posts = PostgresPostRepository::new(pool.clone());
        let likes = PostgresLikeRepository::new(pool);

        Self {
            auth_service: Arc::new(AuthService::new(users.clone(), jwt.clone())),
            post_service: Arc::new(PostService::new(users, posts)),
            like_service: Arc::new(LikeService::new(likes)),
            jwt,
        }
    }
}
