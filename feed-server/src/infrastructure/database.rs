use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::settings::Settings;

/// Bounded connection pool. Checkout past the acquire timeout fails the
/// query with `PoolTimedOut` instead of suspending the caller forever.
pub(crate) async fn create_pool(settings: &Settings) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .acquire_timeout(Duration::from_secs(settings.database_acquire_timeout_secs))
        .connect(&settings.database_url)
        .await
        .context("failed to connect to database")
}

pub(crate) async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run migrations")
}
