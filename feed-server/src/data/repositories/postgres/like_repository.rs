use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::data::like_repository::LikeRepository;
use crate::domain::error::DomainError;
use crate::domain::like::{Like, PostLiker};

#[derive(Debug, Clone)]
pub(crate) struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reactivate-or-insert inside one transaction. The partial unique
    /// index `likes_one_active_per_pair` arbitrates concurrent callers:
    /// the loser's statement fails with a unique violation instead of
    /// producing a second active row.
    async fn toggle_active(&self, user_id: i64, post_id: i64) -> Result<Like, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_like_db_error)?;

        let reactivated = sqlx::query_as::<_, LikeRow>(
            r#"
            UPDATE likes
            SET active = TRUE
            WHERE id = (
                SELECT id FROM likes
                WHERE user_id = $1 AND post_id = $2 AND active = FALSE
                ORDER BY id
                LIMIT 1
            )
            RETURNING id, user_id, post_id, active, created_at
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_like_db_error)?;

        let row = match reactivated {
            Some(row) => row,
            None => {
                sqlx::query_as::<_, LikeRow>(
                    r#"
                    INSERT INTO likes (user_id, post_id, active)
                    VALUES ($1, $2, TRUE)
                    RETURNING id, user_id, post_id, active, created_at
                    "#,
                )
                .bind(user_id)
                .bind(post_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_like_db_error)?
            }
        };

        tx.commit().await.map_err(map_like_db_error)?;

        Ok(row.into())
    }

    async fn fetch_active(&self, user_id: i64, post_id: i64) -> Result<Option<Like>, DomainError> {
        let row = sqlx::query_as::<_, LikeRow>(
            r#"
            SELECT id, user_id, post_id, active, created_at
            FROM likes
            WHERE user_id = $1 AND post_id = $2 AND active = TRUE
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_like_db_error)?;

        Ok(row.map(Like::from))
    }
}

#[derive(sqlx::FromRow)]
struct LikeRow {
    id: i64,
    user_id: i64,
    post_id: i64,
    active: bool,
    created_at: DateTime<Utc>,
}

impl From<LikeRow> for Like {
    fn from(row: LikeRow) -> Self {
        Like {
            id: row.id,
            user_id: row.user_id,
            post_id: row.post_id,
            active: row.active,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostLikerRow {
    username: String,
    user_id: i64,
    likes_id: i64,
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn upsert_active(&self, user_id: i64, post_id: i64) -> Result<Like, DomainError> {
        match self.toggle_active(user_id, post_id).await {
            // Lost the race against a concurrent like of the same pair.
            // The winner's row satisfies the request.
            Err(DomainError::AlreadyExists(_)) => self
                .fetch_active(user_id, post_id)
                .await?
                .ok_or_else(|| {
                    DomainError::Storage("active like vanished after unique violation".to_string())
                }),
            other => other,
        }
    }

    async fn deactivate(&self, user_id: i64, post_id: i64) -> Result<(), DomainError> {
        // Idempotent: zero affected rows is still success.
        sqlx::query(
            r#"
            UPDATE likes
            SET active = FALSE
            WHERE user_id = $1 AND post_id = $2 AND active = TRUE
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&self.pool)
        .await
        .map_err(map_like_db_error)?;

        Ok(())
    }

    async fn active_likers(&self, post_id: i64) -> Result<Vec<PostLiker>, DomainError> {
        let rows = sqlx::query_as::<_, PostLikerRow>(
            r#"
            SELECT users.username, users.id AS user_id, likes.id AS likes_id
            FROM likes
            INNER JOIN users ON likes.user_id = users.id
            WHERE likes.post_id = $1 AND likes.active = TRUE
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_like_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| PostLiker {
                username: row.username,
                user_id: row.user_id,
                likes_id: row.likes_id,
            })
            .collect())
    }
}

fn map_like_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23505")
    {
        return DomainError::AlreadyExists("like".to_string());
    }
    DomainError::Storage(err.to_string())
}
