use crate::data::like_repository::LikeRepository;
use crate::domain::error::DomainError;
use crate::domain::like::{Like, PostLiker};

/// Thin orchestration over the like ledger. The one-active-row-per-pair
/// invariant is enforced by the repository's storage engine, so there is
/// nothing to lock here.
pub(crate) struct LikeService<R: LikeRepository> {
    repo: R,
}

impl<R: LikeRepository> LikeService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn like(&self, user_id: i64, post_id: i64) -> Result<Like, DomainError> {
        self.repo.upsert_active(user_id, post_id).await
    }

    pub(crate) async fn unlike(&self, user_id: i64, post_id: i64) -> Result<(), DomainError> {
        self.repo.deactivate(user_id, post_id).await
    }

    pub(crate) async fn likers_of_post(&self, post_id: i64) -> Result<Vec<PostLiker>, DomainError> {
        self.repo.active_likers(post_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::LikeService;
    use crate::data::like_repository::LikeRepository;
    use crate::domain::error::DomainError;
    use crate::domain::like::{Like, PostLiker};

    /// In-memory ledger with the same contract as the Postgres one:
    /// reactivate an inactive row before inserting, never more than one
    /// active row per pair.
    #[derive(Clone)]
    struct FakeLikeRepo {
        rows: Arc<Mutex<Vec<Like>>>,
    }

    impl FakeLikeRepo {
        fn new() -> Self {
            Self {
                rows: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn rows_for_pair(&self, user_id: i64, post_id: i64) -> Vec<Like> {
            self.rows
                .lock()
                .expect("rows mutex poisoned")
                .iter()
                .filter(|row| row.user_id == user_id && row.post_id == post_id)
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl LikeRepository for FakeLikeRepo {
        async fn upsert_active(&self, user_id: i64, post_id: i64) -> Result<Like, DomainError> {
            let mut rows = self.rows.lock().expect("rows mutex poisoned");

            if let Some(active) = rows
                .iter()
                .find(|row| row.user_id == user_id && row.post_id == post_id && row.active)
            {
                return Ok(active.clone());
            }

            if let Some(inactive) = rows
                .iter_mut()
                .find(|row| row.user_id == user_id && row.post_id == post_id && !row.active)
            {
                inactive.active = true;
                return Ok(inactive.clone());
            }

            let like = Like {
                id: rows.len() as i64 + 1,
                user_id,
                post_id,
                active: true,
                created_at: Utc::now(),
            };
            rows.push(like.clone());
            Ok(like)
        }

        async fn deactivate(&self, user_id: i64, post_id: i64) -> Result<(), DomainError> {
            let mut rows = self.rows.lock().expect("rows mutex poisoned");
            for row in rows
                .iter_mut()
                .filter(|row| row.user_id == user_id && row.post_id == post_id)
            {
                row.active = false;
            }
            Ok(())
        }

        async fn active_likers(&self, post_id: i64) -> Result<Vec<PostLiker>, DomainError> {
            Ok(self
                .rows
                .lock()
                .expect("rows mutex poisoned")
                .iter()
                .filter(|row| row.post_id == post_id && row.active)
                .map(|row| PostLiker {
                    username: format!("user{}", row.user_id),
                    user_id: row.user_id,
                    likes_id: row.id,
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn unlike_is_idempotent() {
        let repo = FakeLikeRepo::new();
        let service = LikeService::new(repo.clone());

        service.like(1, 10).await.expect("like must succeed");
        service.unlike(1, 10).await.expect("unlike must succeed");
        service
            .unlike(1, 10)
            .await
            .expect("second unlike must still succeed");

        assert!(repo.rows_for_pair(1, 10).iter().all(|row| !row.active));
    }

    #[tokio::test]
    async fn relike_reuses_the_historical_row() {
        let repo = FakeLikeRepo::new();
        let service = LikeService::new(repo.clone());

        let first = service.like(1, 10).await.expect("like must succeed");
        service.unlike(1, 10).await.expect("unlike must succeed");
        let second = service.like(1, 10).await.expect("re-like must succeed");

        assert_eq!(first.id, second.id);
        assert_eq!(repo.rows_for_pair(1, 10).len(), 1);
    }

    #[tokio::test]
    async fn at_most_one_active_row_per_pair() {
        let repo = FakeLikeRepo::new();
        let service = LikeService::new(repo.clone());

        for _ in 0..3 {
            service.like(1, 10).await.expect("like must succeed");
            service.unlike(1, 10).await.expect("unlike must succeed");
        }
        service.like(1, 10).await.expect("like must succeed");
        service.like(1, 10).await.expect("double like must succeed");

        let active = repo
            .rows_for_pair(1, 10)
            .iter()
            .filter(|row| row.active)
            .count();
        assert_eq!(active, 1);
    }

    #[tokio::test]
    async fn likers_reports_only_active_rows() {
        let repo = FakeLikeRepo::new();
        let service = LikeService::new(repo.clone());

        service.like(1, 10).await.expect("like must succeed");
        service.like(2, 10).await.expect("like must succeed");
        service.like(3, 11).await.expect("like must succeed");
        service.unlike(2, 10).await.expect("unlike must succeed");

        let likers = service
            .likers_of_post(10)
            .await
            .expect("likers must succeed");
        assert_eq!(likers.len(), 1);
        assert_eq!(likers[0].user_id, 1);
    }
}
