use crate::data::post_repository::{NewPost, PostRepository};
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post};

pub(crate) struct PostService<U: UserRepository, P: PostRepository> {
    users: U,
    posts: P,
}

impl<U: UserRepository, P: PostRepository> PostService<U, P> {
    pub(crate) fn new(users: U, posts: P) -> Self {
        Self { users, posts }
    }

    /// The user-exists check runs before the insert so a missing author
    /// surfaces as a client error, not a store exception. The window
    /// between check and insert is accepted: user deletion is out of
    /// scope, and the foreign key still backstops it.
    pub(crate) async fn create_post(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let req = req.validate()?;

        if !self.users.user_exists(req.user_id).await? {
            return Err(DomainError::ReferentialIntegrity { entity: "User" });
        }

        self.posts
            .create_post(NewPost {
                title: req.title,
                content: req.content,
                user_id: req.user_id,
            })
            .await
    }

    /// An empty result is not an error here; the handler decides how to
    /// report the no-content condition.
    pub(crate) async fn posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        self.posts.posts_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::PostService;
    use crate::data::post_repository::{NewPost, PostRepository};
    use crate::data::user_repository::{NewUser, UserCredentials, UserRepository};
    use crate::domain::error::DomainError;
    use crate::domain::post::{CreatePostRequest, Post};
    use crate::domain::user::User;

    #[derive(Clone)]
    struct FakeUserRepo {
        known_user_id: Option<i64>,
    }

    #[async_trait]
    impl UserRepository for FakeUserRepo {
        async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
            User::new(1, input.username, Utc::now())
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<UserCredentials>, DomainError> {
            Ok(None)
        }

        async fn user_exists(&self, user_id: i64) -> Result<bool, DomainError> {
            Ok(self.known_user_id == Some(user_id))
        }
    }

    #[derive(Clone)]
    struct FakePostRepo {
        created_input: Arc<Mutex<Option<NewPost>>>,
        list_result: Arc<Mutex<Vec<Post>>>,
    }

    impl FakePostRepo {
        fn new() -> Self {
            Self {
                created_input: Arc::new(Mutex::new(None)),
                list_result: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl PostRepository for FakePostRepo {
        async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Post::new(1, input.title, input.content, input.user_id, Utc::now())
        }

        async fn posts_by_user(&self, _user_id: i64) -> Result<Vec<Post>, DomainError> {
            Ok(self
                .list_result
                .lock()
                .expect("list_result mutex poisoned")
                .clone())
        }
    }

    #[tokio::test]
    async fn create_post_rejects_unknown_user() {
        let service = PostService::new(FakeUserRepo { known_user_id: None }, FakePostRepo::new());

        let req = CreatePostRequest {
            title: "title".to_string(),
            content: "content".to_string(),
            user_id: 7,
        };

        let err = service
            .create_post(req)
            .await
            .expect_err("create must fail");
        assert!(matches!(err, DomainError::ReferentialIntegrity { .. }));
    }

    #[tokio::test]
    async fn create_post_inserts_for_known_user() {
        let posts = FakePostRepo::new();
        let service = PostService::new(
            FakeUserRepo {
                known_user_id: Some(7),
            },
            posts.clone(),
        );

        let req = CreatePostRequest {
            title: "  title  ".to_string(),
            content: "content".to_string(),
            user_id: 7,
        };

        let post = service.create_post(req).await.expect("create must succeed");
        assert_eq!(post.user_id, 7);
        assert_eq!(post.title, "title");

        let created = posts
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .take()
            .expect("create_post must be called");
        assert_eq!(created.user_id, 7);
    }

    #[tokio::test]
    async fn posts_by_user_passes_through_empty_result() {
        let service = PostService::new(
            FakeUserRepo {
                known_user_id: Some(7),
            },
            FakePostRepo::new(),
        );

        let posts = service.posts_by_user(7).await.expect("list must succeed");
        assert!(posts.is_empty());
    }
}
