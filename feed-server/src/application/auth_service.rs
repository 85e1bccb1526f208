use std::sync::Arc;

use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{LoginRequest, SignupRequest};
use crate::infrastructure::jwt::JwtService;
use crate::infrastructure::password::{hash_password, verify_password};

pub(crate) struct AuthService<R: UserRepository> {
    repo: R,
    jwt: Arc<JwtService>,
}

impl<R: UserRepository> AuthService<R> {
    pub(crate) fn new(repo: R, jwt: Arc<JwtService>) -> Self {
        Self { repo, jwt }
    }

    /// Registers a new user. The username pre-check surfaces the taken
    /// username as a client error; the unique constraint in the store is
    /// the backstop for the check-then-insert race.
    pub(crate) async fn signup(&self, req: SignupRequest) -> Result<(), DomainError> {
        let req = req.validate()?;

        if self.repo.find_by_username(&req.username).await?.is_some() {
            return Err(DomainError::AlreadyExists("username".to_string()));
        }

        let password_hash =
            hash_password(&req.password).map_err(|err| DomainError::Unexpected(err.to_string()))?;

        self.repo
            .create_user(NewUser {
                username: req.username,
                password_hash,
            })
            .await?;

        Ok(())
    }

    /// Unknown username and wrong password are distinct outcomes:
    /// `NotFound` and `InvalidCredentials` map to different responses.
    pub(crate) async fn login(&self, req: LoginRequest) -> Result<String, DomainError> {
        let req = req.validate()?;

        let creds = self
            .repo
            .find_by_username(&req.username)
            .await?
            .ok_or_else(|| DomainError::NotFound("user".to_string()))?;

        if !verify_password(&req.password, &creds.password_hash) {
            return Err(DomainError::InvalidCredentials);
        }

        self.jwt
            .generate_token(creds.user.id, &creds.user.username)
            .map_err(|err| DomainError::Unexpected(err.to_string()))
    }
}
