use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SignupRequest {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl SignupRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let username = normalize_username(&self.username)?;
        if self.password.is_empty() {
            return Err(DomainError::Validation {
                field: "password",
                message: "must not be empty",
            });
        }
        Ok(Self {
            username,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl LoginRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let username = normalize_username(&self.username)?;
        if self.password.is_empty() {
            return Err(DomainError::Validation {
                field: "password",
                message: "must not be empty",
            });
        }
        Ok(Self {
            username,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) created_at: DateTime<Utc>,
}

impl User {
    pub(crate) fn new(
        id: i64,
        username: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::Validation {
                field: "id",
                message: "must be > 0",
            });
        }
        let username = normalize_username(&username.into())?;

        Ok(Self {
            id,
            username,
            created_at,
        })
    }
}

fn normalize_username(username: &str) -> Result<String, DomainError> {
    let username = username.trim();
    if username.is_empty() || username.len() > 64 {
        return Err(DomainError::Validation {
            field: "username",
            message: "must be 1..64 chars",
        });
    }
    Ok(username.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{LoginRequest, SignupRequest, User, normalize_username};

    #[test]
    fn user_new_rejects_non_positive_id() {
        let result = User::new(0, "valid_user", Utc::now());
        assert!(result.is_err());
    }

    #[test]
    fn username_is_trimmed_and_bounded() {
        assert_eq!(normalize_username("  alice  ").expect("must be valid"), "alice");
        assert!(normalize_username("   ").is_err());
        assert!(normalize_username(&"x".repeat(65)).is_err());
    }

    #[test]
    fn signup_rejects_empty_password() {
        let req = SignupRequest {
            username: "alice".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn login_normalizes_username() {
        let req = LoginRequest {
            username: "  alice  ".to_string(),
            password: "pw1".to_string(),
        };
        let validated = req.validate().expect("must be valid");
        assert_eq!(validated.username, "alice");
    }
}
