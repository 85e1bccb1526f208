use serde::Serialize;
use utoipa::ToSchema;

pub(crate) mod auth;
pub(crate) mod likes;
pub(crate) mod posts;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct MessageDto {
    pub(crate) message: String,
}

impl MessageDto {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
