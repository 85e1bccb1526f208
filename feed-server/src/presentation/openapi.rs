use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::handlers::MessageDto;
use crate::presentation::handlers::auth::{LoginDto, LoginResponseDto, SignupDto, UsernameDto};
use crate::presentation::handlers::likes::{CreateLikeDto, LikeDto, PostLikerDto};
use crate::presentation::handlers::posts::{CreatePostDto, PostDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::auth::signup,
        crate::presentation::handlers::auth::login,
        crate::presentation::handlers::auth::username,
        crate::presentation::handlers::posts::create_post,
        crate::presentation::handlers::posts::posts_by_user,
        crate::presentation::handlers::likes::create_like,
        crate::presentation::handlers::likes::remove_like,
        crate::presentation::handlers::likes::likers_of_post
    ),
    components(
        schemas(
            SignupDto,
            LoginDto,
            LoginResponseDto,
            UsernameDto,
            MessageDto,
            CreatePostDto,
            PostDto,
            CreateLikeDto,
            LikeDto,
            PostLikerDto
        )
    ),
    tags(
        (name = "auth", description = "Signup, login and token identity"),
        (name = "posts", description = "Post endpoints"),
        (name = "likes", description = "Like/unlike endpoints")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        // The token travels as the raw Authorization header value.
        components.add_security_scheme(
            "token_auth",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
        );
        openapi.components = Some(components);
    }
}
