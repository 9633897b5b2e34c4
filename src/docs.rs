use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{
    LoginRequest, RefreshTokenRequest, RegisterRequest, SessionResponse, UserResponse,
};
use crate::modules::users::model::{Role, SetRoleRequest};
use crate::provider::model::{Identity, Session};
use crate::response::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health,
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::refresh_token,
        crate::modules::auth::controller::me,
        crate::modules::protected::controller::admin_only,
        crate::modules::protected::controller::user_or_admin,
        crate::modules::users::controller::set_user_role,
    ),
    components(
        schemas(
            ApiResponse,
            RegisterRequest,
            LoginRequest,
            RefreshTokenRequest,
            SetRoleRequest,
            UserResponse,
            SessionResponse,
            Identity,
            Session,
            Role,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Auth", description = "Authentication endpoints backed by the hosted identity provider"),
        (name = "Protected", description = "Role-gated demo endpoints"),
        (name = "Users", description = "Admin user management endpoints")
    ),
    info(
        title = "Authgate API",
        version = "0.1.0",
        description = "Minimal REST API starter built with Rust and Axum that delegates identity to a hosted auth provider.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
