use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{
    Claims, LoginRequest, LoginResponse, MessageResponse, SessionInfo, SessionUser,
};
use crate::modules::users::model::{AccountStatus, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::me,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            SessionUser,
            SessionInfo,
            MessageResponse,
            Claims,
            UserRole,
            AccountStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and session verification")
    ),
    info(
        title = "Classhub API",
        version = "0.1.0",
        description = "School-management backend with JWT-based session tokens.",
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
            );
        }
    }
}
