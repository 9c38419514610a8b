use axum::Json;
use axum::extract::State;

use crate::middleware::auth::AuthUser;
use crate::modules::users::store::PgAccountStore;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{LoginRequest, LoginResponse, MessageResponse, SessionInfo};
use super::service::AuthService;

/// Login and receive a session token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Email or password missing", body = MessageResponse),
        (status = 401, description = "Incorrect password", body = MessageResponse),
        (status = 404, description = "No account for that email", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let store = PgAccountStore::new(state.db.clone());
    let response = AuthService::login(&store, dto, &state.auth_config).await?;
    Ok(Json(response))
}

/// Return the claims of the presented session token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Session is valid", body = SessionInfo),
        (status = 401, description = "Missing, invalid, or expired token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn me(auth_user: AuthUser) -> Result<Json<SessionInfo>, AppError> {
    Ok(Json(SessionInfo {
        id: auth_user.user_id()?,
        role: auth_user.role(),
        school_id: auth_user.school_id(),
    }))
}
