use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::AuthConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub auth_config: AuthConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        auth_config: AuthConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
