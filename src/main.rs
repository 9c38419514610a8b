use classhub::config::bootstrap::BootstrapConfig;
use classhub::modules::users::store::ensure_super_admin;
use classhub::router::init_router;
use classhub::state::init_app_state;
use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state().await;

    match BootstrapConfig::from_env() {
        Some(config) => {
            if let Err(e) =
                ensure_super_admin(&state.db, &config, state.auth_config.bcrypt_cost).await
            {
                tracing::error!(error = %e, "failed to bootstrap super admin");
                std::process::exit(1);
            }
        }
        None => {
            tracing::warn!("SUPER_ADMIN_* variables not set, skipping super admin bootstrap")
        }
    }

    let app = init_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();
    println!("🚀 Server running on http://localhost:{port}");
    println!("📚 Swagger UI available at http://localhost:{port}/swagger-ui");
    axum::serve(listener, app).await.unwrap();
}
