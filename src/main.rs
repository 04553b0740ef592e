mod config;
mod db;
mod notify;
mod pipeline;
mod routes;
mod state;
mod storage;
mod templates;
mod validate;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "balabite_waitlist=info,tower_http=info".into()),
        )
        .init();

    let config = config::Config::from_env()?;
    let config = Arc::new(config);

    crate::storage::ensure_backup_dir(&config.backup_dir)?;

    let store = db::Store::from_config(&config);
    store.run_startup_migrations().await;

    let notifier = notify::Notifier::from_config(&config);

    let state = Arc::new(state::AppState {
        config: config.clone(),
        store,
        notifier,
    });

    let app = Router::new()
        .route("/api/waitlist", post(routes::join_waitlist))
        .route("/api/guest-waitlist", post(routes::join_guest_waitlist))
        .route("/api/restaurant-count", get(routes::restaurant_count))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("BalaBite waitlist service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
