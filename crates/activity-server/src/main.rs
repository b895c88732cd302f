//! Activity Server
//!
//! Serves the activity catalog API and the WASM frontend.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use activity_server::{router, ActivityStore, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    let store = ActivityStore::seeded();
    tracing::info!("Loaded {} activities", store.catalog().len());

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "⚠ Static directory {} not found - frontend disabled",
            config.static_dir.display()
        );
        tracing::warn!(
            "  Build it with: trunk build --dist static --public-url /static/ \
             crates/activity-web/index.html"
        );
    }
    tracing::info!("Serving static files from {}", config.static_dir.display());

    let app = router(AppState::new(store), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("activity-server running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                       - Health check");
    tracing::info!("  GET  /activities                   - Activity catalog");
    tracing::info!("  POST /activities/{{name}}/signup     - Sign up (?email=)");
    tracing::info!("  GET  /static/index.html            - Frontend");

    axum::serve(listener, app).await?;

    Ok(())
}
