//! # activity-server
//!
//! Axum server for the activity catalog: serves the catalog, accepts signups
//! and hosts the WASM frontend under `/static`.
//!
//! ```text
//! GET  /                              → /static/index.html
//! GET  /health                        health check
//! GET  /activities                    catalog, name → activity
//! POST /activities/{name}/signup      ?email=<address>
//! GET  /static/*                      frontend assets
//! ```

pub mod config;
pub mod handlers;
pub mod state;
pub mod store;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use config::ServerConfig;
pub use state::AppState;
pub use store::{ActivityStore, StoreError};

use crate::handlers::{health_check, list_activities, root, signup};

/// Build the application router
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
