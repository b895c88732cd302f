//! HTTP Handlers

use activity_core::{ActivityCatalog, ErrorBody, SignupResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::store::StoreError;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub activities: usize,
}

#[derive(Debug, Deserialize)]
pub struct SignupParams {
    #[serde(default)]
    pub email: Option<String>,
}

/// Error reply in the `{"detail": ...}` shape the frontend reads
pub type ApiError = (StatusCode, Json<ErrorBody>);

fn store_error(err: &StoreError) -> ApiError {
    let status = match err {
        StoreError::ActivityNotFound => StatusCode::NOT_FOUND,
        StoreError::AlreadySignedUp | StoreError::ActivityFull => StatusCode::BAD_REQUEST,
        StoreError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(ErrorBody::new(err.to_string())))
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let activities = state.store.read().await.catalog().len();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        activities,
    })
}

/// Send the browser to the frontend
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// Full activity catalog
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityCatalog> {
    Json(state.store.read().await.catalog().clone())
}

/// Sign a student up for an activity
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<Json<SignupResponse>, ApiError> {
    let email = params.email.unwrap_or_default();

    let message = state
        .store
        .write()
        .await
        .signup(&activity_name, &email)
        .map_err(|e| {
            tracing::warn!(activity = %activity_name, "Signup rejected: {}", e);
            store_error(&e)
        })?;

    tracing::info!("{}", message);
    Ok(Json(SignupResponse::new(message)))
}
