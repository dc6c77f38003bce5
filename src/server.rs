//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::services::{Clock, TimestampResolver};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Timestamp Microservice API",
        description = "Converts between date strings, Unix epoch milliseconds and RFC 1123 UTC strings",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_timestamp_now, api::handle_timestamp),
    components(schemas(crate::models::TimestampResult, crate::models::ErrorResult)),
    tags((name = "Timestamp", description = "Timestamp conversion"))
)]
pub struct ApiDoc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<TimestampResolver>,
    pub assets: Arc<AssetLoader>,
}

/// Create application state from an asset loader and a clock.
pub fn create_app_state(asset_loader: Arc<AssetLoader>, clock: Arc<dyn Clock>) -> AppState {
    AppState {
        resolver: Arc::new(TimestampResolver::new(clock)),
        assets: asset_loader,
    }
}

/// Build the router with all endpoints and middleware.
///
/// `/api/timestamp` has no input; `/api/timestamp/{*input}` captures the
/// rest of the path, slashes included.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route("/api/timestamp", get(handle_timestamp_now))
        .route("/api/timestamp/*input", get(handle_timestamp))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .fallback(api::handle_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Build the complete service used by production and tests.
pub fn build_app(state: AppState) -> NormalizePath<Router> {
    normalize(build_router(state))
}

/// Put a router behind trailing-slash normalisation, so `/api/timestamp/`
/// is handled as "no input".
///
/// Path normalisation has to run before routing, which is why it wraps the
/// router instead of being added with `Router::layer`.
pub fn normalize(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_home(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_home(State(state.assets)).await
}

async fn handle_timestamp_now(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_timestamp_now(State(state.resolver)).await
}

async fn handle_timestamp(
    State(state): State<AppState>,
    input: Result<Path<String>, axum::extract::rejection::PathRejection>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_timestamp(State(state.resolver), input).await
}
