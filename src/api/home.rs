use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use crate::assets::AssetLoader;
use crate::error::ApiError;

/// Landing page with usage instructions
pub async fn handle_home(
    State(assets): State<Arc<AssetLoader>>,
) -> Result<impl IntoResponse, ApiError> {
    let page = assets.read_home_page().map_err(|e| {
        tracing::error!(%e, "Failed to read home page");
        ApiError::Internal(e.to_string())
    })?;

    Ok(Html(page))
}

/// Fallback for unknown routes
pub async fn handle_not_found() -> ApiError {
    ApiError::NotFound
}
