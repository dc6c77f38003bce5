use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::TimestampResolver;

/// Get the current time
///
/// Equivalent to `/api/timestamp/{input}` with no input.
#[utoipa::path(
    get,
    path = "/api/timestamp",
    responses(
        (status = 200, description = "Current instant", body = crate::models::TimestampResult),
    ),
    tag = "Timestamp"
)]
pub async fn handle_timestamp_now(
    State(resolver): State<Arc<TimestampResolver>>,
) -> Result<impl IntoResponse, ApiError> {
    resolve(&resolver, None)
}

/// Convert a date string or epoch milliseconds
///
/// A calendar date resolves to midnight UTC of that date. A decimal number is
/// read as milliseconds since the Unix epoch and echoed back in `unix`.
#[utoipa::path(
    get,
    path = "/api/timestamp/{input}",
    responses(
        (status = 200, description = "Resolved instant", body = crate::models::TimestampResult),
        (status = 400, description = "Neither a date nor a number", body = crate::models::ErrorResult),
    ),
    params(
        ("input" = String, Path, description = "Date (e.g. '2015-10-21') or epoch milliseconds (e.g. '1451001600000')"),
    ),
    tag = "Timestamp"
)]
pub async fn handle_timestamp(
    State(resolver): State<Arc<TimestampResolver>>,
    input: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    match input {
        Ok(Path(input)) => resolve(&resolver, Some(&input)),
        Err(rejection) => {
            // Not valid UTF-8 after percent-decoding
            tracing::debug!(%rejection, "Undecodable timestamp input");
            Err(ApiError::InvalidDate)
        }
    }
}

fn resolve(
    resolver: &TimestampResolver,
    input: Option<&str>,
) -> Result<Json<crate::models::TimestampResult>, ApiError> {
    match resolver.resolve(input) {
        Ok(resolution) => {
            tracing::info!(
                input = input.unwrap_or(""),
                kind = %resolution.kind,
                unix = %resolution.result.unix,
                utc = %resolution.result.utc,
                "Timestamp resolved"
            );
            Ok(Json(resolution.result))
        }
        Err(e) => {
            tracing::debug!(input = input.unwrap_or(""), "Input is neither a date nor a number");
            Err(e.into())
        }
    }
}
