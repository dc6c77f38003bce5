//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use timestamp_service::assets::AssetLoader;
use timestamp_service::server::{build_app, create_app_state, AppState};
use timestamp_service::services::{Clock, FixedClock, SystemClock};

/// Test application wrapping the same service as production
pub struct TestApp {
    app: NormalizePath<Router>,
}

impl TestApp {
    /// Create a new test application using the system clock and embedded assets
    pub fn new() -> Self {
        Self::build(None, Arc::new(SystemClock))
    }

    /// Create a test application whose clock is frozen at `now`
    pub fn at(now: DateTime<Utc>) -> Self {
        Self::build(None, Arc::new(FixedClock(now)))
    }

    /// Create a test application serving the landing page from `path`
    pub fn with_home_page(path: PathBuf) -> Self {
        Self::build(Some(path), Arc::new(SystemClock))
    }

    /// Create application state for custom router configuration
    pub fn create_state() -> AppState {
        create_app_state(Arc::new(AssetLoader::new(None)), Arc::new(SystemClock))
    }

    fn build(home_page: Option<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        let asset_loader = Arc::new(AssetLoader::new(home_page));
        let state = create_app_state(asset_loader, clock);

        // Same service as production
        Self {
            app: build_app(state),
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the service
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get the Content-Type header
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
    }
}
