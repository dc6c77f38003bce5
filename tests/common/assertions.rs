//! Assertion helpers for tests.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is JSON
pub fn assert_json_content_type(response: &TestResponse) {
    assert_eq!(
        response.content_type(),
        Some("application/json"),
        "Expected Content-Type: application/json"
    );
}

/// Assert a successful timestamp response and return `(unix, utc)`
pub fn assert_timestamp(response: &TestResponse) -> (serde_json::Value, String) {
    assert_ok(response);
    assert_json_content_type(response);

    let json: serde_json::Value = response.json();
    let object = json.as_object().expect("Expected a JSON object");
    assert_eq!(
        object.len(),
        2,
        "Expected exactly unix and utc, got {}",
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["unix"].is_number(), "Expected unix to be a number");
    let utc = json["utc"]
        .as_str()
        .expect("Expected utc to be a string")
        .to_string();

    // utc must always be a parseable RFC 1123 GMT string
    assert!(utc.ends_with(" GMT"), "Expected GMT suffix in {utc}");
    DateTime::parse_from_rfc2822(&utc).expect("utc should parse as RFC 1123");

    (json["unix"].clone(), utc)
}

/// Assert the 400 Invalid Date response
pub fn assert_invalid_date(response: &TestResponse) {
    assert_status(response, StatusCode::BAD_REQUEST);
    assert_json_content_type(response);
    let json: serde_json::Value = response.json();
    assert_eq!(json, serde_json::json!({"error": "Invalid Date"}));
}

/// Parse an RFC 1123 `utc` field back into an instant
pub fn parse_utc(utc: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc2822(utc)
        .expect("utc should parse as RFC 1123")
        .with_timezone(&Utc)
}
