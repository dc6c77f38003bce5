use serde::Serialize;
use utoipa::ToSchema;

/// Milliseconds since the Unix epoch as reported to the client.
///
/// Numeric input is echoed back verbatim, so the value may carry a fraction.
/// Whole values serialize without a trailing `.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UnixMillis {
    Whole(i64),
    Fractional(f64),
}

impl UnixMillis {
    /// Pick the narrowest representation for a parsed number.
    pub fn from_f64(value: f64) -> Self {
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            UnixMillis::Whole(value as i64)
        } else {
            UnixMillis::Fractional(value)
        }
    }
}

impl std::fmt::Display for UnixMillis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnixMillis::Whole(ms) => write!(f, "{ms}"),
            UnixMillis::Fractional(ms) => write!(f, "{ms}"),
        }
    }
}

/// Response from the /api/timestamp endpoint
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimestampResult {
    /// Milliseconds since 1970-01-01T00:00:00Z
    #[schema(value_type = f64, example = 1445385600000_i64)]
    pub unix: UnixMillis,
    /// The same instant in RFC 1123 format, always GMT
    #[schema(example = "Wed, 21 Oct 2015 00:00:00 GMT")]
    pub utc: String,
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ErrorResult {
    #[schema(example = "Invalid Date")]
    pub error: String,
}
