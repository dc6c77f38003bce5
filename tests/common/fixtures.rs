//! Test fixtures and constants.

use chrono::{DateTime, TimeZone, Utc};

/// Instant used by tests that freeze the clock: 2024-02-29T13:45:30Z
pub fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 29, 13, 45, 30).unwrap()
}

/// `frozen_now()` in epoch milliseconds
pub const FROZEN_NOW_MILLIS: i64 = 1_709_214_330_000;

/// `frozen_now()` in RFC 1123 format
pub const FROZEN_NOW_UTC: &str = "Thu, 29 Feb 2024 13:45:30 GMT";

/// Inputs that are neither dates nor numbers
pub const INVALID_INPUTS: &[&str] = &[
    "not-a-date",
    "freeform-invalid",
    "12:34:",
    "2015-02-30",
    "NaN",
    "hello%20world",
];

/// Date inputs that all name 2015-10-21
pub const DATES_FOR_2015_10_21: &[&str] = &[
    "2015-10-21",
    "2015-10-21T07:28:00",
    "2015-10-21T07:28:00Z",
    "2015-10-21T23:59:59-05:00",
    "2015/10/21",
    "10%2F21%2F2015",
    "October%2021,%202015",
    "21%20Oct%202015",
    "Wed,%2021%20Oct%202015%2007:28:00%20GMT",
    "10%2F21%2F15",
    "2015-10-21%2007:28:00%20GMT",
];
