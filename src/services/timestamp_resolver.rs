//! Resolves the optional path input of `/api/timestamp` to an instant.
//!
//! Inputs are tried in a fixed order:
//!
//! 1. absent or empty: the clock's current instant
//! 2. a calendar date: midnight UTC of that date (time-of-day is dropped)
//! 3. a decimal number: milliseconds after the epoch, echoed back verbatim
//! 4. anything else: [`ResolveError::InvalidDate`]

use chrono::{DateTime, Datelike, TimeDelta, Utc};
use std::sync::Arc;
use thiserror::Error;

use super::clock::Clock;
use super::date_parser::parse_calendar_date;
use crate::models::{TimestampResult, UnixMillis};

/// `Wed, 21 Oct 2015 00:00:00 GMT`
pub const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Years that fit the four-digit year of [`RFC1123_FORMAT`].
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Invalid Date")]
    InvalidDate,
}

/// Which rule produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Now,
    CalendarDate,
    EpochMillis,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InputKind::Now => "now",
            InputKind::CalendarDate => "calendar_date",
            InputKind::EpochMillis => "epoch_millis",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub kind: InputKind,
    pub result: TimestampResult,
}

/// Stateless apart from the injected clock; safe to share across requests.
#[derive(Clone)]
pub struct TimestampResolver {
    clock: Arc<dyn Clock>,
}

impl TimestampResolver {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn resolve(&self, input: Option<&str>) -> Result<Resolution, ResolveError> {
        let now = self.clock.now();

        let input = match input {
            None | Some("") => {
                return Ok(Resolution {
                    kind: InputKind::Now,
                    result: TimestampResult {
                        unix: UnixMillis::Whole(now.timestamp_millis()),
                        utc: format_rfc1123(now),
                    },
                });
            }
            Some(input) => input,
        };

        if let Some(date) = parse_calendar_date(input, now.date_naive()) {
            let midnight = date
                .and_hms_opt(0, 0, 0)
                .ok_or(ResolveError::InvalidDate)?
                .and_utc();
            ensure_renderable(midnight)?;
            return Ok(Resolution {
                kind: InputKind::CalendarDate,
                result: TimestampResult {
                    unix: UnixMillis::Whole(midnight.timestamp_millis()),
                    utc: format_rfc1123(midnight),
                },
            });
        }

        if let Some(millis) = parse_epoch_millis(input) {
            let instant = instant_from_millis(millis).ok_or(ResolveError::InvalidDate)?;
            ensure_renderable(instant)?;
            return Ok(Resolution {
                kind: InputKind::EpochMillis,
                result: TimestampResult {
                    unix: UnixMillis::from_f64(millis),
                    utc: format_rfc1123(instant),
                },
            });
        }

        Err(ResolveError::InvalidDate)
    }
}

/// Format an instant as `Ddd, DD Mon YYYY HH:MM:SS GMT`.
pub fn format_rfc1123(instant: DateTime<Utc>) -> String {
    instant.format(RFC1123_FORMAT).to_string()
}

/// Decimal number with optional sign, fraction and exponent. `NaN` and
/// infinities are rejected.
fn parse_epoch_millis(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Epoch plus `millis`, with any sub-nanosecond remainder truncated toward zero.
fn instant_from_millis(millis: f64) -> Option<DateTime<Utc>> {
    let whole = millis.trunc();
    if whole.abs() >= i64::MAX as f64 {
        return None;
    }
    let base = DateTime::from_timestamp_millis(whole as i64)?;
    let nanos = ((millis - whole) * 1_000_000.0) as i64;
    base.checked_add_signed(TimeDelta::nanoseconds(nanos))
}

fn ensure_renderable(instant: DateTime<Utc>) -> Result<(), ResolveError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&instant.year()) {
        Ok(())
    } else {
        Err(ResolveError::InvalidDate)
    }
}
