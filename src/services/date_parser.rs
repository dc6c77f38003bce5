//! Locale-independent parsing of human-written dates.
//!
//! Only the calendar date survives parsing. Time-of-day and offsets are
//! accepted so that full timestamps parse, but they are discarded; the date is
//! the one written in the input, not its UTC equivalent.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Year-first date-time layouts without an offset.
const ISO_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Year-first date-time layouts with a numeric offset that RFC 3339 rejects
/// (e.g. `+0200`).
const ISO_OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const ISO_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Trailing zone names that mean UTC on an otherwise offset-less date-time.
const UTC_DESIGNATORS: &[&str] = &["GMT", "UTC", "Z"];

/// Month and year only, parsed with a `1 ` prefix for the first of the month.
const MONTH_YEAR_FORMATS: &[&str] = &["%d %B %Y", "%d %B, %Y"];

/// Month-first, day-first and textual layouts. `%B` and `%A` accept both the
/// full and abbreviated English names, case-insensitively.
///
/// chrono lets `%Y` take fewer than four digits and a space match no space at
/// all, so `October 2015` fits `%B %d %Y` as day 20 of year 15. Matches are
/// only kept once [`settle_year`] finds their year written in the input.
const TEXT_DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%B %d %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
];

const TEXT_DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%d %B %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%A, %d %B %Y",
    "%A %d %B %Y",
    "%A, %B %d, %Y",
    "%A %B %d %Y",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Parse `input` as a calendar date.
///
/// Time-only input (`07:28`) resolves to `today`. Strings made only of digits
/// are never dates so they remain available to numeric parsing.
pub fn parse_calendar_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() || input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if starts_with_year(input) {
        return parse_year_first(input);
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.date_naive());
    }

    parse_text(input, today)
}

fn parse_text(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let first_of_month = format!("1 {input}");
    first_match(&first_of_month, MONTH_YEAR_FORMATS, NaiveDate::parse_from_str)
        .filter(|date| writes_full_year(input, date.year()))
        .or_else(|| {
            first_text_match(input, TEXT_DATETIME_FORMATS, |s, f| {
                NaiveDateTime::parse_from_str(s, f).map(|dt| dt.date())
            })
        })
        .or_else(|| first_text_match(input, TEXT_DATE_FORMATS, NaiveDate::parse_from_str))
        .or_else(|| {
            first_match(input, TIME_FORMATS, NaiveTime::parse_from_str).map(|_| today)
        })
}

fn parse_year_first(input: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }

    if let Some(date) = first_match(input, ISO_OFFSET_FORMATS, |s, f| {
        DateTime::parse_from_str(s, f).map(|dt| dt.date_naive())
    }) {
        return Some(date);
    }

    let input = strip_utc_designator(input);
    first_match(input, ISO_DATETIME_FORMATS, |s, f| {
        NaiveDateTime::parse_from_str(s, f).map(|dt| dt.date())
    })
    .or_else(|| first_match(input, ISO_DATE_FORMATS, NaiveDate::parse_from_str))
    .or_else(|| parse_year_month(input))
}

/// `2015-10-21 07:28:00 GMT` -> `2015-10-21 07:28:00`
fn strip_utc_designator(input: &str) -> &str {
    UTC_DESIGNATORS
        .iter()
        .find_map(|designator| input.strip_suffix(designator))
        .map(str::trim_end)
        .unwrap_or(input)
}

/// `YYYY-MM` means the first of that month.
fn parse_year_month(input: &str) -> Option<NaiveDate> {
    let (year, month) = input.split_once('-')?;
    if year.len() != 4 || month.is_empty() || month.len() > 2 {
        return None;
    }
    if !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

fn starts_with_year(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() > 4
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && matches!(bytes[4], b'-' | b'/' | b'.')
}

/// Keep a textual match only if its year appears in `input` as four digits,
/// or as two digits read the invariant-culture way: `00`-`49` is 20xx and
/// `50`-`99` is 19xx.
fn settle_year(input: &str, date: NaiveDate) -> Option<NaiveDate> {
    let year = date.year();
    if writes_full_year(input, year) {
        return Some(date);
    }
    let two_digits = digit_runs(input).any(|run| run.len() == 2 && run.parse::<i32>() == Ok(year));
    if !(0..100).contains(&year) || !two_digits {
        return None;
    }
    let century = if year < 50 { 2000 } else { 1900 };
    date.with_year(century + year)
}

fn writes_full_year(input: &str, year: i32) -> bool {
    digit_runs(input).any(|run| run.len() == 4 && run.parse::<i32>() == Ok(year))
}

fn digit_runs(input: &str) -> impl Iterator<Item = &str> {
    input.split(|c: char| !c.is_ascii_digit())
}

fn first_text_match<E>(
    input: &str,
    formats: &[&str],
    parse: impl Fn(&str, &str) -> Result<NaiveDate, E>,
) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|format| settle_year(input, parse(input, format).ok()?))
}

fn first_match<T, E>(
    input: &str,
    formats: &[&str],
    parse: impl Fn(&str, &str) -> Result<T, E>,
) -> Option<T> {
    formats.iter().find_map(|format| parse(input, format).ok())
}
