pub mod clock;
pub mod date_parser;
pub mod timestamp_resolver;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_parser::parse_calendar_date;
pub use timestamp_resolver::{
    format_rfc1123, InputKind, Resolution, ResolveError, TimestampResolver, RFC1123_FORMAT,
};
