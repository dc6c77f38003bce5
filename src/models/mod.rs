pub mod config;
pub mod timestamp;

pub use config::{ServerConfig, DEFAULT_BIND_ADDR};
pub use timestamp::{ErrorResult, TimestampResult, UnixMillis};
