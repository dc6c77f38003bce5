pub mod home;
pub mod timestamp;

pub use home::{handle_home, handle_not_found};
pub use timestamp::{handle_timestamp, handle_timestamp_now};
pub use timestamp::{__path_handle_timestamp, __path_handle_timestamp_now};
