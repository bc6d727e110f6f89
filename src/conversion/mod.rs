//! Stateless conversions between instants, naive date-times, naive dates,
//! strings and epoch-millisecond timestamps.
//!
//! Every function anchors naive values at UTC+8 (see [`crate::zone`]).

pub mod instant;
pub mod month;
pub mod text;
pub mod timestamp;

pub use instant::{date_time_to_instant, date_to_instant, instant_to_date, instant_to_date_time};
pub use month::{first_moment_of_month, last_moment_of_month};
pub use text::{instant_to_string, string_to_date, string_to_date_time, string_to_instant};
pub use timestamp::{date_time_to_timestamp, date_to_timestamp, timestamp_to_date, timestamp_to_date_time};
