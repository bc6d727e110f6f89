//! Epoch-millisecond timestamps.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::instant::start_of_day;
use crate::error::{Result, TimeError};
use crate::utils::logging::log_range_error;
use crate::zone;

/// Epoch milliseconds of the UTC+8 start of `date`.
pub fn date_to_timestamp(date: &NaiveDate) -> i64 {
    date_time_to_timestamp(&start_of_day(date))
}

/// Epoch milliseconds of a UTC+8 wall-clock date-time.
///
/// Sub-millisecond precision is dropped.
pub fn date_time_to_timestamp(date_time: &NaiveDateTime) -> i64 {
    // chrono's range in milliseconds is far inside i64, so the shift cannot overflow
    date_time.and_utc().timestamp_millis() - zone::OFFSET_MILLIS
}

/// Calendar date at UTC+8 for epoch milliseconds.
pub fn timestamp_to_date(timestamp: i64) -> Result<NaiveDate> {
    timestamp_to_date_time(timestamp).map(|date_time| date_time.date())
}

/// Wall-clock date-time at UTC+8 for epoch milliseconds.
pub fn timestamp_to_date_time(timestamp: i64) -> Result<NaiveDateTime> {
    match Utc.timestamp_millis_opt(timestamp).single() {
        Some(instant) => zone::localize(&instant),
        None => {
            let message = format!("timestamp {}ms", timestamp);
            log_range_error("timestamp_to_date_time", &message);
            Err(TimeError::OutOfRange(message))
        }
    }
}
