//! The fixed UTC+8 offset every conversion is anchored to.
//!
//! Nothing else in the crate names an offset; naive values become instants
//! (and back) only through [`anchor`] and [`localize`].

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::error::{Result, TimeError};
use crate::utils::logging::log_range_error;

/// Seconds east of UTC.
pub const OFFSET_SECONDS: i32 = 8 * 3600;

/// Milliseconds east of UTC, for timestamp arithmetic.
pub const OFFSET_MILLIS: i64 = OFFSET_SECONDS as i64 * 1000;

/// The UTC+08:00 offset.
pub const UTC8: FixedOffset = match FixedOffset::east_opt(OFFSET_SECONDS) {
    Some(offset) => offset,
    None => unreachable!(),
};

/// Interprets a naive date-time as wall-clock time at UTC+8.
pub fn anchor(local: &NaiveDateTime) -> Result<DateTime<Utc>> {
    match UTC8.from_local_datetime(local).single() {
        Some(zoned) => Ok(zoned.with_timezone(&Utc)),
        None => {
            let message = format!("{} at {} has no instant", local, UTC8);
            log_range_error("anchor", &message);
            Err(TimeError::OutOfRange(message))
        }
    }
}

/// Wall-clock time at UTC+8 for an instant.
///
/// Fails for the last eight hours of chrono's range, whose local time would
/// pass `NaiveDateTime::MAX`.
pub fn localize(instant: &DateTime<Utc>) -> Result<NaiveDateTime> {
    match instant.naive_utc().checked_add_offset(UTC8) {
        Some(local) => Ok(local),
        None => {
            let message = format!("{} has no wall-clock time at {}", instant, UTC8);
            log_range_error("localize", &message);
            Err(TimeError::OutOfRange(message))
        }
    }
}
