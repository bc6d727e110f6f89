//! Instants to naive values and back, always at UTC+8.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::Result;
use crate::zone;

/// Wall-clock date-time at UTC+8 for an instant.
pub fn instant_to_date_time(instant: &DateTime<Utc>) -> Result<NaiveDateTime> {
    zone::localize(instant)
}

/// The instant a UTC+8 wall-clock date-time denotes.
pub fn date_time_to_instant(date_time: &NaiveDateTime) -> Result<DateTime<Utc>> {
    zone::anchor(date_time)
}

/// The instant at which `date` starts (00:00:00) at UTC+8.
pub fn date_to_instant(date: &NaiveDate) -> Result<DateTime<Utc>> {
    zone::anchor(&start_of_day(date))
}

/// Calendar date at UTC+8 for an instant.
pub fn instant_to_date(instant: &DateTime<Utc>) -> Result<NaiveDate> {
    zone::localize(instant).map(|local| local.date())
}

pub(crate) fn start_of_day(date: &NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_instant_to_date_time_adds_eight_hours() {
        let instant = Utc.with_ymd_and_hms(2021, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(
            instant_to_date_time(&instant).unwrap(),
            ymd(2021, 5, 1).and_hms_opt(8, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_date_time_to_instant_keeps_nanoseconds() {
        let local = ymd(2021, 5, 1).and_hms_nano_opt(9, 15, 30, 123_456_789).unwrap();
        let instant = date_time_to_instant(&local).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2021, 5, 1, 1, 15, 30).unwrap() + chrono::Duration::nanoseconds(123_456_789));
    }

    #[test]
    fn test_date_to_instant_is_previous_utc_day() {
        let instant = date_to_instant(&ymd(2021, 1, 1)).unwrap();
        assert_eq!(instant.to_rfc3339(), "2020-12-31T16:00:00+00:00");
    }

    #[test]
    fn test_instant_to_date_truncates_time() {
        // 15:59 UTC is still the same day at +08:00, 16:00 is the next
        let before = Utc.with_ymd_and_hms(2021, 3, 10, 15, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2021, 3, 10, 16, 0, 0).unwrap();
        assert_eq!(instant_to_date(&before).unwrap(), ymd(2021, 3, 10));
        assert_eq!(instant_to_date(&after).unwrap(), ymd(2021, 3, 11));
    }

    #[test]
    fn test_instant_to_date_time_at_range_end_fails() {
        assert!(instant_to_date_time(&DateTime::<Utc>::MAX_UTC).is_err());
        assert!(instant_to_date(&DateTime::<Utc>::MAX_UTC).is_err());
    }

    #[test]
    fn test_date_to_instant_at_range_start_fails() {
        assert!(date_to_instant(&NaiveDate::MIN).is_err());
    }
}
