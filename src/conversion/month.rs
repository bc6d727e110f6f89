//! Month boundaries.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use super::instant::start_of_day;

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999) {
    Some(time) => time,
    None => unreachable!(),
};

/// Last day of the date's month at 23:59:59.999999999.
pub fn last_moment_of_month(date: &NaiveDate) -> NaiveDateTime {
    // the latest day chrono accepts for this month; every month has a 28th
    let last_day = (28..=31)
        .rev()
        .find_map(|day| date.with_day(day))
        .unwrap_or(*date);
    last_day.and_time(END_OF_DAY)
}

/// First day of the date's month at 00:00:00.
pub fn first_moment_of_month(date: &NaiveDate) -> NaiveDateTime {
    start_of_day(&date.with_day(1).unwrap_or(*date))
}
