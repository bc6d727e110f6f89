//! Formatting to and parsing from strings.

use chrono::format::{self, Item, Numeric, Pad, ParseErrorKind, Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::instant::{date_time_to_instant, date_to_instant, instant_to_date_time};
use crate::error::{Result, TimeError};
use crate::pattern::{Pattern, DAY_PATTERN, MONTH_PATTERN, SECOND_PATTERN};
use crate::utils::logging::{log_parse_error, log_pattern_fallback};

/// Two-digit years are read as 20yy.
const TWO_DIGIT_YEAR_CENTURY: i64 = 20;

/// Formats an instant as its UTC+8 wall-clock time.
pub fn instant_to_string(instant: &DateTime<Utc>, pattern: &Pattern) -> Result<String> {
    instant_to_date_time(instant).map(|local| local.format(pattern.canonical()).to_string())
}

/// Parses a date-time. The pattern must carry both date and time fields.
pub fn string_to_date_time(input: &str, pattern: &Pattern) -> Result<NaiveDateTime> {
    parse_date_time(input, pattern).map_err(|e| parse_error("string_to_date_time", input, pattern, e))
}

/// Parses a date.
///
/// Time fields in the pattern are read and discarded. A pattern with no day
/// field (such as [`MONTH_PATTERN`]) yields the first day of the month.
pub fn string_to_date(input: &str, pattern: &Pattern) -> Result<NaiveDate> {
    parse_date(input, pattern).map_err(|e| parse_error("string_to_date", input, pattern, e))
}

/// Parses an instant, choosing the path from the pattern.
///
/// [`DAY_PATTERN`] and [`MONTH_PATTERN`] read a date anchored to 00:00:00,
/// [`SECOND_PATTERN`] reads a date-time. Any other pattern is read as a date.
pub fn string_to_instant(input: &str, pattern: &Pattern) -> Result<DateTime<Utc>> {
    if *pattern == DAY_PATTERN || *pattern == MONTH_PATTERN {
        date_to_instant(&string_to_date(input, pattern)?)
    } else if *pattern == SECOND_PATTERN {
        date_time_to_instant(&string_to_date_time(input, pattern)?)
    } else {
        log_pattern_fallback("string_to_instant", pattern.as_str(), None);
        date_to_instant(&string_to_date(input, pattern)?)
    }
}

fn parse_date_time(input: &str, pattern: &Pattern) -> std::result::Result<NaiveDateTime, String> {
    scan(input, pattern)?
        .to_naive_datetime_with_offset(0)
        .map_err(|e| e.to_string())
}

fn parse_date(input: &str, pattern: &Pattern) -> std::result::Result<NaiveDate, String> {
    let mut parsed = scan(input, pattern)?;
    match parsed.to_naive_date() {
        Err(e) if e.kind() == ParseErrorKind::NotEnough && !pattern.has_day() => {
            parsed.set_day(1).map_err(|e| e.to_string())?;
            parsed.to_naive_date().map_err(|e| e.to_string())
        }
        result => result.map_err(|e| e.to_string()),
    }
}

/// Reads `input` one pattern item at a time.
///
/// chrono alone accepts short or space-padded numbers for `%m`, `%d` and
/// friends. Here padded fields need their full width of digits, unpadded
/// fields need at least one, and spaces must match exactly.
fn scan(input: &str, pattern: &Pattern) -> std::result::Result<Parsed, String> {
    let mut parsed = Parsed::new();
    let mut rest = input;
    let mut two_digit_year = false;

    for item in StrftimeItems::new(pattern.canonical()) {
        match &item {
            Item::Space(space) => {
                rest = rest
                    .strip_prefix(*space)
                    .ok_or_else(|| format!("expected '{}' at '{}'", space, rest))?;
                continue;
            }
            Item::Numeric(numeric, pad) => {
                let width = min_digits(numeric, pad);
                let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
                if digits < width {
                    return Err(format!("expected {} digit(s) at '{}'", width, rest));
                }
                two_digit_year |= *numeric == Numeric::YearMod100;
            }
            _ => {}
        }
        rest = format::parse_and_remainder(&mut parsed, rest, std::iter::once(item))
            .map_err(|e| e.to_string())?;
    }

    if !rest.is_empty() {
        return Err(format!("unexpected trailing input '{}'", rest));
    }
    if two_digit_year {
        parsed
            .set_year_div_100(TWO_DIGIT_YEAR_CENTURY)
            .map_err(|e| e.to_string())?;
    }
    Ok(parsed)
}

fn min_digits(numeric: &Numeric, pad: &Pad) -> usize {
    match (numeric, pad) {
        (_, Pad::None) => 1,
        (Numeric::Year, _) => 4,
        (Numeric::Ordinal, _) => 3,
        _ => 2,
    }
}

fn parse_error(operation: &str, input: &str, pattern: &Pattern, reason: String) -> TimeError {
    log_parse_error(operation, input, pattern.as_str(), &reason);
    TimeError::Parse {
        input: input.to_string(),
        pattern: pattern.as_str().to_string(),
        reason,
    }
}
