//! Calendar date/time values as typed into date and datetime-local inputs.
//!
//! Accepted forms:
//! - `YYYY-MM-DD` (all-day)
//! - `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH:MM:SS[.fff]`
//! - either time form followed by `Z` or a `+HH:MM` / `-HH:MM` offset
//!
//! Times without an offset are read as UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1, one_of},
    combinator::opt,
    IResult, Parser,
};

/// A parsed event boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarTime {
    /// All-day value
    Date(NaiveDate),
    /// Time-bearing value, normalized to UTC
    DateTime(DateTime<Utc>),
}

impl CalendarTime {
    /// iCalendar form: `YYYYMMDD` or `YYYYMMDDTHHMMSSZ`
    pub fn to_ical(&self) -> String {
        match self {
            CalendarTime::Date(date) => date.format("%Y%m%d").to_string(),
            CalendarTime::DateTime(dt) => dt.format("%Y%m%dT%H%M%SZ").to_string(),
        }
    }

    /// Point in time used for ordering; all-day values start at midnight UTC
    pub fn instant(&self) -> NaiveDateTime {
        match self {
            CalendarTime::Date(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            CalendarTime::DateTime(dt) => dt.naive_utc(),
        }
    }
}

/// Fixed-width decimal field
fn digits(input: &str, width: usize) -> IResult<&str, u32> {
    let (input, text) = take_while_m_n(width, width, |c: char| c.is_ascii_digit())(input)?;
    let number = text
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    Ok((input, number))
}

fn date(input: &str) -> IResult<&str, (u32, u32, u32)> {
    let (input, year) = digits(input, 4)?;
    let (input, _) = char('-')(input)?;
    let (input, month) = digits(input, 2)?;
    let (input, _) = char('-')(input)?;
    let (input, day) = digits(input, 2)?;
    Ok((input, (year, month, day)))
}

fn colon(input: &str) -> IResult<&str, char> {
    char(':')(input)
}

fn fraction(input: &str) -> IResult<&str, &str> {
    let (input, _) = char('.')(input)?;
    digit1(input)
}

fn seconds(input: &str) -> IResult<&str, u32> {
    let (input, _) = colon(input)?;
    let (input, secs) = digits(input, 2)?;
    // Fractional seconds are dropped
    let (input, _) = opt(fraction).parse(input)?;
    Ok((input, secs))
}

fn time(input: &str) -> IResult<&str, (u32, u32, u32)> {
    let (input, _) = one_of("Tt ")(input)?;
    let (input, hour) = digits(input, 2)?;
    let (input, _) = colon(input)?;
    let (input, minute) = digits(input, 2)?;
    let (input, second) = opt(seconds).parse(input)?;
    Ok((input, (hour, minute, second.unwrap_or(0))))
}

/// UTC offset in seconds east
fn offset(input: &str) -> IResult<&str, i32> {
    if let Some(rest) = input.strip_prefix('Z').or_else(|| input.strip_prefix('z')) {
        return Ok((rest, 0));
    }
    let (input, sign) = one_of("+-")(input)?;
    let (input, hours) = digits(input, 2)?;
    let (input, _) = opt(colon).parse(input)?;
    let (input, minutes) = digits(input, 2)?;
    let secs = (hours * 3600 + minutes * 60) as i32;
    Ok((input, if sign == '-' { -secs } else { secs }))
}

type RawTime = ((u32, u32, u32), Option<((u32, u32, u32), Option<i32>)>);

fn calendar_time(input: &str) -> IResult<&str, RawTime> {
    let (input, ymd) = date(input)?;
    let (input, clock) = opt(time).parse(input)?;
    match clock {
        Some(hms) => {
            let (input, tz) = opt(offset).parse(input)?;
            Ok((input, (ymd, Some((hms, tz)))))
        }
        None => Ok((input, (ymd, None))),
    }
}

/// Parse a calendar input value. Returns `None` for malformed or
/// impossible dates (e.g. `2025-02-30`).
pub fn parse_calendar_time(value: &str) -> Option<CalendarTime> {
    let ((year, month, day), clock) = match calendar_time(value.trim()) {
        Ok(("", parsed)) => parsed,
        _ => return None,
    };

    let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;
    let Some(((hour, minute, second), tz)) = clock else {
        return Some(CalendarTime::Date(date));
    };

    let naive = date.and_time(NaiveTime::from_hms_opt(hour, minute, second)?);
    let offset = FixedOffset::east_opt(tz.unwrap_or(0))?;
    let local = offset.from_local_datetime(&naive).single()?;
    Some(CalendarTime::DateTime(local.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_day() {
        let parsed = parse_calendar_time("2025-01-02").unwrap();
        assert_eq!(parsed.to_ical(), "20250102");
    }

    #[test]
    fn test_datetime_local() {
        let parsed = parse_calendar_time("2025-06-15T18:30").unwrap();
        assert_eq!(parsed.to_ical(), "20250615T183000Z");
    }

    #[test]
    fn test_offset_normalized_to_utc() {
        let parsed = parse_calendar_time("2025-06-15T01:15:30.250+02:00").unwrap();
        assert_eq!(parsed.to_ical(), "20250614T231530Z");
    }

    #[test]
    fn test_zulu() {
        let parsed = parse_calendar_time("2025-06-15T09:00:00Z").unwrap();
        assert_eq!(parsed.to_ical(), "20250615T090000Z");
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(parse_calendar_time("2025-02-30").is_none());
        assert!(parse_calendar_time("2025-13-01").is_none());
        assert!(parse_calendar_time("2025-01-01T25:00").is_none());
        assert!(parse_calendar_time("next tuesday").is_none());
        assert!(parse_calendar_time("").is_none());
    }

    #[test]
    fn test_date_orders_before_same_day_time() {
        let day = parse_calendar_time("2025-01-02").unwrap();
        let morning = parse_calendar_time("2025-01-02T08:00").unwrap();
        assert!(day.instant() < morning.instant());
    }
}
