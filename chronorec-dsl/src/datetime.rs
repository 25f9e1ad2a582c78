//! Date-time token codec (`YYYYMMDDTHHMMSS`, UTC)

use chrono::{Datelike, NaiveDate, Timelike};
use chronorec_core::{DateTimeError, Timestamp};
use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// CALENDAR TABLES
// ============================================================================

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Days per month in a common year.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

static TOKEN_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8}T[0-9]{6}$").expect("Invalid date-time token regex"));

/// Gregorian leap rule.
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse a `YYYYMMDDTHHMMSS` token into a UTC timestamp.
///
/// Fields are checked in a fixed order and the first failure is returned:
/// shape, year, month, day, hour, minute, second.
pub fn parse_timestamp(token: &str) -> Result<Timestamp, DateTimeError> {
    if !TOKEN_FORMAT.is_match(token) {
        return Err(DateTimeError::IncorrectFormat);
    }

    // The token is pure ASCII from here on, so byte slicing is safe.
    let year_text = &token[0..4];
    let year = digits(year_text)?;
    if year == 0 {
        return Err(DateTimeError::InvalidYear);
    }

    let month = digits(&token[4..6])?;
    if month == 0 || month > 12 {
        return Err(DateTimeError::InvalidMonth);
    }
    let month_index = (month - 1) as usize;

    let day = digits(&token[6..8])?;
    if day == 0 {
        return Err(DateTimeError::ZeroDay);
    }
    check_day_of_month(year_text, year, month_index, day)?;

    let hour = digits(&token[9..11])?;
    if hour > 23 {
        return Err(DateTimeError::InvalidHour);
    }
    let minute = digits(&token[11..13])?;
    if minute > 59 {
        return Err(DateTimeError::InvalidMinute);
    }
    let second = digits(&token[13..15])?;
    if second > 59 {
        return Err(DateTimeError::InvalidSecond);
    }

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|naive| naive.and_utc())
        .ok_or(DateTimeError::IncorrectFormat)
}

fn check_day_of_month(
    year_text: &str,
    year: u32,
    month_index: usize,
    day: u32,
) -> Result<(), DateTimeError> {
    let max_days = MONTH_DAYS[month_index];
    if day <= max_days {
        return Ok(());
    }

    if month_index != 1 {
        return Err(DateTimeError::MonthOverflow {
            month: MONTH_NAMES[month_index],
            days: max_days,
        });
    }

    if !is_leap_year(year) {
        if day == 29 {
            return Err(DateTimeError::NotLeapYear {
                year: year_text.to_string(),
            });
        }
        return Err(DateTimeError::FebruaryOverflow {
            year: year_text.to_string(),
            days: 28,
        });
    }

    if day > 29 {
        return Err(DateTimeError::FebruaryOverflow {
            year: year_text.to_string(),
            days: 29,
        });
    }

    Ok(())
}

fn digits(field: &str) -> Result<u32, DateTimeError> {
    field.parse().map_err(|_| DateTimeError::IncorrectFormat)
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Format a timestamp back into the 15 character token.
pub fn format_timestamp(time: &Timestamp) -> String {
    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}",
        time.year(),
        time.month(),
        time.day(),
        time.hour(),
        time.minute(),
        time.second()
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn message(token: &str) -> String {
        match parse_timestamp(token) {
            Ok(time) => format!("unexpected success: {}", time),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_parse_valid_token() -> Result<(), DateTimeError> {
        let time = parse_timestamp("19980118T230000")?;
        assert_eq!(Some(time), Utc.with_ymd_and_hms(1998, 1, 18, 23, 0, 0).single());
        Ok(())
    }

    #[test]
    fn test_parse_bounds() -> Result<(), DateTimeError> {
        let first = parse_timestamp("00010101T000000")?;
        assert_eq!(first.year(), 1);
        let last = parse_timestamp("99991231T235959")?;
        assert_eq!(last.year(), 9999);
        assert_eq!(last.second(), 59);
        Ok(())
    }

    #[test]
    fn test_rejects_bad_shapes() {
        for token in [
            "",
            "19980118",
            "19980118 230000",
            "19980118t230000",
            "1998011T2300000",
            "19980118T23000",
            "19980118T2300000",
            " 19980118T230000",
            "19980118T230000\n",
            "1998-01-18T23:00",
            "١٩٩٨٠١١٨T230000",
        ] {
            assert_eq!(
                parse_timestamp(token),
                Err(DateTimeError::IncorrectFormat),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_field_messages() {
        assert_eq!(
            message("00000101T000000"),
            "Invalid date. Year must be a 4 digit number between 0001 and 9999."
        );
        assert_eq!(
            message("19981301T000000"),
            "Invalid date. Month must be a 2 digit number between 01 and 12."
        );
        assert_eq!(
            message("19980001T000000"),
            "Invalid date. Month must be a 2 digit number between 01 and 12."
        );
        assert_eq!(message("19980100T000000"), "Invalid date. Day of month cannot be 0.");
        assert_eq!(message("19980431T000000"), "Invalid date. April only has 30 days.");
        assert_eq!(message("19980132T000000"), "Invalid date. January only has 31 days.");
        assert_eq!(
            message("19980118T240000"),
            "Invalid time. Hour must be a 2 digit number between 00 and 23."
        );
        assert_eq!(
            message("19980118T236000"),
            "Invalid time. Minute must be a 2 digit number between 00 and 59."
        );
        assert_eq!(
            message("19980118T235960"),
            "Invalid time. Second must be a 2 digit number between 00 and 59."
        );
    }

    #[test]
    fn test_february_messages() {
        assert_eq!(message("19980229T000000"), "Invalid date. 1998 is not a leap year.");
        assert_eq!(
            message("19980230T000000"),
            "Invalid date. February, 1998 only has 28 days."
        );
        assert_eq!(
            message("20000230T000000"),
            "Invalid date. February, 2000 only has 29 days."
        );
        assert_eq!(message("19000229T000000"), "Invalid date. 1900 is not a leap year.");
        assert_eq!(message("00040230T000000"), "Invalid date. February, 0004 only has 29 days.");
        assert!(parse_timestamp("20000229T000000").is_ok());
        assert!(parse_timestamp("20240229T120000").is_ok());
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // Bad month wins over bad hour; bad day wins over bad second.
        assert_eq!(parse_timestamp("19981318T990000"), Err(DateTimeError::InvalidMonth));
        assert_eq!(parse_timestamp("19980100T000099"), Err(DateTimeError::ZeroDay));
        assert_eq!(parse_timestamp("19980118T999999"), Err(DateTimeError::InvalidHour));
    }

    #[test]
    fn test_format_zero_pads() -> Result<(), DateTimeError> {
        let time = parse_timestamp("00070203T040506")?;
        assert_eq!(format_timestamp(&time), "00070203T040506");
        Ok(())
    }

    #[test]
    fn test_leap_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1996));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(1998));
    }
}
