use thiserror::Error;
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, OffsetDateTime,
};

pub(crate) static ISO_DATE_FMT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]");
static US_DATE_FMT: &[BorrowedFormatItem] = format_description!("[month]/[day]/[year]");

/// The error returned when a date's text matches neither accepted pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("date {0:?} matches neither YYYY-MM-DD nor MM/DD/YYYY")]
pub struct DateFormatError(pub String);

/// Parses a sale date, accepting `YYYY-MM-DD` and then `MM/DD/YYYY`.
///
/// The first pattern to parse wins. Dates are plain calendar days with no
/// time-of-day or timezone component.
///
/// # Errors
///
/// Returns a [`DateFormatError`] carrying the original text if neither
/// pattern matches.
pub fn parse_date(text: &str) -> Result<Date, DateFormatError> {
    for fmt in [ISO_DATE_FMT, US_DATE_FMT] {
        if let Ok(date) = Date::parse(text, fmt) {
            return Ok(date);
        }
    }
    Err(DateFormatError(text.to_string()))
}

/// Today as a calendar day (UTC).
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parse_date_fn_accepts_both_formats_for_the_same_day() {
        assert_eq!(parse_date("2024-03-05").unwrap(), date!(2024 - 03 - 05));
        assert_eq!(parse_date("03/05/2024").unwrap(), date!(2024 - 03 - 05));
    }

    #[test]
    fn parse_date_fn_rejects_impossible_months() {
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn parse_date_fn_error_carries_the_original_text() {
        let err = parse_date("yesterday").unwrap_err();
        assert_eq!(err, DateFormatError("yesterday".to_string()));
        assert!(err.to_string().contains("yesterday"));
    }
}
