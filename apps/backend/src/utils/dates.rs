//! `YYYY-MM-DD` dates as used in query parameters and response bodies.

use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Parses a `YYYY-MM-DD` date. Anything else is a 422.
pub fn parse_date(field: &str, raw: &str) -> Result<Date, AppError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw.trim(), &format).map_err(|_| {
        AppError::unprocessable(
            ErrorCode::InvalidDate,
            format!("Field '{field}' must be a date formatted as YYYY-MM-DD."),
        )
    })
}

/// Today's date in UTC.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Optional date parameter that falls back to today when absent.
pub fn date_or_today(field: &str, raw: Option<&str>) -> Result<Date, AppError> {
    match raw {
        Some(raw) => parse_date(field, raw),
        None => Ok(today()),
    }
}

/// Renders a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    // `Date`'s Display is ISO 8601 for four-digit years.
    date.to_string()
}
