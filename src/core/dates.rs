//! Calendar helpers for rental dates
//!
//! Dates are stored as `chrono::NaiveDate` and exchanged as `YYYY-MM-DD` strings.

use crate::types::RentalError;
use chrono::{Duration, Local, NaiveDate};

/// Format used for every date the system reads or prints
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` string
///
/// # Errors
///
/// Returns `RentalError::InvalidDate` if the string is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, RentalError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| RentalError::invalid_date(value, &format!("expected YYYY-MM-DD ({})", e)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Whole days from `from` to `to`, negative when `to` is earlier
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
