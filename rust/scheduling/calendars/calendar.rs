use chrono::prelude::*;

use crate::error::{DeadlineError, ScheduleResult};

/// Date format used for display and for submission to the task API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string into a date.
///
/// # Errors
/// Returns [`DeadlineError::InvalidDate`] if `input` is not a valid calendar date in that format.
pub fn parse_date(input: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        DeadlineError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}
