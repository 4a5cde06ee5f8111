//! Error types for deadline scheduling and calendar configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for fallible calendar operations.
pub type ScheduleResult<T> = Result<T, DeadlineError>;

/// Errors raised by calendar construction, date parsing and deadline arithmetic.
///
/// A date that merely falls on a weekend or holiday is not an error: see
/// [`Rejection`](crate::scheduling::Rejection) for that outcome.
#[derive(Error, Debug)]
pub enum DeadlineError {
    /// A working-day offset was negative.
    #[error("working-day offset must not be negative, got {0}")]
    NegativeOffset(i32),

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date '{input}', expected YYYY-MM-DD: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A date computation ran outside the representable calendar.
    #[error("date out of range: {0}")]
    OutOfRange(String),

    /// A weekmask value was outside `0..=6`.
    #[error("weekmask value {0} is out of range, expected 0 (Mon) to 6 (Sun)")]
    InvalidWeekmask(u8),

    /// A weekmask excluded every day of the week.
    #[error("weekmask excludes every day of the week, no working days remain")]
    EmptyWorkingWeek,

    /// No named calendar exists with the given name.
    #[error("'{0}' is not found in list of existing calendars")]
    UnknownCalendar(String),

    /// The configuration document is malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The configuration file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DeadlineError {
    /// Create a configuration error
    pub fn config<E: std::fmt::Display>(err: E) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::de::Error> for DeadlineError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err)
    }
}
