//! Working day calendars and task deadline scheduling.
//!
//! A [`Cal`] combines a weekend mask with a table of named holidays. The [`DateRoll`] trait
//! classifies dates as working days against such a calendar and moves dates forward by a number
//! of working days, which is how a task's deadline is derived from a requested timeframe.
//!
//! Calendars are either loaded by name from static data, see [`get_calendar_by_name`], or built
//! from a configuration file with [`DeadlineConfig`](crate::config::DeadlineConfig).
//!
//! ### Example
//! A task created on Tuesday 30th April 2024 with a timeframe of one working day is due on
//! Thursday 2nd May, since Labour Day falls on the Wednesday.
//! ```rust
//! # use taskdesk::scheduling::{get_calendar_by_name, ymd, validate_deadline, DateRoll, Rejection};
//! let cal = get_calendar_by_name("ke").unwrap();
//! let deadline = cal.add_working_days(&ymd(2024, 4, 30), 1).unwrap();
//! assert_eq!(deadline, ymd(2024, 5, 2));
//!
//! let chosen = ymd(2024, 5, 1);
//! assert_eq!(
//!     validate_deadline(&cal, &chosen),
//!     Err(Rejection::Holiday("Labour Day".to_string()))
//! );
//! ```

mod calendars;
mod deadline;

mod serde;

pub use crate::scheduling::{
    calendars::{
        calendar_names, format_date, get_calendar_by_name, parse_date, ymd, Cal, DateRoll,
        DATE_FORMAT, DEFAULT_CALENDAR,
    },
    deadline::{
        check_deadline, is_selectable, upcoming_deadlines, validate_deadline, DeadlineCheck,
        Rejection, UPCOMING_LIMIT,
    },
};
