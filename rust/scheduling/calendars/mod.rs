mod cal;
mod calendar;
mod dateroll;
mod named;

pub use crate::scheduling::calendars::{
    cal::Cal,
    calendar::{format_date, parse_date, ymd, DATE_FORMAT},
    dateroll::DateRoll,
    named::{calendar_names, get_calendar_by_name, DEFAULT_CALENDAR},
};
