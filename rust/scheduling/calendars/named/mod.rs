//! Static data for pre-existing named holiday calendars.
//!

pub mod all;
pub mod bus;
pub mod ke;

use crate::error::{DeadlineError, ScheduleResult};
use crate::scheduling::{parse_date, Cal};

/// Name of the calendar used when none is configured.
pub const DEFAULT_CALENDAR: &str = "ke";

fn get_data_by_name(name: &str) -> Option<(&'static [u8], &'static [(&'static str, &'static str)])> {
    match name {
        "all" => Some((all::WEEKMASK, all::HOLIDAYS)),
        "bus" => Some((bus::WEEKMASK, bus::HOLIDAYS)),
        "ke" => Some((ke::WEEKMASK, ke::HOLIDAYS)),
        _ => None,
    }
}

/// Return the names of all pre-existing calendars.
pub fn calendar_names() -> Vec<&'static str> {
    vec!["all", "bus", "ke"]
}

/// Return a static [`Cal`] specified by a pre-existing named identifier.
///
/// Names are case-insensitive.
///
/// # Errors
/// Returns [`DeadlineError::UnknownCalendar`] if no calendar is defined under `name`.
pub fn get_calendar_by_name(name: &str) -> ScheduleResult<Cal> {
    let key = name.trim().to_lowercase();
    let (weekmask, holidays) =
        get_data_by_name(&key).ok_or_else(|| DeadlineError::UnknownCalendar(name.to_string()))?;
    let holidays = holidays
        .iter()
        .map(|(date, label)| parse_date(date).map(|d| (d, label.to_string())))
        .collect::<ScheduleResult<Vec<_>>>()?;
    Cal::try_new(holidays, weekmask.to_vec())
}
