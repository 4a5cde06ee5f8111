use chrono::prelude::*;
use chrono::Weekday;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{DeadlineError, ScheduleResult};
use crate::scheduling::DateRoll;

/// A working day calendar with a singular table of named holidays.
///
/// A working day calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week that are not general working days. In Western culture these
///   are typically `[5, 6]` for Saturday and Sunday.
/// - `holidays`: which maps specific dates that cannot be working days to their holiday name.
///
/// Holidays are kept in insertion order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CalDataModel")]
pub struct Cal {
    pub(crate) holidays: IndexMap<NaiveDate, String>,
    pub(crate) week_mask: HashSet<Weekday>,
}

#[derive(Deserialize)]
struct CalDataModel {
    holidays: IndexMap<NaiveDate, String>,
    week_mask: HashSet<Weekday>,
}

impl TryFrom<CalDataModel> for Cal {
    type Error = DeadlineError;

    fn try_from(model: CalDataModel) -> Result<Self, Self::Error> {
        if model.week_mask.len() == 7 {
            return Err(DeadlineError::EmptyWorkingWeek);
        }
        Ok(Self {
            holidays: model.holidays,
            week_mask: model.week_mask,
        })
    }
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide pairs of dates and names that cannot be working days. `week_mask` is a vector of days
    /// (0=Mon,.., 6=Sun) that are excluded from the working week.
    ///
    /// # Errors
    /// Returns [`DeadlineError::InvalidWeekmask`] if any `week_mask` value is greater than 6, or
    /// [`DeadlineError::EmptyWorkingWeek`] if every day of the week is excluded.
    pub fn try_new(holidays: Vec<(NaiveDate, String)>, week_mask: Vec<u8>) -> ScheduleResult<Self> {
        Ok(Cal {
            holidays: IndexMap::from_iter(holidays),
            week_mask: parse_weekmask(&week_mask)?,
        })
    }

    /// Replace the days excluded from the working week.
    ///
    /// # Errors
    /// Same conditions as [`Cal::try_new`].
    pub fn with_weekmask(mut self, week_mask: &[u8]) -> ScheduleResult<Self> {
        self.week_mask = parse_weekmask(week_mask)?;
        Ok(self)
    }

    /// Add holidays to the calendar.
    ///
    /// A date already in the table keeps its position and takes the new name.
    pub fn with_holidays<I>(mut self, holidays: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, String)>,
    {
        self.holidays.extend(holidays);
        self
    }

    /// Iterate over the holiday table in insertion order.
    pub fn holidays(&self) -> impl Iterator<Item = (&NaiveDate, &str)> {
        self.holidays.iter().map(|(d, n)| (d, n.as_str()))
    }

    /// Return the number of days of the week that are working days.
    pub fn working_weekdays(&self) -> usize {
        7 - self.week_mask.len()
    }
}

fn parse_weekmask(week_mask: &[u8]) -> ScheduleResult<HashSet<Weekday>> {
    let mask = week_mask
        .iter()
        .map(|v| Weekday::try_from(*v).map_err(|_| DeadlineError::InvalidWeekmask(*v)))
        .collect::<ScheduleResult<HashSet<Weekday>>>()?;
    if mask.len() == 7 {
        return Err(DeadlineError::EmptyWorkingWeek);
    }
    Ok(mask)
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn holiday_name(&self, date: &NaiveDate) -> Option<&str> {
        self.holidays.get(date).map(String::as_str)
    }
}
