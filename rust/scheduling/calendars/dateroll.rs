use chrono::prelude::*;
use chrono::Days;

use crate::error::{DeadlineError, ScheduleResult};

/// Working-day classification and rolling over a calendar.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDate) -> bool;

    /// Returns the name of the holiday falling on `date`, if any.
    fn holiday_name(&self, date: &NaiveDate) -> Option<&str>;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Returns whether the date is a working day, i.e. part of the working week and not a holiday.
    fn is_working_day(&self, date: &NaiveDate) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Returns whether the date is not a working day, i.e. either not in working week or a specific holiday.
    fn is_non_working_day(&self, date: &NaiveDate) -> bool {
        !self.is_working_day(date)
    }

    /// Return the `date`, if a working day, or get the next working day after `date`.
    ///
    /// A calendar must contain at least one working weekday, otherwise this never returns.
    ///
    /// # Errors
    /// Returns [`DeadlineError::OutOfRange`] if no working day exists up to `NaiveDate::MAX`.
    fn roll_forward_working_day(&self, date: &NaiveDate) -> ScheduleResult<NaiveDate> {
        let mut new_date = *date;
        while !self.is_working_day(&new_date) {
            new_date = next_day(&new_date)?;
        }
        Ok(new_date)
    }

    /// Return the `date`, if a working day, or get the working day preceding `date`.
    ///
    /// # Errors
    /// Returns [`DeadlineError::OutOfRange`] if no working day exists down to `NaiveDate::MIN`.
    fn roll_backward_working_day(&self, date: &NaiveDate) -> ScheduleResult<NaiveDate> {
        let mut new_date = *date;
        while !self.is_working_day(&new_date) {
            new_date = new_date.checked_sub_days(Days::new(1)).ok_or_else(|| {
                DeadlineError::OutOfRange(format!("no working day on or before {}", date))
            })?;
        }
        Ok(new_date)
    }

    /// Advance `date` by a number of working days.
    ///
    /// The start date itself is never counted, so for `days >= 1` the result is the
    /// `days`-th working day strictly after `date`. A start date that is not a working
    /// day is accepted. With `days == 0` the `date` is returned unchanged, whether or
    /// not it is a working day.
    ///
    /// # Errors
    /// Returns [`DeadlineError::NegativeOffset`] if `days` is negative, and
    /// [`DeadlineError::OutOfRange`] if the result would fall after `NaiveDate::MAX`.
    fn add_working_days(&self, date: &NaiveDate, days: i32) -> ScheduleResult<NaiveDate> {
        if days < 0 {
            return Err(DeadlineError::NegativeOffset(days));
        }
        // every working day consumes at least one calendar day
        if i64::from(days) > NaiveDate::MAX.signed_duration_since(*date).num_days() {
            return Err(DeadlineError::OutOfRange(format!(
                "{} working days after {}",
                days, date
            )));
        }
        let mut new_date = *date;
        let mut remaining = days;
        while remaining > 0 {
            new_date = self.roll_forward_working_day(&next_day(&new_date)?)?;
            remaining -= 1;
        }
        Ok(new_date)
    }

    /// Count the working days in the half-open interval `(start, end]`.
    ///
    /// Returns zero if `end` is not after `start`. This is the inverse of
    /// [`add_working_days`](DateRoll::add_working_days).
    fn working_days_between(&self, start: &NaiveDate, end: &NaiveDate) -> i32 {
        start
            .iter_days()
            .skip(1)
            .take_while(|d| d <= end)
            .filter(|d| self.is_working_day(d))
            .count() as i32
    }

    /// Return a vector of working days between a start and end, inclusive.
    fn working_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        start
            .iter_days()
            .take_while(|d| d <= end)
            .filter(|d| self.is_working_day(d))
            .collect()
    }

    /// Print a representation of the month of the object.
    ///
    /// # Errors
    /// Returns [`DeadlineError::OutOfRange`] if `month` is not in `1..=12` or the month
    /// cannot be represented as a `NaiveDate`.
    fn print_month(&self, year: i32, month: u8) -> ScheduleResult<String> {
        let out_of_range = || DeadlineError::OutOfRange(format!("month {}-{:02}", year, month));
        let month_obj = Month::try_from(month).map_err(|_| out_of_range())?;
        let first = NaiveDate::from_ymd_opt(year, month.into(), 1).ok_or_else(out_of_range)?;
        let mut output = format!("{:>15} {}\n", month_obj.name(), year);
        output += "Su Mo Tu We Th Fr Sa\n";

        let days: u8 = month_obj.num_days(year).ok_or_else(out_of_range)?;
        let idx_start: u32 = (first.weekday().num_days_from_monday() + 1) % 7;

        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        for (i, date) in first.iter_days().take(days.into()).enumerate() {
            let s: String = if self.is_working_day(&date) {
                format!("{:>2}", i + 1)
            } else if !self.is_weekday(&date) {
                " .".to_string()
            } else {
                " *".to_string()
            };
            arr[i + idx_start as usize] = s;
        }

        for row in arr.chunks(7) {
            output += &row.join(" ");
            output += "\n";
        }
        Ok(output)
    }

    /// Print a representation of a year of the object.
    ///
    /// # Errors
    /// Returns [`DeadlineError::OutOfRange`] if any month of `year` cannot be represented.
    fn print_year(&self, year: i32) -> ScheduleResult<String> {
        let data: Vec<Vec<String>> = (1..13)
            .map(|m| {
                self.print_month(year, m)
                    .map(|month| month.lines().map(|s| s.to_string()).collect())
            })
            .collect::<ScheduleResult<_>>()?;
        let mut output = "\n".to_string();
        for quarter_row in 0..3 {
            for i in 0..8 {
                output += &format!(
                    "{}   {}   {}   {}\n",
                    data[quarter_row][i],
                    data[quarter_row + 3][i],
                    data[quarter_row + 6][i],
                    data[quarter_row + 9][i]
                );
            }
        }
        output += "Legend:\n";
        output += "'1-31': Working day         '.': Non-working weekend         '*': Holiday\n";
        Ok(output)
    }
}

fn next_day(date: &NaiveDate) -> ScheduleResult<NaiveDate> {
    date.checked_add_days(Days::new(1))
        .ok_or_else(|| DeadlineError::OutOfRange(format!("no day after {}", date)))
}
