use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scheduling::{format_date, DateRoll};

/// Number of entries shown in the dashboard's upcoming deadlines panel.
pub const UPCOMING_LIMIT: usize = 5;

/// The reason a candidate deadline was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The date is outside the working week.
    #[error("weekend not allowed")]
    Weekend,
    /// The date is a named holiday.
    #[error("holiday not allowed: {0}")]
    Holiday(String),
}

/// Check a candidate deadline against the calendar.
///
/// The weekend check runs first, so a holiday that falls on a weekend reports
/// [`Rejection::Weekend`].
pub fn validate_deadline<T: DateRoll>(calendar: &T, candidate: &NaiveDate) -> Result<(), Rejection> {
    if !calendar.is_weekday(candidate) {
        return Err(Rejection::Weekend);
    }
    if let Some(name) = calendar.holiday_name(candidate) {
        return Err(Rejection::Holiday(name.to_string()));
    }
    Ok(())
}

/// Whether a date may be offered by the deadline picker.
///
/// Dates before `min_date` and non-working days are filtered out.
pub fn is_selectable<T: DateRoll>(calendar: &T, date: &NaiveDate, min_date: &NaiveDate) -> bool {
    date >= min_date && calendar.is_working_day(date)
}

/// Outcome of validating a candidate deadline, ready for display or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadlineCheck {
    pub date: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The next working day, when the date was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Validate `date` and, if rejected, suggest the next working day.
///
/// The suggestion is absent when no working day remains before the end of the calendar.
pub fn check_deadline<T: DateRoll>(calendar: &T, date: &NaiveDate) -> DeadlineCheck {
    match validate_deadline(calendar, date) {
        Ok(()) => DeadlineCheck {
            date: format_date(date),
            ok: true,
            reason: None,
            suggestion: None,
        },
        Err(rejection) => DeadlineCheck {
            date: format_date(date),
            ok: false,
            reason: Some(rejection.to_string()),
            suggestion: calendar
                .roll_forward_working_day(date)
                .ok()
                .map(|d| format_date(&d)),
        },
    }
}

/// Select the items due strictly after `today`, earliest first, keeping at most `limit`.
///
/// `deadline` extracts an item's due date; items without one are skipped. Items with equal
/// deadlines keep their input order.
pub fn upcoming_deadlines<'a, T, F>(
    items: &'a [T],
    deadline: F,
    today: &NaiveDate,
    limit: usize,
) -> Vec<&'a T>
where
    F: Fn(&T) -> Option<NaiveDate>,
{
    items
        .iter()
        .filter_map(|item| deadline(item).filter(|d| d > today).map(|d| (d, item)))
        .sorted_by_key(|(d, _)| *d)
        .take(limit)
        .map(|(_, item)| item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{get_calendar_by_name, ymd, Cal};

    fn fixture_ke() -> Cal {
        get_calendar_by_name("ke").unwrap()
    }

    #[test]
    fn test_validate_weekend() {
        let cal = fixture_ke();
        assert_eq!(validate_deadline(&cal, &ymd(2024, 6, 8)), Err(Rejection::Weekend));
        assert_eq!(validate_deadline(&cal, &ymd(2024, 6, 9)), Err(Rejection::Weekend));
    }

    #[test]
    fn test_validate_weekend_precedes_holiday() {
        // Madaraka Day 2024 is a Saturday
        let cal = fixture_ke();
        let result = validate_deadline(&cal, &ymd(2024, 6, 1));
        assert_eq!(result, Err(Rejection::Weekend));
        assert_eq!(result.unwrap_err().to_string(), "weekend not allowed");
    }

    #[test]
    fn test_validate_holiday() {
        let cal = fixture_ke();
        let result = validate_deadline(&cal, &ymd(2024, 5, 1));
        assert_eq!(result, Err(Rejection::Holiday("Labour Day".to_string())));
        assert!(result.unwrap_err().to_string().contains("Labour Day"));
    }

    #[test]
    fn test_validate_ok() {
        let cal = fixture_ke();
        assert_eq!(validate_deadline(&cal, &ymd(2024, 5, 2)), Ok(()));
    }

    #[test]
    fn test_is_selectable() {
        let cal = fixture_ke();
        let today = ymd(2024, 4, 30);
        assert!(is_selectable(&cal, &today, &today));
        assert!(!is_selectable(&cal, &ymd(2024, 4, 29), &today)); // before min date
        assert!(!is_selectable(&cal, &ymd(2024, 5, 1), &today)); // holiday
        assert!(!is_selectable(&cal, &ymd(2024, 5, 4), &today)); // Saturday
        assert!(is_selectable(&cal, &ymd(2024, 5, 2), &today));
    }

    #[test]
    fn test_check_deadline_rejected() {
        let cal = fixture_ke();
        let check = check_deadline(&cal, &ymd(2024, 12, 25));
        assert_eq!(
            check,
            DeadlineCheck {
                date: "2024-12-25".to_string(),
                ok: false,
                reason: Some("holiday not allowed: Christmas Day".to_string()),
                suggestion: Some("2024-12-27".to_string()),
            }
        );
    }

    #[test]
    fn test_check_deadline_rejected_at_max_date() {
        let cal = fixture_ke().with_holidays([(NaiveDate::MAX, "Last Day".to_string())]);
        let check = check_deadline(&cal, &NaiveDate::MAX);
        assert!(!check.ok);
        assert!(check.reason.is_some());
        assert_eq!(check.suggestion, None);
    }

    #[test]
    fn test_check_deadline_ok() {
        let cal = fixture_ke();
        let check = check_deadline(&cal, &ymd(2024, 5, 31));
        assert!(check.ok);
        assert_eq!(check.reason, None);
        assert_eq!(check.suggestion, None);
    }

    #[test]
    fn test_upcoming_deadlines() {
        let tasks = vec![
            ("a", Some(ymd(2024, 5, 10))),
            ("b", None),
            ("c", Some(ymd(2024, 5, 2))),
            ("d", Some(ymd(2024, 4, 30))),
            ("e", Some(ymd(2024, 5, 2))),
            ("f", Some(ymd(2024, 4, 1))),
        ];
        let result = upcoming_deadlines(&tasks, |t| t.1, &ymd(2024, 4, 30), 5);
        let names: Vec<&str> = result.iter().map(|t| t.0).collect();
        assert_eq!(names, vec!["c", "e", "a"]);

        let result = upcoming_deadlines(&tasks, |t| t.1, &ymd(2024, 4, 30), 1);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, "c");
    }
}
