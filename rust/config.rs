//! Calendar configuration loaded from TOML.
//!
//! A configuration selects a named base calendar, optionally replaces its weekend mask and adds
//! holiday entries, so that later years can be supplied without rebuilding:
//!
//! ```toml
//! calendar = "ke"
//! weekmask = [5, 6]
//!
//! [holidays]
//! "2025-01-01" = "New Year's Day"
//! "2025-04-18" = "Good Friday"
//! ```

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, trace};

use crate::error::{DeadlineError, ScheduleResult};
use crate::scheduling::{get_calendar_by_name, Cal, DEFAULT_CALENDAR};

/// Settings from which the working day [`Cal`] is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeadlineConfig {
    /// Named base calendar, defaults to [`DEFAULT_CALENDAR`].
    #[serde(default)]
    pub calendar: Option<String>,
    /// Days excluded from the working week (0=Mon,.., 6=Sun), replacing the base calendar's.
    #[serde(default)]
    pub weekmask: Option<Vec<u8>>,
    /// Holidays added on top of the base calendar.
    #[serde(default)]
    pub holidays: IndexMap<NaiveDate, String>,
}

impl DeadlineConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> ScheduleResult<Self> {
        let config: DeadlineConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> ScheduleResult<Self> {
        debug!("Loading calendar configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| DeadlineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Name of the base calendar this configuration resolves to.
    pub fn calendar_name(&self) -> &str {
        self.calendar.as_deref().unwrap_or(DEFAULT_CALENDAR)
    }

    /// Build the calendar described by this configuration.
    ///
    /// # Errors
    /// Fails if the base calendar is unknown or the weekmask is invalid.
    pub fn build_calendar(&self) -> ScheduleResult<Cal> {
        let name = self.calendar_name();
        let mut cal = get_calendar_by_name(name)?;
        if let Some(weekmask) = &self.weekmask {
            trace!(?weekmask, "Overriding weekmask");
            cal = cal.with_weekmask(weekmask)?;
        }
        cal = cal.with_holidays(self.holidays.clone());
        debug!(
            calendar = name,
            holidays = cal.holidays().count(),
            "Built working day calendar"
        );
        Ok(cal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{ymd, DateRoll};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_default_calendar() {
        let config = DeadlineConfig::from_toml_str("").unwrap();
        assert_eq!(config, DeadlineConfig::default());
        let cal = config.build_calendar().unwrap();
        assert_eq!(cal, get_calendar_by_name(DEFAULT_CALENDAR).unwrap());
    }

    #[test]
    fn test_config_adds_holidays() {
        let config = DeadlineConfig::from_toml_str(
            r#"
calendar = "bus"

[holidays]
"2025-01-01" = "New Year's Day"
"2025-04-18" = "Good Friday"
"#,
        )
        .unwrap();
        let cal = config.build_calendar().unwrap();
        assert_eq!(cal.holiday_name(&ymd(2025, 4, 18)), Some("Good Friday"));
        assert_eq!(cal.holiday_name(&ymd(2024, 12, 25)), None);
        // Thursday 17th April 2025 + 1 skips Good Friday and the weekend
        assert_eq!(
            cal.add_working_days(&ymd(2025, 4, 17), 1).unwrap(),
            ymd(2025, 4, 21)
        );
    }

    #[test]
    fn test_config_renames_base_holiday() {
        let config =
            DeadlineConfig::from_toml_str("[holidays]\n\"2024-05-01\" = \"Labour Day (observed)\"\n")
                .unwrap();
        let cal = config.build_calendar().unwrap();
        assert_eq!(cal.holiday_name(&ymd(2024, 5, 1)), Some("Labour Day (observed)"));
        assert_eq!(cal.holidays().count(), 7);
    }

    #[test]
    fn test_config_weekmask() {
        let config = DeadlineConfig::from_toml_str("weekmask = [4, 5]").unwrap();
        let cal = config.build_calendar().unwrap();
        assert!(cal.is_working_day(&ymd(2024, 6, 2))); // Sunday
        assert!(!cal.is_working_day(&ymd(2024, 5, 31))); // Friday
    }

    #[test]
    fn test_config_invalid_weekmask() {
        let config = DeadlineConfig::from_toml_str("weekmask = [9]").unwrap();
        assert!(matches!(
            config.build_calendar(),
            Err(DeadlineError::InvalidWeekmask(9))
        ));
    }

    #[test]
    fn test_config_unknown_calendar() {
        let config = DeadlineConfig::from_toml_str(r#"calendar = "mars""#).unwrap();
        assert!(matches!(
            config.build_calendar(),
            Err(DeadlineError::UnknownCalendar(_))
        ));
    }

    #[test]
    fn test_config_rejects_bad_documents() {
        for doc in [
            "calendar = 3",
            "unknown_key = true",
            "[holidays]\n\"2024-02-30\" = \"Nope\"",
            "weekmask = [-1]",
        ] {
            let result = DeadlineConfig::from_toml_str(doc);
            assert!(matches!(result, Err(DeadlineError::Config(_))), "{doc}");
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "calendar = \"all\"").unwrap();
        let config = DeadlineConfig::load(file.path()).unwrap();
        assert_eq!(config.calendar_name(), "all");
    }

    #[test]
    fn test_load_missing_file() {
        let result = DeadlineConfig::load(Path::new("/nonexistent/taskdesk.toml"));
        assert!(matches!(result, Err(DeadlineError::Io { .. })));
    }
}
