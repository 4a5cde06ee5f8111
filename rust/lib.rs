//! This is the documentation for taskdesk
//!
//! Working day calendars for computing and validating task deadlines. See the
//! [`scheduling`] module for the calendar and deadline operations and [`config`] for loading
//! holiday tables from file.


pub mod config;
pub mod error;
pub mod json;
pub mod logging;
pub mod scheduling;

pub use crate::config::DeadlineConfig;
pub use crate::error::{DeadlineError, ScheduleResult};
