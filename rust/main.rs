use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

use taskdesk::json::JSON;
use taskdesk::logging::init_logging;
use taskdesk::scheduling::{
    calendar_names, check_deadline, format_date, parse_date, Cal, DateRoll,
};
use taskdesk::DeadlineConfig;

/// Compute and validate task deadlines over working day calendars
#[derive(Parser)]
#[command(name = "taskdesk")]
#[command(about = "taskdesk - Compute and validate task deadlines in working days", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a calendar configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Named base calendar, overriding the configuration
    #[arg(long, global = true)]
    calendar: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the deadline a number of working days after a date
    Add {
        /// Start date (YYYY-MM-DD), never counted itself
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        /// Number of working days
        #[arg(allow_negative_numbers = true)]
        days: i32,
    },
    /// Check whether a date is acceptable as a deadline
    Check {
        /// Candidate deadline (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the holiday name falling on a date
    Holiday {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
    /// List the holidays of the calendar
    Holidays,
    /// Count the working days after START up to and including END
    Between {
        #[arg(value_parser = parse_date)]
        start: NaiveDate,
        #[arg(value_parser = parse_date)]
        end: NaiveDate,
    },
    /// Print a month of the calendar
    Month {
        year: i32,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=12))]
        month: u8,
    },
    /// Print a year of the calendar
    Year { year: i32 },
    /// Print the calendar as JSON
    Export,
    /// List the names of the built-in calendars
    Calendars,
}

fn load_calendar(config_path: Option<&Path>, calendar: Option<&str>) -> Result<Cal> {
    let mut config = match config_path {
        Some(path) => DeadlineConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => DeadlineConfig::default(),
    };
    if let Some(name) = calendar {
        debug!("Calendar overridden on command line: {}", name);
        config.calendar = Some(name.to_string());
    }
    let cal = config
        .build_calendar()
        .context("Failed to build working day calendar")?;
    info!("Using calendar '{}'", config.calendar_name());
    Ok(cal)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let command = match cli.command {
        Commands::Calendars => {
            for name in calendar_names() {
                println!("{}", name);
            }
            return Ok(ExitCode::SUCCESS);
        }
        command => command,
    };
    let cal = load_calendar(cli.config.as_deref(), cli.calendar.as_deref())?;

    match command {
        Commands::Add { date, days } => {
            let deadline = cal
                .add_working_days(&date, days)
                .with_context(|| format!("Cannot add {} working days to {}", days, date))?;
            println!("{}", format_date(&deadline));
        }
        Commands::Check { date, json } => {
            let check = check_deadline(&cal, &date);
            if json {
                println!("{}", check.to_json()?);
            } else if check.ok {
                println!("{}: ok", check.date);
            } else {
                let reason = check.reason.as_deref().unwrap_or_default();
                match check.suggestion.as_deref() {
                    Some(next) => {
                        println!("{}: {} (next working day: {})", check.date, reason, next)
                    }
                    None => println!("{}: {} (no later working day)", check.date, reason),
                }
            }
            if !check.ok {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Holiday { date } => match cal.holiday_name(&date) {
            Some(name) => println!("{}", name),
            None => println!("{}: not a holiday", format_date(&date)),
        },
        Commands::Holidays => {
            for (date, name) in cal.holidays() {
                println!("{}  {}", format_date(date), name);
            }
        }
        Commands::Between { start, end } => {
            println!("{}", cal.working_days_between(&start, &end));
        }
        Commands::Month { year, month } => {
            let output = cal
                .print_month(year, month)
                .with_context(|| format!("Cannot print month {} of {}", month, year))?;
            print!("{}", output);
        }
        Commands::Year { year } => {
            let output = cal
                .print_year(year)
                .with_context(|| format!("Cannot print year {}", year))?;
            print!("{}", output);
        }
        Commands::Export => println!("{}", cal.to_json_pretty()?),
        Commands::Calendars => {}
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
