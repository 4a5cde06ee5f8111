//! Define the Kenyan public holiday calendar used for task deadlines.
//!
//! Holidays are enumerated per date for the operating year. Later years are supplied through
//! the `[holidays]` table of the calendar configuration file.

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub const HOLIDAYS: &[(&str, &str)] = &[
    ("2024-01-01", "New Year's Day"),
    ("2024-05-01", "Labour Day"),
    ("2024-06-01", "Madaraka Day"),
    ("2024-10-20", "Mashujaa Day"),
    ("2024-12-12", "Jamhuri Day"),
    ("2024-12-25", "Christmas Day"),
    ("2024-12-26", "Boxing Day"),
];
