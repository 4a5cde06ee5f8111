//! Define a generic Monday to Friday working week without any specific holidays.

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub const HOLIDAYS: &[(&str, &str)] = &[]; // no specific holidays
