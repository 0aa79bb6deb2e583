//! Errors reported by calendar conversions and diary configuration.

use crate::chinese::Month;
use crate::date::Date;

/// Crate-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Chinese date does not exist, e.g. day 30 of a 29-day month, or a
    /// leap month in a year without one.
    #[error("invalid Chinese date: cycle {cycle}, year {year}, month {month:?}, day {day}")]
    InvalidDate {
        cycle: u32,
        year: u32,
        month: Month,
        day: u32,
    },
    /// The date lies outside the range covered by the calendar data.
    #[error("date {} outside supported range", .0.iso_gregorian())]
    UnsupportedDate(Date),
    /// The Chinese year (numbered as the Gregorian year it mostly falls in)
    /// is outside the range covered by the calendar data.
    #[error("Chinese year {0} outside supported range")]
    UnsupportedYear(i32),
    /// A month is not in `1..=12`, or a legacy fractional month is neither
    /// `n` nor `n + 0.5`.
    #[error("invalid month {0}")]
    InvalidMonth(f64),
    #[error("failed to parse diary configuration")]
    ConfigParse(#[from] toml::de::Error),
    #[error("invalid diary configuration: {0}")]
    Config(String),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        use Error::*;
        match (self, other) {
            (
                InvalidDate {
                    cycle,
                    year,
                    month,
                    day,
                },
                InvalidDate {
                    cycle: c,
                    year: y,
                    month: m,
                    day: d,
                },
            ) => (cycle, year, month, day) == (c, y, m, d),
            (UnsupportedDate(a), UnsupportedDate(b)) => a == b,
            (UnsupportedYear(a), UnsupportedYear(b)) => a == b,
            (InvalidMonth(a), InvalidMonth(b)) => a.to_bits() == b.to_bits(),
            (Config(a), Config(b)) => a == b,
            _ => false,
        }
    }
}
