//! Error types for civil-calendar input.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from validating or parsing Gregorian dates.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    InvalidMonth { month: u32 },
    /// Day outside the length of the given month.
    InvalidDay { year: i64, month: u32, day: u32 },
    /// Date string is not of the form `YYYY-MM-DD`.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { month } => write!(f, "invalid month: {month}"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day {day} for {year:04}-{month:02}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
