//! Error types for Persian calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

use taqvim_search::SearchError;

/// Errors from Persian date validation and conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// The Persian calendar has no year zero.
    YearZero,
    /// Month outside 1..=12.
    InvalidMonth { month: u32 },
    /// Day outside the length of the month in that year.
    InvalidDay { year: i64, month: u32, day: u32 },
    /// Year outside the range certified for the fast calendar.
    OutOfSupportedRange { year: i64, first: i64, last: i64 },
    /// Date string is not of the form `YYYY-MM-DD`.
    Parse(String),
    /// Error from the equinox search.
    Search(SearchError),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearZero => write!(f, "Persian year 0 does not exist"),
            Self::InvalidMonth { month } => write!(f, "invalid Persian month: {month}"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day {day} for Persian {year:04}-{month:02}")
            }
            Self::OutOfSupportedRange { year, first, last } => write!(
                f,
                "Persian year {year} outside supported range {first}..={last}"
            ),
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::Search(e) => write!(f, "search error: {e}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for CalendarError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
