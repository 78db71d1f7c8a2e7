//! Persian dates, months and the month layout of the year.
//!
//! Months 1–6 have 31 days, months 7–11 have 30, and Esfand (12) has 29,
//! or 30 in a leap year. The layout is shared by both calendars; they differ
//! only in where each year starts.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use taqvim_math::ceil_div;

use crate::error::CalendarError;

/// Persian calendar date. Year 0 does not exist (year -1 precedes year 1).
///
/// Construction does not validate; use
/// [`PersianCalendar::date`](crate::PersianCalendar::date) for checked input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersianDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl PersianDate {
    /// Create a date without validation.
    pub const fn new(year: i64, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// 1 Farvardin of `year`.
    pub const fn new_year(year: i64) -> Self {
        Self::new(year, 1, 1)
    }

    /// Named month, if `month` is in 1..=12.
    pub fn persian_month(self) -> Option<PersianMonth> {
        PersianMonth::from_number(self.month)
    }

    /// Day of the year, 1-based. Assumes a valid date.
    pub fn day_of_year(self) -> u32 {
        days_before_month(self.month) as u32 + self.day
    }
}

impl Display for PersianDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for PersianDate {
    type Err = CalendarError;

    /// Parse `YYYY-MM-DD` (a leading `-` marks a year before the era).
    ///
    /// Only the shape is checked; month and day ranges are checked by the
    /// calendar, which knows the leap years.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().rsplitn(3, '-');
        let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CalendarError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        };
        let year: i64 = year
            .parse()
            .map_err(|_| CalendarError::Parse(format!("bad year '{year}'")))?;
        let month: u32 = month
            .parse()
            .map_err(|_| CalendarError::Parse(format!("bad month '{month}'")))?;
        let day: u32 = day
            .parse()
            .map_err(|_| CalendarError::Parse(format!("bad day '{day}'")))?;
        Ok(Self::new(year, month, day))
    }
}

/// The twelve Persian months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersianMonth {
    Farvardin,
    Ordibehesht,
    Khordad,
    Tir,
    Mordad,
    Shahrivar,
    Mehr,
    Aban,
    Azar,
    Dey,
    Bahman,
    Esfand,
}

/// All 12 months in order (index 0 = Farvardin).
pub const ALL_MONTHS: [PersianMonth; 12] = [
    PersianMonth::Farvardin,
    PersianMonth::Ordibehesht,
    PersianMonth::Khordad,
    PersianMonth::Tir,
    PersianMonth::Mordad,
    PersianMonth::Shahrivar,
    PersianMonth::Mehr,
    PersianMonth::Aban,
    PersianMonth::Azar,
    PersianMonth::Dey,
    PersianMonth::Bahman,
    PersianMonth::Esfand,
];

const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

impl PersianMonth {
    /// Month from its 1-based number.
    pub fn from_number(month: u32) -> Option<Self> {
        month
            .checked_sub(1)
            .and_then(|i| ALL_MONTHS.get(i as usize))
            .copied()
    }

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Transliterated month name.
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self as usize]
    }
}

/// Days in `month` (1..=12) of a year with the given leap flag.
/// Returns 0 for an invalid month.
pub const fn persian_month_length(month: u32, leap: bool) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if leap => 30,
        12 => 29,
        _ => 0,
    }
}

/// Days in the year before the first of `month`.
pub const fn days_before_month(month: u32) -> i64 {
    let month = month as i64;
    if month <= 7 {
        31 * (month - 1)
    } else {
        30 * (month - 1) + 6
    }
}

/// Month containing 1-based `day_of_year`.
pub const fn month_from_day_of_year(day_of_year: i64) -> u32 {
    if day_of_year <= 186 {
        ceil_div(day_of_year, 31) as u32
    } else {
        ceil_div(day_of_year - 6, 30) as u32
    }
}
