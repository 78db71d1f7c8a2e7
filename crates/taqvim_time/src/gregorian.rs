//! Proleptic Gregorian calendar.
//!
//! Closed-form leap-day counting; astronomical year numbering (year 0 exists
//! and is leap).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use taqvim_math::{floor_div, floor_mod};

use crate::error::TimeError;
use crate::fixed::FixedDate;

/// Fixed date of 0001-01-01 (Gregorian).
pub const GREGORIAN_EPOCH: FixedDate = 1;

/// Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl GregorianDate {
    /// Create a date, rejecting months outside 1..=12 and days past month end.
    pub fn new(year: i64, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMonth { month });
        }
        if day == 0 || day > gregorian_month_length(year, month) {
            return Err(TimeError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Fixed date of this calendar date.
    pub fn to_fixed(self) -> FixedDate {
        fixed_from_gregorian(self.year, self.month, self.day)
    }
}

impl Display for GregorianDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`; a leading `-` marks a year before 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().rsplitn(3, '-');
        let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        };
        let year: i64 = year
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad year '{year}'")))?;
        let month: u32 = month
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad month '{month}'")))?;
        let day: u32 = day
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad day '{day}'")))?;
        Self::new(year, month, day)
    }
}

/// True if `year` is a Gregorian leap year.
pub const fn gregorian_leap_year(year: i64) -> bool {
    let r = floor_mod(year, 400);
    floor_mod(year, 4) == 0 && r != 100 && r != 200 && r != 300
}

/// Number of days in `month` of `year`. Returns 0 for an invalid month.
pub const fn gregorian_month_length(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if gregorian_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Fixed date of a Gregorian date. Input is not validated.
pub const fn fixed_from_gregorian(year: i64, month: u32, day: u32) -> FixedDate {
    let month = month as i64;
    // Days in prior months, assuming a 30-day February, then corrected.
    let feb_correction = if month <= 2 {
        0
    } else if gregorian_leap_year(year) {
        -1
    } else {
        -2
    };
    GREGORIAN_EPOCH - 1
        + 365 * (year - 1)
        + floor_div(year - 1, 4)
        - floor_div(year - 1, 100)
        + floor_div(year - 1, 400)
        + floor_div(367 * month - 362, 12)
        + feb_correction
        + day as i64
}

/// Gregorian year containing a fixed date.
pub const fn gregorian_year_from_fixed(date: FixedDate) -> i64 {
    let d0 = date - GREGORIAN_EPOCH;
    let n400 = floor_div(d0, 146_097);
    let d1 = floor_mod(d0, 146_097);
    let n100 = d1 / 36_524;
    let d2 = d1 % 36_524;
    let n4 = d2 / 1461;
    let d3 = d2 % 1461;
    let n1 = d3 / 365;
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    // Day 366 of a leap year closes the cycle instead of opening the next year.
    if n100 == 4 || n1 == 4 { year } else { year + 1 }
}

/// Fixed date of January 1 of `year`.
pub const fn gregorian_new_year(year: i64) -> FixedDate {
    fixed_from_gregorian(year, 1, 1)
}

/// Gregorian date of a fixed date.
pub fn gregorian_from_fixed(date: FixedDate) -> GregorianDate {
    let year = gregorian_year_from_fixed(date);
    let prior_days = date - gregorian_new_year(year);
    let correction = if date < fixed_from_gregorian(year, 3, 1) {
        0
    } else if gregorian_leap_year(year) {
        1
    } else {
        2
    };
    let month = floor_div(12 * (prior_days + correction) + 373, 367) as u32;
    let day = (date - fixed_from_gregorian(year, month, 1) + 1) as u32;
    GregorianDate { year, month, day }
}

/// Days from the first date until the second.
pub const fn gregorian_date_difference(from: (i64, u32, u32), to: (i64, u32, u32)) -> i64 {
    fixed_from_gregorian(to.0, to.1, to.2) - fixed_from_gregorian(from.0, from.1, from.2)
}
