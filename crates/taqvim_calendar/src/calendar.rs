//! Common interface over the astronomical and fast Persian calendars.
//!
//! The free conversion functions trust their input. Implementations of
//! [`PersianCalendar`] validate dates against the calendar's own leap years
//! first, so `1403-12-30` is accepted and `1402-12-30` is rejected.

use taqvim_time::{FixedDate, gregorian_year_from_fixed};

use crate::astronomical::{AstronomicalPersian, PERSIAN_EPOCH};
use crate::date::{PersianDate, days_before_month, persian_month_length};
use crate::error::CalendarError;
use crate::fast::{
    FastPersian, check_year, checked_fixed_from_persian_fast, checked_persian_fast_from_fixed,
    persian_fast_leap_year,
};

/// Persian year whose New Year falls in Gregorian year `g_year`.
pub const fn persian_year_at_nowruz(g_year: i64) -> i64 {
    let year = g_year - gregorian_year_from_fixed(PERSIAN_EPOCH) + 1;
    // No year zero.
    if year <= 0 { year - 1 } else { year }
}

/// A Persian calendar: where each year starts, and which years are leap.
pub trait PersianCalendar {
    /// Fixed date of 1 Farvardin of `year`.
    fn new_year(&self, year: i64) -> Result<FixedDate, CalendarError>;

    /// True if `year` has 366 days.
    fn leap_year(&self, year: i64) -> Result<bool, CalendarError>;

    /// Persian date of a fixed date.
    fn from_fixed(&self, date: FixedDate) -> Result<PersianDate, CalendarError>;

    /// Days in `month` of `year`.
    fn month_length(&self, year: i64, month: u32) -> Result<u32, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let leap = self.leap_year(year)?;
        Ok(persian_month_length(month, leap))
    }

    /// Check that `date` exists in this calendar.
    fn validate(&self, date: PersianDate) -> Result<(), CalendarError> {
        if date.year == 0 {
            return Err(CalendarError::YearZero);
        }
        let length = self.month_length(date.year, date.month)?;
        if date.day == 0 || date.day > length {
            return Err(CalendarError::InvalidDay {
                year: date.year,
                month: date.month,
                day: date.day,
            });
        }
        Ok(())
    }

    /// Build a validated date.
    fn date(&self, year: i64, month: u32, day: u32) -> Result<PersianDate, CalendarError> {
        let date = PersianDate::new(year, month, day);
        self.validate(date)?;
        Ok(date)
    }

    /// Fixed date of Nowruz (1 Farvardin) in Gregorian year `g_year`.
    fn nowruz(&self, g_year: i64) -> Result<FixedDate, CalendarError> {
        self.new_year(persian_year_at_nowruz(g_year))
    }

    /// Fixed date of a Persian date, after validating it.
    fn to_fixed(&self, date: PersianDate) -> Result<FixedDate, CalendarError> {
        self.validate(date)?;
        Ok(self.new_year(date.year)? - 1 + days_before_month(date.month) + date.day as i64)
    }
}

impl PersianCalendar for AstronomicalPersian {
    fn new_year(&self, year: i64) -> Result<FixedDate, CalendarError> {
        if year == 0 {
            return Err(CalendarError::YearZero);
        }
        self.fixed_from_persian(PersianDate::new_year(year))
    }

    fn leap_year(&self, year: i64) -> Result<bool, CalendarError> {
        AstronomicalPersian::leap_year(self, year)
    }

    fn from_fixed(&self, date: FixedDate) -> Result<PersianDate, CalendarError> {
        self.persian_from_fixed(date)
    }
}

impl PersianCalendar for FastPersian {
    fn new_year(&self, year: i64) -> Result<FixedDate, CalendarError> {
        checked_fixed_from_persian_fast(PersianDate::new_year(year))
    }

    fn leap_year(&self, year: i64) -> Result<bool, CalendarError> {
        check_year(year)?;
        Ok(persian_fast_leap_year(year))
    }

    fn from_fixed(&self, date: FixedDate) -> Result<PersianDate, CalendarError> {
        checked_persian_fast_from_fixed(date)
    }
}
