//! Astronomical Persian calendar.
//!
//! A year begins on the first day whose true noon, at the calendar's
//! location, follows the vernal equinox. New Years are found by the equinox
//! search in `taqvim_search`; everything else is month arithmetic.

use taqvim_search::{EquinoxConfig, Season, solar_longitude_on_or_before};
use taqvim_solar::MEAN_TROPICAL_YEAR;
use taqvim_time::{FixedDate, Location, fixed_from_julian};

use crate::calendar::PersianCalendar;
use crate::date::{PersianDate, days_before_month, month_from_day_of_year};
use crate::error::CalendarError;

/// Fixed date of 1 Farvardin, year 1 (Julian 622-03-19).
pub const PERSIAN_EPOCH: FixedDate = fixed_from_julian(622, 3, 19);

/// Days from a year's estimated start to a date safely past its equinox.
const EPOCH_TO_AUTUMN_DAYS: i64 = 180;

/// Astronomical Persian calendar observed from a fixed location.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AstronomicalPersian {
    /// Where true noon is measured.
    pub location: Location,
    /// Equinox search settings.
    pub search: EquinoxConfig,
}

impl AstronomicalPersian {
    pub const fn new(location: Location, search: EquinoxConfig) -> Self {
        Self { location, search }
    }

    /// Calendar at `location` with the default search settings.
    pub fn at(location: Location) -> Self {
        Self { location, search: EquinoxConfig::default() }
    }

    /// Fixed date of the Persian New Year on or before `date`.
    pub fn new_year_on_or_before(&self, date: FixedDate) -> Result<FixedDate, CalendarError> {
        let day = solar_longitude_on_or_before(
            Season::Spring.longitude_deg(),
            date,
            &self.location,
            &self.search,
        )?;
        Ok(day)
    }

    /// Fixed date of a Persian date. The date is assumed valid.
    pub fn fixed_from_persian(&self, date: PersianDate) -> Result<FixedDate, CalendarError> {
        // Year -1 directly precedes year 1.
        let elapsed = if date.year > 0 { date.year - 1 } else { date.year };
        let autumn = PERSIAN_EPOCH
            + EPOCH_TO_AUTUMN_DAYS
            + (MEAN_TROPICAL_YEAR * elapsed as f64).floor() as i64;
        let new_year = self.new_year_on_or_before(autumn)?;
        Ok(new_year - 1 + days_before_month(date.month) + date.day as i64)
    }

    /// Persian date of a fixed date.
    pub fn persian_from_fixed(&self, date: FixedDate) -> Result<PersianDate, CalendarError> {
        let new_year = self.new_year_on_or_before(date)?;
        let y = ((new_year - PERSIAN_EPOCH) as f64 / MEAN_TROPICAL_YEAR).round_ties_even() as i64
            + 1;
        let year = if y > 0 { y } else { y - 1 };
        let day_of_year = date - self.fixed_from_persian(PersianDate::new_year(year))? + 1;
        let month = month_from_day_of_year(day_of_year);
        let day = (day_of_year - days_before_month(month)) as u32;
        Ok(PersianDate::new(year, month, day))
    }

    /// True if `year` has 366 days.
    pub fn leap_year(&self, year: i64) -> Result<bool, CalendarError> {
        if year == 0 {
            return Err(CalendarError::YearZero);
        }
        let next = if year == -1 { 1 } else { year + 1 };
        let start = self.fixed_from_persian(PersianDate::new_year(year))?;
        let end = self.fixed_from_persian(PersianDate::new_year(next))?;
        Ok(end - start == 366)
    }
}

/// Persian New Year on or before `date`, observed at `location`.
pub fn persian_new_year_on_or_before(
    date: FixedDate,
    location: &Location,
) -> Result<FixedDate, CalendarError> {
    AstronomicalPersian::at(*location).new_year_on_or_before(date)
}

/// Fixed date of an astronomical Persian date observed at `location`.
pub fn fixed_from_persian(
    date: PersianDate,
    location: &Location,
) -> Result<FixedDate, CalendarError> {
    AstronomicalPersian::at(*location).fixed_from_persian(date)
}

/// Astronomical Persian date of `date` observed at `location`.
pub fn persian_from_fixed(
    date: FixedDate,
    location: &Location,
) -> Result<PersianDate, CalendarError> {
    AstronomicalPersian::at(*location).persian_from_fixed(date)
}

/// True if astronomical Persian `year` is leap at `location`.
pub fn persian_leap_year(year: i64, location: &Location) -> Result<bool, CalendarError> {
    AstronomicalPersian::at(*location).leap_year(year)
}

/// Fixed date of Nowruz in Gregorian year `g_year` at `location`.
pub fn nowruz(g_year: i64, location: &Location) -> Result<FixedDate, CalendarError> {
    AstronomicalPersian::at(*location).nowruz(g_year)
}
