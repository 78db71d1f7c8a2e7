//! Persian (Solar Hijri) calendar, astronomical and arithmetic.
//!
//! This crate provides:
//! - The astronomical calendar: the year starts on the first day whose true
//!   noon (at a chosen location) follows the vernal equinox
//! - A fast O(1) calendar: the 33-year intercalation cycle patched by a
//!   table of exceptions, certified identical to the astronomical calendar
//!   at the Iran meridian for years 1178–3000
//! - `PersianDate`, month names and lengths, and a [`PersianCalendar`] trait
//!   that validates dates before converting them
//!
//! # Quick start
//!
//! ```rust,ignore
//! use taqvim_calendar::{AstronomicalPersian, FastPersian, PersianCalendar};
//! use taqvim_time::fixed_from_gregorian;
//!
//! let nowruz = fixed_from_gregorian(2024, 3, 20);
//! let astro = AstronomicalPersian::default();
//! assert_eq!(astro.from_fixed(nowruz)?.to_string(), "1403-01-01");
//! assert_eq!(FastPersian.from_fixed(nowruz)?, astro.from_fixed(nowruz)?);
//! ```

pub mod astronomical;
pub mod calendar;
pub mod date;
pub mod error;
pub mod fast;

pub use astronomical::{
    AstronomicalPersian, PERSIAN_EPOCH, fixed_from_persian, nowruz, persian_from_fixed,
    persian_leap_year, persian_new_year_on_or_before,
};
pub use calendar::{PersianCalendar, persian_year_at_nowruz};
pub use date::{
    ALL_MONTHS, PersianDate, PersianMonth, days_before_month, month_from_day_of_year,
    persian_month_length,
};
pub use error::CalendarError;
pub use fast::{
    FastPersian, NON_LEAP_CORRECTION, PERSIAN_FAST_EPOCH, SUPPORTED_FIRST_YEAR,
    SUPPORTED_LAST_YEAR, checked_fixed_from_persian_fast, checked_persian_fast_from_fixed,
    cycle_leap_year, fixed_from_persian_fast, is_supported_year, persian_fast_from_fixed,
    persian_fast_leap_year,
};
