//! Day counts, civil calendars, observer locations and ephemeris time.
//!
//! This crate provides:
//! - `FixedDate` (integer day count, day 1 = Gregorian 0001-01-01) and `Moment`
//! - Proleptic Gregorian ↔ fixed date conversions
//! - Julian → fixed date conversion (no year zero)
//! - `Location` with the Iran and Tehran presets, local ↔ universal time
//! - ΔT (Dynamical − Universal time) by historical era, and Julian centuries
//!   of dynamical time since J2000

pub mod delta_t;
pub mod error;
pub mod fixed;
pub mod gregorian;
pub mod julian;
pub mod location;

pub use delta_t::{J2000, dynamical_from_universal, ephemeris_correction, julian_centuries};
pub use error::TimeError;
pub use fixed::{FixedDate, Moment, SECONDS_PER_DAY, fixed_from_moment, hr};
pub use gregorian::{
    GREGORIAN_EPOCH, GregorianDate, fixed_from_gregorian, gregorian_date_difference,
    gregorian_from_fixed, gregorian_leap_year, gregorian_month_length, gregorian_new_year,
    gregorian_year_from_fixed,
};
pub use julian::{JULIAN_EPOCH, fixed_from_julian, julian_leap_year};
pub use location::{
    IRAN, Location, TEHRAN, local_from_universal, standard_from_universal, universal_from_local,
    zone_from_longitude,
};
