//! Julian calendar (fixed date from Julian only).
//!
//! Years are counted without a year zero: 1 BCE is year -1.

use taqvim_math::{floor_div, floor_mod};

use crate::fixed::FixedDate;
use crate::gregorian::fixed_from_gregorian;

/// Fixed date of Julian 0001-01-01 (Gregorian 0000-12-30).
pub const JULIAN_EPOCH: FixedDate = fixed_from_gregorian(0, 12, 30);

/// True if `year` is a Julian leap year (…, -5, -1, 4, 8, …).
pub const fn julian_leap_year(year: i64) -> bool {
    floor_mod(year, 4) == if year > 0 { 0 } else { 3 }
}

/// Fixed date of a Julian date. Input is not validated.
pub const fn fixed_from_julian(year: i64, month: u32, day: u32) -> FixedDate {
    let y = if year < 0 { year + 1 } else { year };
    let month = month as i64;
    let feb_correction = if month <= 2 {
        0
    } else if julian_leap_year(year) {
        -1
    } else {
        -2
    };
    JULIAN_EPOCH - 1
        + 365 * (y - 1)
        + floor_div(y - 1, 4)
        + floor_div(367 * month - 362, 12)
        + feb_correction
        + day as i64
}
