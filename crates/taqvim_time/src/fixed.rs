//! Fixed dates and moments.
//!
//! A fixed date is an integer count of days with day 1 at Gregorian
//! 0001-01-01 (midnight starting that day). A moment is a fixed date plus a
//! fraction of a day; moments appear only inside astronomical computations,
//! never as calendar dates.

/// Integer day count. Monotonic, one unit per civil day.
pub type FixedDate = i64;

/// Fixed date plus fractional day.
pub type Moment = f64;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// `x` hours as a fraction of a day.
pub const fn hr(x: f64) -> f64 {
    x / 24.0
}

/// Fixed date containing a moment.
pub fn fixed_from_moment(tee: Moment) -> FixedDate {
    tee.floor() as FixedDate
}
