//! Ephemeris correction ΔT = TD − UT, and dynamical-time centuries.
//!
//! Piecewise polynomial model selected by the Gregorian year containing the
//! moment. Meeus, "Astronomical Algorithms" (1991) for 1600–1986; NASA
//! eclipse-site polynomials (Espenak & Meeus) elsewhere. Bands are disjoint
//! and not blended, so the model jumps slightly at band edges.

use taqvim_math::poly;

use crate::fixed::{Moment, SECONDS_PER_DAY, fixed_from_moment, hr};
use crate::gregorian::{gregorian_date_difference, gregorian_new_year, gregorian_year_from_fixed};

/// Noon at the start of Gregorian year 2000 (J2000.0) as a moment.
pub const J2000: Moment = hr(12.0) + gregorian_new_year(2000) as f64;

/// Days in a Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Dynamical minus Universal time, in days, at moment `tee`.
pub fn ephemeris_correction(tee: Moment) -> f64 {
    let year = gregorian_year_from_fixed(fixed_from_moment(tee));
    let y = year as f64;
    match year {
        2051..=2150 => {
            (-20.0 + 32.0 * ((y - 1820.0) / 100.0).powi(2) + 0.5628 * (2150.0 - y))
                / SECONDS_PER_DAY
        }
        2006..=2050 => poly(y - 2000.0, &[62.92, 0.32217, 0.005589]) / SECONDS_PER_DAY,
        1987..=2005 => {
            poly(
                y - 2000.0,
                &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
            ) / SECONDS_PER_DAY
        }
        // 1800–1986 polynomials are in days already, in centuries from 1900.
        1900..=1986 => poly(
            centuries_from_1900(year),
            &[-0.00002, 0.000297, 0.025184, -0.181133, 0.553040, -0.861938, 0.677066, -0.212591],
        ),
        1800..=1899 => poly(
            centuries_from_1900(year),
            &[
                -0.000009, 0.003844, 0.083563, 0.865736, 4.867575, 15.845535, 31.332267,
                38.291999, 28.316289, 11.636204, 2.043794,
            ],
        ),
        1700..=1799 => {
            poly(y - 1700.0, &[8.118780842, -0.005092142, 0.003336121, -0.0000266484])
                / SECONDS_PER_DAY
        }
        1600..=1699 => {
            poly(y - 1600.0, &[120.0, -0.9808, -0.01532, 0.000140272128]) / SECONDS_PER_DAY
        }
        500..=1599 => {
            poly(
                (y - 1000.0) / 100.0,
                &[1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073],
            ) / SECONDS_PER_DAY
        }
        -499..=499 => {
            poly(
                y / 100.0,
                &[10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521],
            ) / SECONDS_PER_DAY
        }
        // Long-term parabola for year <= -500 and year > 2150.
        _ => poly((y - 1820.0) / 100.0, &[-20.0, 0.0, 32.0]) / SECONDS_PER_DAY,
    }
}

/// Julian centuries from 1900-01-01 to July 1 of `year`.
fn centuries_from_1900(year: i64) -> f64 {
    gregorian_date_difference((1900, 1, 1), (year, 7, 1)) as f64 / DAYS_PER_CENTURY
}

/// Dynamical time at Universal moment `tee`.
pub fn dynamical_from_universal(tee: Moment) -> Moment {
    tee + ephemeris_correction(tee)
}

/// Julian centuries of dynamical time since J2000 at Universal moment `tee`.
pub fn julian_centuries(tee: Moment) -> f64 {
    (dynamical_from_universal(tee) - J2000) / DAYS_PER_CENTURY
}
