//! Longitudinal nutation and annual aberration (two-term approximations).
//!
//! Both are small corrections in degrees added to the geometric solar
//! longitude to obtain the apparent longitude.

use taqvim_math::{cos_deg, poly, sin_deg};
use taqvim_time::{Moment, julian_centuries};

/// Nutation in longitude, degrees, at moment `tee`.
///
/// Dominated by the 18.6-year lunar node term (amplitude ~17.2″).
pub fn nutation(tee: Moment) -> f64 {
    let c = julian_centuries(tee);
    // Lunar node and twice the solar mean longitude.
    let cap_a = poly(c, &[124.90, -1934.134, 0.002063]);
    let cap_b = poly(c, &[201.11, 72001.5377, 0.00057]);
    -0.004778 * sin_deg(cap_a) - 0.0003667 * sin_deg(cap_b)
}

/// Annual aberration, degrees, at moment `tee`. Stays within 0.35″ of −20.07″.
pub fn aberration(tee: Moment) -> f64 {
    let c = julian_centuries(tee);
    0.0000974 * cos_deg(177.63 + 35999.01848 * c) - 0.005575
}
