//! Equation of time and apparent (sundial) time.
//!
//! Source: Meeus, "Astronomical Algorithms", 2nd ed. (1998), p. 185.

use std::f64::consts::PI;

use taqvim_math::{cos_deg, poly, sin_deg, tan_deg};
use taqvim_time::{FixedDate, Location, Moment, hr, julian_centuries, universal_from_local};

use crate::obliquity::obliquity;

/// Equation of time as a fraction of a day at moment `tee`.
///
/// Apparent minus mean solar time. The magnitude is clamped to 12 hours so
/// the series stays usable far from J2000; the sign is kept.
pub fn equation_of_time(tee: Moment) -> f64 {
    let c = julian_centuries(tee);
    let lambda = poly(c, &[280.46645, 36000.76983, 0.0003032]);
    let anomaly = poly(c, &[357.52910, 35999.05030, -0.0001559, -0.00000048]);
    let eccentricity = poly(c, &[0.016708617, -0.000042037, -0.0000001236]);
    let epsilon = obliquity(tee);
    let y = tan_deg(epsilon / 2.0).powi(2);
    let equation = (1.0 / 2.0 / PI)
        * (y * sin_deg(2.0 * lambda) - 2.0 * eccentricity * sin_deg(anomaly)
            + 4.0 * eccentricity * y * sin_deg(anomaly) * cos_deg(2.0 * lambda)
            - 0.5 * y * y * sin_deg(4.0 * lambda)
            - 1.25 * eccentricity * eccentricity * sin_deg(2.0 * anomaly));
    equation.signum() * equation.abs().min(hr(12.0))
}

/// Local mean time from sundial time `tee` at `location`.
pub fn local_from_apparent(tee: Moment, location: &Location) -> Moment {
    tee - equation_of_time(universal_from_local(tee, location))
}

/// Universal time from sundial time `tee` at `location`.
pub fn universal_from_apparent(tee: Moment, location: &Location) -> Moment {
    universal_from_local(local_from_apparent(tee, location), location)
}

/// Universal time of true (apparent) noon on fixed date `date` at `location`.
pub fn midday(date: FixedDate, location: &Location) -> Moment {
    universal_from_apparent(date as f64 + hr(12.0), location)
}
