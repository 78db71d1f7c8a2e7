//! Mean obliquity of the ecliptic.
//!
//! Source: Laskar-style cubic in Julian centuries of TD from J2000,
//! as tabulated by Meeus (Astronomical Algorithms, Eq. 22.2).

use taqvim_math::{angle_deg, poly};
use taqvim_time::{Moment, julian_centuries};

/// Mean obliquity of the ecliptic in degrees at moment `tee`.
pub fn obliquity(tee: Moment) -> f64 {
    let c = julian_centuries(tee);
    angle_deg(23.0, 26.0, 21.448)
        + poly(
            c,
            &[
                0.0,
                angle_deg(0.0, 0.0, -46.8150),
                angle_deg(0.0, 0.0, -0.00059),
                angle_deg(0.0, 0.0, 0.001813),
            ],
        )
}
