//! Apparent geocentric solar longitude.
//!
//! Source: P. Bretagnon & J.-L. Simon, "Planetary Programs and Tables from
//! −4000 to +2800" (Willmann-Bell, 1986), 49 periodic terms, plus the
//! nutation and aberration corrections from [`crate::nutation`].

use taqvim_math::{normalize_360, sin_deg};
use taqvim_time::{Moment, julian_centuries};

use crate::nutation::{aberration, nutation};

/// Mean interval between vernal equinoxes, in days.
pub const MEAN_TROPICAL_YEAR: f64 = 365.242189;

/// Periodic terms: `[amplitude, phase_deg, rate_deg_per_century]`.
///
/// Each contributes `amplitude × sin(phase + rate × c)`; amplitudes are in
/// units of 10⁻⁷ radian (scaled by [`AMPLITUDE_SCALE`]).
#[rustfmt::skip]
static SOLAR_LONGITUDE_TERMS: [[f64; 3]; 49] = [
    //  amplitude      phase            rate
    [ 403406.0,  270.54861,      0.9287892],
    [ 195207.0,  340.19128,  35999.1376958],
    [ 119433.0,   63.91854,  35999.4089666],
    [ 112392.0,  331.26220,  35998.7287385],
    [   3891.0,    317.843,    71998.20261],
    [   2819.0,     86.631,     71998.4403],
    [   1721.0,    240.052,    36000.35726],
    [    660.0,     310.26,     71997.4812],
    [    350.0,     247.23,     32964.4678],
    [    334.0,     260.87,       -19.4410],
    [    314.0,     297.82,    445267.1117],
    [    268.0,     343.14,     45036.8840],
    [    242.0,     166.79,         3.1008],
    [    234.0,      81.53,     22518.4434],
    [    158.0,       3.50,       -19.9739],
    [    132.0,     132.75,     65928.9345],
    [    129.0,     182.95,      9038.0293],
    [    114.0,     162.03,      3034.7684],
    [     99.0,       29.8,      33718.148],
    [     93.0,      266.4,       3034.448],
    [     86.0,      249.2,      -2280.773],
    [     78.0,      157.6,      29929.992],
    [     72.0,      257.8,      31556.493],
    [     68.0,      185.1,        149.588],
    [     64.0,       69.9,       9037.750],
    [     46.0,        8.0,     107997.405],
    [     38.0,      197.1,      -4444.176],
    [     37.0,      250.4,        151.771],
    [     32.0,       65.3,      67555.316],
    [     29.0,      162.7,      31556.080],
    [     28.0,      341.5,      -4561.540],
    [     27.0,      291.6,     107996.706],
    [     27.0,       98.5,       1221.655],
    [     25.0,      146.7,      62894.167],
    [     24.0,      110.0,      31437.369],
    [     21.0,        5.2,      14578.298],
    [     21.0,      342.6,     -31931.757],
    [     20.0,      230.9,      34777.243],
    [     18.0,      256.1,       1221.999],
    [     17.0,       45.3,      62894.511],
    [     14.0,      242.9,      -4442.039],
    [     13.0,      115.2,     107997.909],
    [     13.0,      151.8,        119.066],
    [     13.0,      285.3,      16859.071],
    [     12.0,       53.3,         -4.578],
    [     10.0,      126.6,      26895.292],
    [     10.0,      205.7,        -39.127],
    [     10.0,       85.9,      12297.536],
    [     10.0,      146.1,      90073.778],
];

/// 10⁻⁷ radian expressed in degrees.
const AMPLITUDE_SCALE: f64 = 0.000005729577951308232;

/// Mean longitude of the Sun at J2000 and its secular rate (deg/century).
const MEAN_LONGITUDE_J2000: f64 = 282.7771834;
const MEAN_LONGITUDE_RATE: f64 = 36000.76953744;

/// Apparent solar longitude in degrees, [0, 360), at moment `tee`.
pub fn solar_longitude(tee: Moment) -> f64 {
    let c = julian_centuries(tee);
    let periodic: f64 = SOLAR_LONGITUDE_TERMS
        .iter()
        .map(|&[amplitude, phase, rate]| amplitude * sin_deg(phase + rate * c))
        .sum();
    let lambda = MEAN_LONGITUDE_J2000 + MEAN_LONGITUDE_RATE * c + AMPLITUDE_SCALE * periodic;
    normalize_360(lambda + aberration(tee) + nutation(tee))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_at_march_equinox_2024() {
        // Noon UT 2024-03-20: the Sun passed 0° at ~03:06 UT.
        let lambda = solar_longitude(738_965.5);
        assert!(
            (lambda - 0.368_285_912_443_752_75).abs() < 1e-9,
            "λ = {lambda}"
        );
    }

    #[test]
    fn result_in_range() {
        for k in 0..400 {
            let lambda = solar_longitude(-50_000.0 + 2_011.3 * k as f64);
            assert!((0.0..360.0).contains(&lambda), "λ out of range: {lambda}");
        }
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let start = 738_900.5;
        for k in 0..60 {
            let tee = start + k as f64;
            let step = normalize_360(solar_longitude(tee + 1.0) - solar_longitude(tee));
            assert!(step > 0.94 && step < 1.03, "daily motion {step} at {tee}");
        }
    }

    #[test]
    fn solstices_and_equinoxes_2024() {
        // Noon UT on the day of each 2024 cardinal point (all after 00 UT).
        let cases = [
            (739_057.5, 90.0),  // 2024-06-20, solstice 20:51 UT
            (739_151.5, 180.0), // 2024-09-22, equinox 12:44 UT
            (739_241.5, 270.0), // 2024-12-21, solstice 09:20 UT
        ];
        for (tee, target) in cases {
            let lambda = solar_longitude(tee);
            assert!((lambda - target).abs() < 1.0, "λ({tee}) = {lambda}, expected ~{target}");
        }
    }
}
