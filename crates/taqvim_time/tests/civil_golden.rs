//! Golden dates across the civil calendars, and ΔT across its era bands.

use taqvim_time::{
    SECONDS_PER_DAY, ephemeris_correction, fixed_from_gregorian, fixed_from_julian,
    gregorian_from_fixed, gregorian_year_from_fixed,
};

#[test]
fn gregorian_reform() {
    // Julian 1582-10-04 was followed by Gregorian 1582-10-15.
    assert_eq!(fixed_from_julian(1582, 10, 5), fixed_from_gregorian(1582, 10, 15));
    assert_eq!(fixed_from_julian(1582, 10, 5), 577_736);
}

#[test]
fn ides_of_march() {
    let fixed = fixed_from_julian(-44, 3, 15);
    assert_eq!(fixed, -15_999);
    let g = gregorian_from_fixed(fixed);
    // Astronomical year -43 is 44 BCE.
    assert_eq!((g.year, g.month, g.day), (-43, 3, 13));
}

#[test]
fn gregorian_roundtrip_over_centuries() {
    let start = fixed_from_gregorian(-800, 1, 1);
    let end = fixed_from_gregorian(3200, 1, 1);
    for date in (start..end).step_by(7) {
        let g = gregorian_from_fixed(date);
        assert_eq!(g.to_fixed(), date, "roundtrip failed at {g}");
        assert_eq!(gregorian_year_from_fixed(date), g.year);
    }
}

#[test]
fn delta_t_bands_join_closely() {
    // Boundaries where one era's polynomial hands over to the next.
    for year in [-500, 500, 1600, 1700, 1800, 1900, 1987, 2006, 2151] {
        let before = fixed_from_gregorian(year - 1, 12, 31) as f64 + 0.5;
        let after = fixed_from_gregorian(year, 1, 1) as f64 + 0.5;
        let jump = (ephemeris_correction(after) - ephemeris_correction(before)) * SECONDS_PER_DAY;
        assert!(jump.abs() < 15.0, "ΔT jumps {jump:.3} s at {year}");
    }
}
