//! Cross-validation of the fast calendar against the astronomical one.
//!
//! Over the supported range both calendars must give the same Persian date
//! for every fixed date and the same leap flag for every year. The
//! astronomical New Years are computed once per year, and the fast calendar
//! is checked day by day against that table. Both ends of the range are
//! converted astronomically day by day, and a stride of dates in between.
//! The full day-by-day astronomical comparison runs with the `exhaustive`
//! feature, preferably in release mode:
//!
//! ```text
//! cargo test --release -p taqvim_calendar --features exhaustive
//! ```

use taqvim_calendar::{
    AstronomicalPersian, FastPersian, NON_LEAP_CORRECTION, PERSIAN_EPOCH, PERSIAN_FAST_EPOCH,
    PersianCalendar, PersianDate, SUPPORTED_FIRST_YEAR, SUPPORTED_LAST_YEAR, cycle_leap_year,
    days_before_month, fixed_from_persian_fast, month_from_day_of_year, persian_fast_from_fixed,
    persian_fast_leap_year,
};
use taqvim_time::FixedDate;

/// Astronomical New Year of every year in the supported range, plus the
/// following year.
fn astronomical_new_years() -> Vec<(i64, FixedDate)> {
    let cal = AstronomicalPersian::default();
    (SUPPORTED_FIRST_YEAR..=SUPPORTED_LAST_YEAR + 1)
        .map(|year| (year, cal.new_year(year).unwrap()))
        .collect()
}

#[test]
fn epochs_agree() {
    assert_eq!(PERSIAN_EPOCH, PERSIAN_FAST_EPOCH);
    assert_eq!(PERSIAN_EPOCH, 226_896);
}

#[test]
fn new_years_and_leap_flags_agree() {
    let table = astronomical_new_years();
    for pair in table.windows(2) {
        let (year, start) = pair[0];
        let (_, next) = pair[1];
        assert_eq!(
            fixed_from_persian_fast(PersianDate::new_year(year)),
            start,
            "New Year {year}"
        );
        let leap = next - start == 366;
        assert_eq!(persian_fast_leap_year(year), leap, "leap flag {year}");
    }
    let (last_year, last_start) = table[table.len() - 1];
    assert_eq!(fixed_from_persian_fast(PersianDate::new_year(last_year)), last_start);
}

#[test]
fn fast_dates_agree_day_by_day() {
    let table = astronomical_new_years();
    for pair in table.windows(2) {
        let (year, start) = pair[0];
        let (_, next) = pair[1];
        for date in start..next {
            let day_of_year = date - start + 1;
            let month = month_from_day_of_year(day_of_year);
            let day = (day_of_year - days_before_month(month)) as u32;
            let expected = PersianDate::new(year, month, day);
            assert_eq!(persian_fast_from_fixed(date), expected, "fixed date {date}");
        }
    }
}

#[test]
fn astronomical_spot_check() {
    let astro = AstronomicalPersian::default();
    let start = fixed_from_persian_fast(PersianDate::new_year(SUPPORTED_FIRST_YEAR));
    let end = fixed_from_persian_fast(PersianDate::new_year(SUPPORTED_LAST_YEAR + 1));
    // Odd stride so every day of the year gets sampled over the range.
    for date in (start..end).step_by(97) {
        assert_eq!(
            astro.from_fixed(date),
            FastPersian.from_fixed(date),
            "fixed date {date}"
        );
    }
    assert_eq!(astro.from_fixed(end - 1), FastPersian.from_fixed(end - 1));
}

#[test]
fn astronomical_day_by_day_at_range_ends() {
    let astro = AstronomicalPersian::default();
    let windows = [
        (SUPPORTED_FIRST_YEAR, SUPPORTED_FIRST_YEAR + 12),
        (SUPPORTED_LAST_YEAR - 11, SUPPORTED_LAST_YEAR + 1),
    ];
    for (first, end_year) in windows {
        let start = astro.new_year(first).unwrap();
        let end = astro.new_year(end_year).unwrap();
        for date in start..end {
            assert_eq!(
                astro.from_fixed(date),
                Ok(persian_fast_from_fixed(date)),
                "fixed date {date}"
            );
        }
    }
}

#[test]
#[cfg_attr(
    not(feature = "exhaustive"),
    ignore = "converts every day of 1178-3000 astronomically; enable the `exhaustive` feature"
)]
fn astronomical_exhaustive() {
    let astro = AstronomicalPersian::default();
    let start = astro.new_year(SUPPORTED_FIRST_YEAR).unwrap();
    let end = astro.new_year(SUPPORTED_LAST_YEAR + 1).unwrap();
    for date in start..end {
        assert_eq!(
            astro.from_fixed(date),
            Ok(persian_fast_from_fixed(date)),
            "fixed date {date}"
        );
    }
}

#[test]
fn correction_set_consistency() {
    let astro = AstronomicalPersian::default();
    for &year in &NON_LEAP_CORRECTION {
        assert!(!persian_fast_leap_year(year), "{year} should be common");
        assert!(persian_fast_leap_year(year + 1), "{} should be leap", year + 1);
        assert!(cycle_leap_year(year) && !cycle_leap_year(year + 1), "cycle around {year}");
        assert_eq!(astro.leap_year(year), Ok(false), "astronomical {year}");
        assert_eq!(astro.leap_year(year + 1), Ok(true), "astronomical {}", year + 1);
    }
}

#[test]
fn fast_calendar_rejects_unsupported_dates() {
    let before = fixed_from_persian_fast(PersianDate::new_year(SUPPORTED_FIRST_YEAR)) - 1;
    let after = fixed_from_persian_fast(PersianDate::new_year(SUPPORTED_LAST_YEAR + 1));
    assert!(FastPersian.from_fixed(before).is_err());
    assert!(FastPersian.from_fixed(after).is_err());
    assert!(FastPersian.from_fixed(before + 1).is_ok());
    assert!(FastPersian.from_fixed(after - 1).is_ok());
}
