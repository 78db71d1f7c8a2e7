//! Round-trip tests: fixed date → Persian date → fixed date, day by day.

use taqvim_calendar::{
    AstronomicalPersian, FastPersian, PersianCalendar, PersianDate, fixed_from_persian_fast,
    persian_fast_from_fixed,
};

const ROUNDTRIP_START_YEAR: i64 = 1304;
const ROUNDTRIP_END_YEAR: i64 = 1500;

#[test]
fn astronomical_roundtrip() {
    let cal = AstronomicalPersian::default();
    let start = cal.new_year(ROUNDTRIP_START_YEAR).unwrap();
    let end = cal.new_year(ROUNDTRIP_END_YEAR).unwrap();
    for date in start..end {
        let persian = cal.from_fixed(date).unwrap();
        assert_eq!(persian, persian_fast_from_fixed(date), "calendars differ at {date}");
        let back = cal.fixed_from_persian(persian).unwrap();
        assert_eq!(back, date, "astronomical roundtrip failed at {persian}");
    }
}

#[test]
fn fast_roundtrip() {
    let start = fixed_from_persian_fast(PersianDate::new_year(ROUNDTRIP_START_YEAR));
    let end = fixed_from_persian_fast(PersianDate::new_year(ROUNDTRIP_END_YEAR));
    for date in start..end {
        let persian = persian_fast_from_fixed(date);
        assert_eq!(fixed_from_persian_fast(persian), date, "fast roundtrip failed at {persian}");
    }
}

#[test]
fn consecutive_days_advance_by_one() {
    let start = fixed_from_persian_fast(PersianDate::new_year(1400));
    let mut prev = persian_fast_from_fixed(start);
    assert_eq!(prev, PersianDate::new(1400, 1, 1));
    for date in start + 1..start + 3 * 366 {
        let next = persian_fast_from_fixed(date);
        let same_month =
            next.year == prev.year && next.month == prev.month && next.day == prev.day + 1;
        let new_month = next.year == prev.year && next.month == prev.month + 1 && next.day == 1;
        let new_year = next.year == prev.year + 1 && next.month == 1 && next.day == 1;
        assert!(same_month || new_month || new_year, "{prev} -> {next}");
        prev = next;
    }
}

#[test]
fn validated_roundtrip_through_trait() {
    let astro = AstronomicalPersian::default();
    for cal in [&astro as &dyn PersianCalendar, &FastPersian] {
        let dates = [(1403, 1, 1), (1403, 6, 31), (1403, 7, 1), (1403, 12, 30), (1404, 12, 29)];
        for (year, month, day) in dates {
            let date = cal.date(year, month, day).unwrap();
            let fixed = cal.to_fixed(date).unwrap();
            assert_eq!(cal.from_fixed(fixed), Ok(date));
        }
    }
}

#[test]
fn month_twelve_boundary() {
    let astro = AstronomicalPersian::default();
    for cal in [&astro as &dyn PersianCalendar, &FastPersian] {
        // 1403 is leap, 1404 is not.
        assert_eq!(cal.month_length(1403, 12), Ok(30));
        assert_eq!(cal.month_length(1404, 12), Ok(29));
        let leap_day = cal.to_fixed(PersianDate::new(1403, 12, 30)).unwrap();
        assert_eq!(cal.from_fixed(leap_day + 1), Ok(PersianDate::new(1404, 1, 1)));
        let last = cal.to_fixed(PersianDate::new(1404, 12, 29)).unwrap();
        assert_eq!(cal.from_fixed(last + 1), Ok(PersianDate::new(1405, 1, 1)));
        assert!(cal.to_fixed(PersianDate::new(1404, 12, 30)).is_err());
    }
}
