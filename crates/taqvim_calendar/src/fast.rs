//! Fast arithmetic Persian calendar.
//!
//! Uses the 33-year intercalation cycle, patched by [`NON_LEAP_CORRECTION`]
//! where the cycle and the astronomical calendar (observed at the Iran
//! meridian) disagree. Over [`SUPPORTED_FIRST_YEAR`]..=[`SUPPORTED_LAST_YEAR`]
//! the two calendars agree on every day; outside that range the unchecked
//! functions still return a date, but it has not been verified.

use taqvim_math::{floor_div, floor_mod};
use taqvim_time::FixedDate;
use tracing::debug;

use crate::date::{PersianDate, days_before_month, month_from_day_of_year};
use crate::error::CalendarError;

/// Fixed date of 1 Farvardin, year 1.
pub const PERSIAN_FAST_EPOCH: FixedDate = 226_896;

/// First Persian year on which the fast and astronomical calendars agree.
pub const SUPPORTED_FIRST_YEAR: i64 = 1178;
/// Last Persian year on which the fast and astronomical calendars agree.
pub const SUPPORTED_LAST_YEAR: i64 = 3000;

/// Years the 33-year cycle marks leap but which are not.
///
/// For each year `Y` listed, `Y` has 365 days and `Y + 1` has 366, the
/// reverse of what the cycle says. Found by exhaustive comparison against the
/// astronomical calendar; sorted for binary search.
#[rustfmt::skip]
pub static NON_LEAP_CORRECTION: [i64; 78] = [
    1502,
    1601, 1634, 1667,
    1700, 1733, 1766, 1799,
    1832, 1865, 1898,
    1931, 1964, 1997,
    2030, 2059, 2063, 2096,
    2129, 2158, 2162, 2191, 2195,
    2224, 2228, 2257, 2261, 2290, 2294,
    2323, 2327, 2356, 2360, 2389, 2393,
    2422, 2426, 2455, 2459, 2488, 2492,
    2521, 2525, 2554, 2558, 2587, 2591,
    2620, 2624, 2653, 2657, 2686, 2690,
    2719, 2723, 2748, 2752, 2756, 2781, 2785, 2789,
    2818, 2822, 2847, 2851, 2855, 2880, 2884, 2888,
    2913, 2917, 2921, 2946, 2950, 2954, 2979, 2983, 2987,
];

fn is_corrected(year: i64) -> bool {
    NON_LEAP_CORRECTION.binary_search(&year).is_ok()
}

/// True if `year` is in the certified range.
pub const fn is_supported_year(year: i64) -> bool {
    SUPPORTED_FIRST_YEAR <= year && year <= SUPPORTED_LAST_YEAR
}

/// Leap rule of the bare 33-year cycle, without corrections.
pub const fn cycle_leap_year(year: i64) -> bool {
    floor_mod(25 * year + 11, 33) < 8
}

/// True if `year` is leap in the fast calendar.
pub fn persian_fast_leap_year(year: i64) -> bool {
    if is_corrected(year) {
        false
    } else if is_corrected(year - 1) {
        true
    } else {
        cycle_leap_year(year)
    }
}

fn fast_new_year(year: i64) -> FixedDate {
    let new_year = PERSIAN_FAST_EPOCH - 1 + 365 * (year - 1) + floor_div(8 * year + 21, 33);
    if is_corrected(year - 1) { new_year - 1 } else { new_year }
}

/// Fixed date of a Persian date. The date is assumed valid.
pub fn fixed_from_persian_fast(date: PersianDate) -> FixedDate {
    fast_new_year(date.year) - 1 + days_before_month(date.month) + date.day as i64
}

/// Persian date of a fixed date.
pub fn persian_fast_from_fixed(date: FixedDate) -> PersianDate {
    let days_since_epoch = date - fast_new_year(1);
    let mut year = 1 + floor_div(33 * days_since_epoch + 3, 12_053);
    let mut day_of_year = date - fast_new_year(year) + 1;
    // A corrected year loses its leap day to the following year.
    if day_of_year == 366 && is_corrected(year) {
        year += 1;
        day_of_year = 1;
    }
    let month = month_from_day_of_year(day_of_year);
    let day = (day_of_year - days_before_month(month)) as u32;
    PersianDate::new(year, month, day)
}

pub(crate) fn check_year(year: i64) -> Result<(), CalendarError> {
    if is_supported_year(year) {
        Ok(())
    } else {
        debug!(year, "year outside fast calendar range");
        Err(CalendarError::OutOfSupportedRange {
            year,
            first: SUPPORTED_FIRST_YEAR,
            last: SUPPORTED_LAST_YEAR,
        })
    }
}

/// [`fixed_from_persian_fast`], rejecting years outside the certified range.
pub fn checked_fixed_from_persian_fast(date: PersianDate) -> Result<FixedDate, CalendarError> {
    check_year(date.year)?;
    Ok(fixed_from_persian_fast(date))
}

/// [`persian_fast_from_fixed`], rejecting dates outside the certified range.
pub fn checked_persian_fast_from_fixed(date: FixedDate) -> Result<PersianDate, CalendarError> {
    let persian = persian_fast_from_fixed(date);
    check_year(persian.year)?;
    Ok(persian)
}

/// The fast calendar as a [`PersianCalendar`](crate::PersianCalendar).
///
/// All operations are range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FastPersian;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(fast_new_year(1), 226_895);
        assert_eq!(fixed_from_persian_fast(PersianDate::new(1178, 1, 1)), 656_786);
        assert_eq!(fixed_from_persian_fast(PersianDate::new(3001, 1, 1)), 1_322_623);
    }

    #[test]
    fn last_day_of_1403() {
        let date = PersianDate::new(1403, 12, 30);
        assert_eq!(fixed_from_persian_fast(date), 739_330);
        assert_eq!(persian_fast_from_fixed(739_330), date);
        assert_eq!(persian_fast_from_fixed(739_331), PersianDate::new(1404, 1, 1));
    }

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(NON_LEAP_CORRECTION.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn corrections_flip_the_cycle() {
        for &year in &NON_LEAP_CORRECTION {
            assert!(cycle_leap_year(year), "cycle should mark {year} leap");
            assert!(!cycle_leap_year(year + 1), "cycle should mark {} common", year + 1);
            assert!(!persian_fast_leap_year(year), "{year}");
            assert!(persian_fast_leap_year(year + 1), "{}", year + 1);
        }
    }

    #[test]
    fn corrected_year_end_moves_to_next_year() {
        // 1502 is common; the day after 1502-12-29 is 1503-01-01.
        let last = fixed_from_persian_fast(PersianDate::new(1502, 12, 29));
        assert_eq!(persian_fast_from_fixed(last + 1), PersianDate::new(1503, 1, 1));
        assert_eq!(fixed_from_persian_fast(PersianDate::new(1503, 1, 1)), last + 1);
        // 1503 takes the leap day.
        let end = fixed_from_persian_fast(PersianDate::new(1503, 12, 30));
        assert_eq!(persian_fast_from_fixed(end), PersianDate::new(1503, 12, 30));
    }

    #[test]
    fn year_lengths_match_leap_flags() {
        for year in SUPPORTED_FIRST_YEAR..=SUPPORTED_LAST_YEAR {
            let len = fast_new_year(year + 1) - fast_new_year(year);
            let expected = if persian_fast_leap_year(year) { 366 } else { 365 };
            assert_eq!(len, expected, "year {year}");
        }
    }

    #[test]
    fn range_checks() {
        assert!(is_supported_year(1178));
        assert!(is_supported_year(3000));
        assert!(!is_supported_year(1177));
        assert!(!is_supported_year(3001));
        assert_eq!(
            checked_fixed_from_persian_fast(PersianDate::new(3001, 1, 1)),
            Err(CalendarError::OutOfSupportedRange { year: 3001, first: 1178, last: 3000 })
        );
        assert_eq!(
            checked_persian_fast_from_fixed(1_322_623),
            Err(CalendarError::OutOfSupportedRange { year: 3001, first: 1178, last: 3000 })
        );
        assert_eq!(
            checked_persian_fast_from_fixed(1_322_622),
            Ok(PersianDate::new(3000, 12, esfand_length(3000)))
        );
    }

    fn esfand_length(year: i64) -> u32 {
        if persian_fast_leap_year(year) { 30 } else { 29 }
    }
}
