//! Search for the day on which the Sun reaches a given longitude.
//!
//! Algorithm: the Sun advances ~360° per mean tropical year, so a linear
//! back-extrapolation from the bound lands within a few days of the crossing;
//! a second linear step against the residual tightens it. The estimate is
//! then refined one civil day at a time, sampling the solar longitude at
//! true local noon, until the noon longitude first lies within
//! [`ACCEPT_WINDOW_DEG`] past the target. That day is the first day whose
//! noon follows the crossing.

use taqvim_math::{mod3, normalize_360};
use taqvim_solar::{MEAN_TROPICAL_YEAR, midday, solar_longitude};
use taqvim_time::{FixedDate, Location, Moment, fixed_from_gregorian, fixed_from_moment};
use tracing::{debug, trace};

use crate::equinox_types::{EquinoxConfig, Season};
use crate::error::SearchError;

/// A noon longitude this far past the target still counts as "reached".
///
/// The Sun moves ~1°/day, so the first noon after a crossing is always
/// inside the window.
const ACCEPT_WINDOW_DEG: f64 = 2.0;

/// Days after the first of the season's month used as the search bound.
const SEASON_BOUND_OFFSET_DAYS: i64 = 40;

/// Approximate moment at or before `tee` when the solar longitude last
/// reached `lambda` degrees.
pub fn estimate_prior_solar_longitude(lambda: f64, tee: Moment) -> Moment {
    // Mean days per degree of solar motion.
    let rate = MEAN_TROPICAL_YEAR / 360.0;
    let tau = tee - rate * normalize_360(solar_longitude(tee) - lambda);
    let cap_delta = mod3(solar_longitude(tau) - lambda, -180.0, 180.0);
    tee.min(tau - rate * cap_delta)
}

/// Fixed date of the first day, on or before `date`, whose true noon at
/// `location` follows the Sun reaching `target_deg`.
///
/// For `target_deg = 0` this is the astronomical Persian New Year rule.
pub fn solar_longitude_on_or_before(
    target_deg: f64,
    date: FixedDate,
    location: &Location,
    config: &EquinoxConfig,
) -> Result<FixedDate, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let approx = estimate_prior_solar_longitude(target_deg, midday(date, location));
    let start = fixed_from_moment(approx) - 1;
    debug!(target_deg, date, approx, start, "estimated solar longitude crossing");

    let mut day = start;
    for step in 0..config.max_refine_days {
        let lambda = solar_longitude(midday(day, location));
        trace!(day, lambda, step, "refining crossing");
        if normalize_360(lambda - target_deg) <= ACCEPT_WINDOW_DEG {
            return Ok(day);
        }
        day += 1;
    }

    Err(SearchError::NoConvergence {
        target_deg,
        start,
        steps: config.max_refine_days,
    })
}

/// Fixed date on which `season` begins in Gregorian year `year`, at
/// `location` (first day whose true noon follows the crossing).
pub fn season_in_gregorian_year(
    season: Season,
    year: i64,
    location: &Location,
    config: &EquinoxConfig,
) -> Result<FixedDate, SearchError> {
    let bound = fixed_from_gregorian(year, season.gregorian_month(), 1) + SEASON_BOUND_OFFSET_DAYS;
    solar_longitude_on_or_before(season.longitude_deg(), bound, location, config)
}
