//! Observer locations and local ↔ universal time.

use crate::fixed::{Moment, hr};

/// Geographic observation point.
///
/// Only the longitude enters the Persian New Year computation (through local
/// mean and apparent time); the other fields describe the site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Elevation above mean sea level in meters.
    pub elevation_m: f64,
    /// Standard time zone offset from UTC in hours. Used only to report
    /// moments in the site's civil time.
    pub utc_offset_hours: f64,
}

/// Middle of Iran on the 52.5°E meridian (the Iran Standard Time meridian).
pub const IRAN: Location = Location::new(35.5, 52.5, 0.0, 3.5);

/// Tehran.
pub const TEHRAN: Location = Location::new(35.68, 51.42, 1100.0, 3.5);

impl Location {
    /// Create a new location.
    pub const fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
            utc_offset_hours,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        IRAN
    }
}

/// Difference between UT and local mean time at longitude `phi`, as a
/// fraction of a day.
pub fn zone_from_longitude(phi: f64) -> f64 {
    phi / 360.0
}

/// Universal time from local mean time at `location`.
pub fn universal_from_local(tee_ell: Moment, location: &Location) -> Moment {
    tee_ell - zone_from_longitude(location.longitude_deg)
}

/// Local mean time from universal time at `location`.
pub fn local_from_universal(tee_rom_u: Moment, location: &Location) -> Moment {
    tee_rom_u + zone_from_longitude(location.longitude_deg)
}

/// The location's standard (zone) time from universal time.
pub fn standard_from_universal(tee_rom_u: Moment, location: &Location) -> Moment {
    tee_rom_u + hr(location.utc_offset_hours)
}
