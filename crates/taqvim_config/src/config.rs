//! Calendar configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;
use taqvim_search::{DEFAULT_MAX_REFINE_DAYS, EquinoxConfig};
use taqvim_time::{IRAN, Location, TEHRAN};
use tracing::debug;

use crate::error::ConfigError;

/// Which Persian calendar to compute with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Equinox search at true noon.
    #[default]
    Astronomical,
    /// 33-year cycle with corrections (years 1178–3000 only).
    Fast,
}

/// Top-level calendar configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub location: LocationToml,
    #[serde(default)]
    pub search: SearchToml,
}

/// Named observation sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationPreset {
    Iran,
    Tehran,
}

/// `[location]` table: a preset or explicit coordinates, not both.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    pub preset: Option<LocationPreset>,
    /// Degrees, north positive.
    pub latitude: Option<f64>,
    /// Degrees, east positive.
    pub longitude: Option<f64>,
    /// Meters. Defaults to 0.
    pub elevation: Option<f64>,
    /// Hours. Defaults to local mean time (`longitude / 15`).
    pub utc_offset: Option<f64>,
}

/// `[search]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    #[serde(default = "default_max_refine_days")]
    pub max_refine_days: u32,
}

impl Default for SearchToml {
    fn default() -> Self {
        Self {
            max_refine_days: default_max_refine_days(),
        }
    }
}

fn default_max_refine_days() -> u32 {
    DEFAULT_MAX_REFINE_DAYS
}

impl LocationToml {
    fn is_explicit(&self) -> bool {
        self.latitude.is_some()
            || self.longitude.is_some()
            || self.elevation.is_some()
            || self.utc_offset.is_some()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_explicit() {
            return Ok(());
        }
        if self.preset.is_some() {
            return Err(ConfigError::Invalid(
                "location preset and explicit coordinates are mutually exclusive",
            ));
        }
        let (Some(lat), Some(lon)) = (self.latitude, self.longitude) else {
            return Err(ConfigError::Invalid(
                "explicit location needs both latitude and longitude",
            ));
        };
        let all_finite = [Some(lat), Some(lon), self.elevation, self.utc_offset]
            .into_iter()
            .flatten()
            .all(f64::is_finite);
        if !all_finite {
            return Err(ConfigError::Invalid("location values must be finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ConfigError::Invalid("latitude must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ConfigError::Invalid("longitude must be in [-180, 180]"));
        }
        Ok(())
    }

    /// Resolved location. Assumes [`validate`](Self::validate) passed.
    fn resolve(&self) -> Location {
        match (self.preset, self.latitude, self.longitude) {
            (None, Some(lat), Some(lon)) => Location::new(
                lat,
                lon,
                self.elevation.unwrap_or(0.0),
                self.utc_offset.unwrap_or(lon / 15.0),
            ),
            (Some(LocationPreset::Tehran), _, _) => TEHRAN,
            _ => IRAN,
        }
    }
}

impl CalendarConfig {
    /// Read and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading calendar config");
        Self::parse(&text)
    }

    /// Parse and validate configuration text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.location.validate()?;
        self.equinox_config()
            .validate()
            .map_err(ConfigError::Invalid)
    }

    /// Observation site for the astronomical calendar.
    pub fn location(&self) -> Location {
        self.location.resolve()
    }

    /// Equinox search settings.
    pub fn equinox_config(&self) -> EquinoxConfig {
        EquinoxConfig {
            max_refine_days: self.search.max_refine_days,
        }
    }
}
