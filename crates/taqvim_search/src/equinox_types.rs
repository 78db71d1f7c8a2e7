//! Types for equinox and solstice search.

/// Default cap on day-by-day refinement steps.
///
/// The linear estimate is within a few days of the true crossing over the
/// whole modelled range, so the cap is only reached if the series misbehaves.
pub const DEFAULT_MAX_REFINE_DAYS: u32 = 64;

/// Configuration for [`crate::solar_longitude_on_or_before`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquinoxConfig {
    /// Maximum number of days stepped during refinement. Must be > 0.
    pub max_refine_days: u32,
}

impl Default for EquinoxConfig {
    fn default() -> Self {
        Self {
            max_refine_days: DEFAULT_MAX_REFINE_DAYS,
        }
    }
}

impl EquinoxConfig {
    /// Check the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_refine_days == 0 {
            return Err("max_refine_days must be greater than zero");
        }
        Ok(())
    }
}

/// Cardinal points of the tropical year (northern-hemisphere names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// March equinox, solar longitude 0°.
    Spring,
    /// June solstice, 90°.
    Summer,
    /// September equinox, 180°.
    Autumn,
    /// December solstice, 270°.
    Winter,
}

/// All four seasons in calendar order.
pub const ALL_SEASONS: [Season; 4] =
    [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

impl Season {
    /// Solar longitude at which the season begins, degrees.
    pub const fn longitude_deg(self) -> f64 {
        match self {
            Self::Spring => 0.0,
            Self::Summer => 90.0,
            Self::Autumn => 180.0,
            Self::Winter => 270.0,
        }
    }

    /// Gregorian month in which the season begins.
    pub const fn gregorian_month(self) -> u32 {
        match self {
            Self::Spring => 3,
            Self::Summer => 6,
            Self::Autumn => 9,
            Self::Winter => 12,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EquinoxConfig::default().validate().is_ok());
        assert!(EquinoxConfig { max_refine_days: 0 }.validate().is_err());
    }

    #[test]
    fn seasons_are_quarter_turns() {
        for (i, season) in ALL_SEASONS.iter().enumerate() {
            assert_eq!(season.longitude_deg(), 90.0 * i as f64);
            assert_eq!(season.gregorian_month(), 3 * (i as u32 + 1));
        }
    }
}
