//! Solar-longitude crossing search.
//!
//! This crate provides:
//! - A two-step linear estimate of when the Sun last reached a longitude
//! - Day-granular refinement at true local noon, with an iteration cap
//! - Equinox/solstice lookup by Gregorian year

pub mod equinox;
pub mod equinox_types;
pub mod error;

pub use equinox::{
    estimate_prior_solar_longitude, season_in_gregorian_year, solar_longitude_on_or_before,
};
pub use equinox_types::{ALL_SEASONS, DEFAULT_MAX_REFINE_DAYS, EquinoxConfig, Season};
pub use error::SearchError;
