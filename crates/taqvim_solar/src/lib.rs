//! Apparent solar position from closed-form series.
//!
//! This crate provides:
//! - Mean obliquity of the ecliptic
//! - Longitudinal nutation and annual aberration
//! - Apparent solar longitude from the 49-term Bretagnon–Simon series
//! - Equation of time, sundial (apparent) time and true noon
//!
//! Every function takes a Universal-time [`Moment`](taqvim_time::Moment)
//! and converts to dynamical time internally through ΔT.

pub mod apparent;
pub mod longitude;
pub mod nutation;
pub mod obliquity;

pub use apparent::{equation_of_time, local_from_apparent, midday, universal_from_apparent};
pub use longitude::{MEAN_TROPICAL_YEAR, solar_longitude};
pub use nutation::{aberration, nutation};
pub use obliquity::obliquity;
