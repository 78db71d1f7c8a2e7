//! Calendar configuration loaded from TOML.
//!
//! ```toml
//! algorithm = "astronomical"   # or "fast"
//!
//! [location]
//! preset = "tehran"            # or latitude/longitude/elevation/utc_offset
//!
//! [search]
//! max_refine_days = 64
//! ```
//!
//! Every field has a default, so an empty file is the Iran-meridian
//! astronomical calendar.

pub mod config;
pub mod error;

pub use config::{Algorithm, CalendarConfig, LocationPreset, LocationToml, SearchToml};
pub use error::ConfigError;
