//! Small numeric helpers shared by the calendar and astronomy crates.
//!
//! This crate provides:
//! - Degree-based trigonometry that folds its argument into [0, 360) first
//! - Sexagesimal angle construction
//! - Polynomial evaluation (Horner)
//! - Range folding and floor/ceiling integer division

pub mod angle;
pub mod arith;
pub mod poly;

pub use angle::{angle_deg, cos_deg, mod3, normalize_360, radians_from_degrees, sin_deg, tan_deg};
pub use arith::{ceil_div, floor_div, floor_mod};
pub use poly::poly;
