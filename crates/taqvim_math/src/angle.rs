//! Angles in degrees.
//!
//! Solar series terms multiply the time argument by rates of up to ~10⁵
//! degrees per century, so every trig helper reduces modulo 360 before
//! converting to radians. The conversion is spelled out as
//! `θ × π / 180` (not `f64::to_radians`) so results are reproducible
//! against published tables to the last bit.

use std::f64::consts::PI;

/// `d` degrees, `m` arcminutes, `s` arcseconds, as decimal degrees.
///
/// Signs are not normalised: pass a negative `s` for a small negative angle.
pub fn angle_deg(d: f64, m: f64, s: f64) -> f64 {
    d + (m + s / 60.0) / 60.0
}

/// Degrees folded into [0, 360), then converted to radians.
pub fn radians_from_degrees(theta: f64) -> f64 {
    theta.rem_euclid(360.0) * PI / 180.0
}

/// Sine of an angle given in degrees.
pub fn sin_deg(theta: f64) -> f64 {
    radians_from_degrees(theta).sin()
}

/// Cosine of an angle given in degrees.
pub fn cos_deg(theta: f64) -> f64 {
    radians_from_degrees(theta).cos()
}

/// Tangent of an angle given in degrees.
pub fn tan_deg(theta: f64) -> f64 {
    radians_from_degrees(theta).tan()
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Shift `x` into the half-open range `[a, b)`. Returns `x` when `a == b`.
///
/// `mod3(x, -180.0, 180.0)` gives the signed angular distance used by the
/// solar-longitude searches.
pub fn mod3(x: f64, a: f64, b: f64) -> f64 {
    if a == b { x } else { a + (x - a).rem_euclid(b - a) }
}
