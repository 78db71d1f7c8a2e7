//! Polynomial evaluation.

/// Evaluate `a[0] + a[1]·x + a[2]·x² + …` by Horner's rule.
///
/// Coefficients are given lowest order first. An empty slice evaluates to 0.
pub fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &a| a + x * acc)
}
