//! Floor and ceiling integer division for calendar arithmetic.
//!
//! Calendar formulas count days before an epoch with negative numerators,
//! where Rust's truncating `/` gives the wrong day.

/// ⌊a / b⌋ for `b > 0`.
pub const fn floor_div(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

/// `a mod b` in [0, b) for `b > 0`.
pub const fn floor_mod(a: i64, b: i64) -> i64 {
    a.rem_euclid(b)
}

/// ⌈a / b⌉ for `b > 0`.
pub const fn ceil_div(a: i64, b: i64) -> i64 {
    -floor_div(-a, b)
}
