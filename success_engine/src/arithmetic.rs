/// SuccessModel v1.0 — Arithmetic Primitives
///
/// All numeric values: i64 fixed-point (SCALE = 10_000).
/// No float. No f64. No f32.

/// Fixed-point scale factor. All fractions are stored as `real * SCALE`,
/// so 1.0 = 10_000 and one unit is 0.01 percentage point.
pub const SCALE: i64 = 10_000;

/// Checked integer addition. Panics on i64 overflow.
pub fn checked_add(a: i64, b: i64) -> i64 {
    match a.checked_add(b) {
        Some(result) => result,
        None => panic!("Overflow: {} + {} overflows i64", a, b),
    }
}

/// Checked integer multiplication. Panics on i64 overflow.
pub fn checked_mul(a: i64, b: i64) -> i64 {
    match a.checked_mul(b) {
        Some(result) => result,
        None => panic!("Overflow: {} * {} overflows i64", a, b),
    }
}

/// Fixed-point multiplication: `(a * b) // SCALE`, truncating.
pub fn fixed_mul(a: i64, b: i64) -> i64 {
    checked_mul(a, b) / SCALE
}

/// Fixed-point integer power: `base^exp` by repeated fixed_mul.
/// `fixed_pow(x, 0) == SCALE` (that is, 1.0).
pub fn fixed_pow(base: i64, exp: i64) -> i64 {
    let mut acc = SCALE;
    for _ in 0..exp {
        acc = fixed_mul(acc, base);
    }
    acc
}

/// Clamp a fraction to the unit interval `[0, SCALE]`.
pub fn clamp_unit(x: i64) -> i64 {
    x.max(0).min(SCALE)
}

/// Convert an integer percent (0..=100) to a unit fraction.
pub fn percent_to_unit(percent: i64) -> i64 {
    checked_mul(percent, SCALE / 100)
}

/// Arithmetic mean of four values — integer division, truncating.
pub fn mean4(a: i64, b: i64, c: i64, d: i64) -> i64 {
    checked_add(checked_add(a, b), checked_add(c, d)) / 4
}
