//! Fixed-decimal rendering of fraction units.
//!
//! Integer-only arithmetic, rounding half-up. One unit is 0.01
//! percentage point (SCALE = 10_000).

/// Render a non-negative unit fraction as a percent with one decimal:
/// 4173 -> "41.7", 10000 -> "100.0".
pub fn format_percent(unit: i64) -> String {
    let tenths = (unit + 5) / 10;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Render a non-negative unit fraction as a multiplier with two
/// decimals: 9500 -> "0.95", 10000 -> "1.00".
pub fn format_unit(unit: i64) -> String {
    let hundredths = (unit + 50) / 100;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
