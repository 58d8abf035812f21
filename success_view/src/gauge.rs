//! Needle gauge geometry — the numbers the rendering surface needs,
//! no SVG here.
//!
//! The gauge clamps defensively: regime math can only underflow the
//! unit interval at the lower bound, but the upper clamp is kept.

use serde::Serialize;

use success_engine::arithmetic::{clamp_unit, SCALE};

/// Band boundaries in fraction units (30% and 70%).
pub const RISKY_THRESHOLD: i64 = 3_000;
pub const GOOD_THRESHOLD: i64 = 7_000;

/// Qualitative zone of a total-success value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskBand {
    Fail,
    Risky,
    Good,
}

impl RiskBand {
    /// Classify a clamped unit fraction.
    pub fn from_unit(total: i64) -> Self {
        let clamped = clamp_unit(total);
        if clamped >= GOOD_THRESHOLD {
            RiskBand::Good
        } else if clamped >= RISKY_THRESHOLD {
            RiskBand::Risky
        } else {
            RiskBand::Fail
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            RiskBand::Good => "Good odds",
            RiskBand::Risky => "Risky territory",
            RiskBand::Fail => "Likely to fail",
        }
    }
}

/// Needle rotation in degrees: 0 -> -90°, SCALE -> +90°.
pub fn needle_rotation(total: i64) -> f64 {
    let clamped = clamp_unit(total);
    -90.0 + (clamped as f64 / SCALE as f64) * 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskBand::from_unit(0), RiskBand::Fail);
        assert_eq!(RiskBand::from_unit(2999), RiskBand::Fail);
        assert_eq!(RiskBand::from_unit(3000), RiskBand::Risky);
        assert_eq!(RiskBand::from_unit(6999), RiskBand::Risky);
        assert_eq!(RiskBand::from_unit(7000), RiskBand::Good);
        assert_eq!(RiskBand::from_unit(10000), RiskBand::Good);
    }

    #[test]
    fn test_band_clamps_out_of_range_values() {
        assert_eq!(RiskBand::from_unit(-500), RiskBand::Fail);
        assert_eq!(RiskBand::from_unit(20000), RiskBand::Good);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(RiskBand::Fail.status_label(), "Likely to fail");
        assert_eq!(RiskBand::Risky.status_label(), "Risky territory");
        assert_eq!(RiskBand::Good.status_label(), "Good odds");
    }

    #[test]
    fn test_needle_rotation_span() {
        assert_eq!(needle_rotation(0), -90.0);
        assert_eq!(needle_rotation(5000), 0.0);
        assert_eq!(needle_rotation(10000), 90.0);
        // Clamped at both ends
        assert_eq!(needle_rotation(-100), -90.0);
        assert_eq!(needle_rotation(11000), 90.0);
    }
}
