//! Single-team comparison — structured report of the current setup
//! against the one-team alternative.
//!
//! The alternative is computed through the kernel itself (regime A
//! returns the raw baseline rate), so no model math is duplicated
//! here.

use serde::Serialize;

use success_engine::domain::ModelInputs;
use success_engine::model::compute;

/// All fraction values i64 fixed-point units.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub current_teams: i64,
    pub current_paths: i64,
    pub current_total: i64,
    pub single_team_total: i64,
    /// `single_team_total - current_total`. Zero when the current
    /// setup already is a single team; the display surface decides
    /// whether to show non-positive deltas.
    pub improvement: i64,
}

/// Compare the given setup against the same team run alone.
pub fn compare_to_single_team(inputs: &ModelInputs) -> ComparisonReport {
    let current = compute(inputs);

    let mut alternative = inputs.clone();
    alternative.team_count = 1;
    let single = compute(&alternative);

    ComparisonReport {
        current_teams: inputs.team_count,
        current_paths: current.communication_paths,
        current_total: current.total_success,
        single_team_total: single.total_success,
        improvement: single.total_success - current.total_success,
    }
}
