/// SuccessModel v1.0 — Core Domain Types
///
/// Pure data. No behaviour, no model logic.
/// All fraction values: i64 fixed-point (SCALE = 10_000).

use serde::{Serialize, Deserialize};

/// The seven scalar inputs of one model invocation.
///
/// Percent fields are plain integers in 0..=100 (the input surface
/// steps them by 5, but any integer percent is accepted here).
/// Domain enforcement is a boundary concern — see `validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelInputs {
    pub team_count: i64,        // 1..=10
    pub team_success_rate: i64, // percent, baseline competence
    pub availability: i64,      // percent, friction factor
    pub communication: i64,     // percent, friction factor
    pub skin_in_game: i64,      // percent, friction factor
    pub iteration_ability: i64, // percent, friction factor
    pub iterations: i64,        // 1..=10
}

impl Default for ModelInputs {
    /// The input surface's initial state.
    fn default() -> Self {
        Self {
            team_count: 2,
            team_success_rate: 80,
            availability: 90,
            communication: 85,
            skin_in_game: 80,
            iteration_ability: 85,
            iterations: 2,
        }
    }
}

/// Derived result — recomputed in full on every input change.
///
/// All fields except `communication_paths` are unit fractions
/// (0..=SCALE; divide by 100 for a percent). `communication_penalty`
/// is a multiplier, not a probability, and is never rendered as a
/// percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelResult {
    pub communication_paths: i64,
    pub friction_penalty: i64,
    pub base_success: i64,
    pub communication_penalty: i64,
    pub success_per_iteration: i64,
    pub total_success: i64,
}
