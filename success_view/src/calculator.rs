//! Calculator session — current inputs plus the eagerly recomputed
//! result, mirroring the interactive surface's controls.
//!
//! Every mutator clamps to the input domain and recomputes in full.
//! Recompute is O(1) and history-independent, so there is nothing to
//! cache or invalidate.

use success_engine::domain::{ModelInputs, ModelResult};
use success_engine::model::compute;
use success_engine::validate::try_validate_inputs;

use crate::layout::TEAM_LABELS;

/// An interactive calculator over the frozen model.
pub struct Calculator {
    inputs: ModelInputs,
    result: ModelResult,
}

impl Calculator {
    /// Start from the default input surface state.
    pub fn new() -> Self {
        let inputs = ModelInputs::default();
        let result = compute(&inputs);
        Self { inputs, result }
    }

    /// Start from explicit inputs, rejecting out-of-domain values.
    pub fn with_inputs(inputs: ModelInputs) -> Result<Self, String> {
        try_validate_inputs(&inputs)?;
        let result = compute(&inputs);
        Ok(Self { inputs, result })
    }

    pub fn inputs(&self) -> &ModelInputs {
        &self.inputs
    }

    pub fn result(&self) -> &ModelResult {
        &self.result
    }

    /// Add one team, capped at the label set size (ten).
    pub fn add_team(&mut self) {
        if self.inputs.team_count < TEAM_LABELS.len() as i64 {
            self.inputs.team_count += 1;
            self.recompute();
        }
    }

    /// Remove one team, never below one.
    pub fn remove_team(&mut self) {
        if self.inputs.team_count > 1 {
            self.inputs.team_count -= 1;
            self.recompute();
        }
    }

    pub fn set_team_success_rate(&mut self, percent: i64) {
        self.inputs.team_success_rate = clamp_percent(percent);
        self.recompute();
    }

    pub fn set_availability(&mut self, percent: i64) {
        self.inputs.availability = clamp_percent(percent);
        self.recompute();
    }

    pub fn set_communication(&mut self, percent: i64) {
        self.inputs.communication = clamp_percent(percent);
        self.recompute();
    }

    pub fn set_skin_in_game(&mut self, percent: i64) {
        self.inputs.skin_in_game = clamp_percent(percent);
        self.recompute();
    }

    pub fn set_iteration_ability(&mut self, percent: i64) {
        self.inputs.iteration_ability = clamp_percent(percent);
        self.recompute();
    }

    pub fn set_iterations(&mut self, iterations: i64) {
        self.inputs.iterations = iterations.clamp(1, 10);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.result = compute(&self.inputs);
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_percent(percent: i64) -> i64 {
    percent.clamp(0, 100)
}
