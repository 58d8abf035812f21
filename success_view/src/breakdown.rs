//! Step-by-step formula explanation — the "how the math works" card.
//!
//! Formulas are rendered from the already-computed result, never
//! recalculated here; the strings always agree with the model.

use serde::Serialize;

use success_engine::domain::{ModelInputs, ModelResult};

use crate::format::{format_percent, format_unit};

/// One labelled step of the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownStep {
    pub label: &'static str,
    pub formula: String,
    pub note: &'static str,
}

/// Explain a result as the five pipeline steps. The final step has a
/// single-team wording variant — one team skips the iteration
/// exponent entirely.
pub fn explain(inputs: &ModelInputs, result: &ModelResult) -> Vec<BreakdownStep> {
    let mut steps = Vec::with_capacity(5);

    steps.push(BreakdownStep {
        label: "Friction penalty",
        formula: format!(
            "({}% + {}% + {}% + {}%) ÷ 4 = {}%",
            inputs.availability,
            inputs.communication,
            inputs.skin_in_game,
            inputs.iteration_ability,
            format_percent(result.friction_penalty),
        ),
        note: "Average all friction factors together",
    });

    steps.push(BreakdownStep {
        label: "Base success rate",
        formula: format!(
            "{}% × {}% = {}%",
            inputs.team_success_rate,
            format_percent(result.friction_penalty),
            format_percent(result.base_success),
        ),
        note: "Apply the friction penalty to the baseline success rate",
    });

    steps.push(BreakdownStep {
        label: "Communication penalty",
        formula: format!(
            "{} paths × 5% = {}% reduction, multiplier {}",
            result.communication_paths,
            result.communication_paths * 5,
            format_unit(result.communication_penalty),
        ),
        note: "Each communication path adds coordination overhead",
    });

    steps.push(BreakdownStep {
        label: "Success per iteration",
        formula: format!(
            "{}% × {} = {}%",
            format_percent(result.base_success),
            format_unit(result.communication_penalty),
            format_percent(result.success_per_iteration),
        ),
        note: "Apply the communication penalty to the base rate",
    });

    if inputs.team_count == 1 {
        steps.push(BreakdownStep {
            label: "Success over all iterations",
            formula: format!(
                "{}% (no iteration penalty for a single team)",
                format_percent(result.total_success),
            ),
            note: "Single team: no coordination overhead, success stays at baseline",
        });
    } else {
        steps.push(BreakdownStep {
            label: "Success over all iterations",
            formula: format!(
                "({}%)^{} = {}%",
                format_percent(result.success_per_iteration),
                inputs.iterations,
                format_percent(result.total_success),
            ),
            note: "Each iteration must succeed, so probabilities multiply",
        });
    }

    steps
}
