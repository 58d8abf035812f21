/// SuccessModel v1.0 — Input Domain Checks
///
/// Hard-fail boundary validation. `compute` itself is total and never
/// validates — callers enforce domains before invoking the model.

use crate::domain::ModelInputs;

/// Run all domain checks. Panics on the first violation.
pub fn validate_inputs(inputs: &ModelInputs) {
    check_team_count(inputs);
    check_percent_fields(inputs);
    check_iterations(inputs);
}

/// Non-panicking variant of `validate_inputs`.
/// Returns `Err(message)` on the first violation, `Ok(())` if all pass.
pub fn try_validate_inputs(inputs: &ModelInputs) -> Result<(), String> {
    try_check_team_count(inputs)?;
    try_check_percent_fields(inputs)?;
    try_check_iterations(inputs)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Individual checks (private)
// ---------------------------------------------------------------------------

fn percent_fields(inputs: &ModelInputs) -> [(&'static str, i64); 5] {
    [
        ("team_success_rate", inputs.team_success_rate),
        ("availability", inputs.availability),
        ("communication", inputs.communication),
        ("skin_in_game", inputs.skin_in_game),
        ("iteration_ability", inputs.iteration_ability),
    ]
}

fn check_team_count(inputs: &ModelInputs) {
    if !(1..=10).contains(&inputs.team_count) {
        panic!(
            "Domain violation: [DOMAIN:team_count] \
             team_count {} out of range — must be in 1..=10",
            inputs.team_count
        );
    }
}

fn check_percent_fields(inputs: &ModelInputs) {
    for (name, value) in percent_fields(inputs) {
        if !(0..=100).contains(&value) {
            panic!(
                "Domain violation: [DOMAIN:{}] \
                 value {} out of range — must be a percent in 0..=100",
                name, value
            );
        }
    }
}

fn check_iterations(inputs: &ModelInputs) {
    if !(1..=10).contains(&inputs.iterations) {
        panic!(
            "Domain violation: [DOMAIN:iterations] \
             iterations {} out of range — must be in 1..=10",
            inputs.iterations
        );
    }
}

// ---------------------------------------------------------------------------
// Non-panicking variants
// ---------------------------------------------------------------------------

fn try_check_team_count(inputs: &ModelInputs) -> Result<(), String> {
    if !(1..=10).contains(&inputs.team_count) {
        return Err(format!(
            "[DOMAIN:team_count] team_count {} out of range — must be in 1..=10",
            inputs.team_count
        ));
    }
    Ok(())
}

fn try_check_percent_fields(inputs: &ModelInputs) -> Result<(), String> {
    for (name, value) in percent_fields(inputs) {
        if !(0..=100).contains(&value) {
            return Err(format!(
                "[DOMAIN:{}] value {} out of range — must be a percent in 0..=100",
                name, value
            ));
        }
    }
    Ok(())
}

fn try_check_iterations(inputs: &ModelInputs) -> Result<(), String> {
    if !(1..=10).contains(&inputs.iterations) {
        return Err(format!(
            "[DOMAIN:iterations] iterations {} out of range — must be in 1..=10",
            inputs.iterations
        ));
    }
    Ok(())
}
