/// SuccessModel v1.0 — Core Computation
///
/// ALL model math lives here. Pure integer fixed-point, no float,
/// no implicit casting. Total function: no side effects, no failure
/// modes — domain enforcement is the caller's job (see `validate`).

use crate::arithmetic::{fixed_mul, fixed_pow, mean4, percent_to_unit, SCALE};
use crate::domain::{ModelInputs, ModelResult};
use crate::graph::communication_paths;

/// Coordination overhead per communication path: five percentage
/// points of the penalty multiplier (0.05 * SCALE). The multiplier
/// is floored at zero, which a 10-team project (45 paths) always hits.
pub const PATH_PENALTY: i64 = 500;

/// Compute the success-probability curve for one set of inputs.
///
/// Two regimes:
///   - `team_count == 1`: friction and iteration penalties model
///     *inter-team* coordination failure, so with one team the model
///     short-circuits to the raw baseline rate. The friction inputs
///     are collected but unused. `friction_penalty` is reported as
///     SCALE (full) in this regime — a display convenience, not a
///     meaningful figure.
///   - `team_count >= 2`: the five-step pipeline below.
pub fn compute(inputs: &ModelInputs) -> ModelResult {
    if inputs.team_count == 1 {
        let baseline = percent_to_unit(inputs.team_success_rate);
        return ModelResult {
            communication_paths: 0,
            friction_penalty: SCALE,
            base_success: baseline,
            communication_penalty: SCALE,
            success_per_iteration: baseline,
            total_success: baseline,
        };
    }

    let paths = communication_paths(inputs.team_count);

    // Step 1: friction penalty — equal-weight mean of the four factors.
    let friction_penalty = mean4(
        percent_to_unit(inputs.availability),
        percent_to_unit(inputs.communication),
        percent_to_unit(inputs.skin_in_game),
        percent_to_unit(inputs.iteration_ability),
    );

    // Step 2: baseline rate scaled by friction.
    let base_success = fixed_mul(percent_to_unit(inputs.team_success_rate), friction_penalty);

    // Step 3: linear decay per path, hard floor at zero.
    let communication_penalty = (SCALE - paths * PATH_PENALTY).max(0);

    // Step 4: per-iteration success.
    let success_per_iteration = fixed_mul(base_success, communication_penalty);

    // Step 5: independent trials across iterations.
    let total_success = fixed_pow(success_per_iteration, inputs.iterations).max(0);

    ModelResult {
        communication_paths: paths,
        friction_penalty,
        base_success,
        communication_penalty,
        success_per_iteration,
        total_success,
    }
}
