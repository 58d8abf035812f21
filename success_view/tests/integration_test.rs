//! Integration tests for success_view.
//!
//! Exercises the full consumer path: calculator mutations through the
//! kernel, then every presentation derivation over the same result.

use success_engine::domain::ModelInputs;
use success_engine::model::compute;

use success_view::breakdown::explain;
use success_view::calculator::Calculator;
use success_view::comparison::compare_to_single_team;
use success_view::format::format_percent;
use success_view::gauge::{needle_rotation, RiskBand};
use success_view::layout::{edges, node_positions};

// ─────────────────────────────────────────────────────────────
// Test 1: calculator drives every derivation consistently
// ─────────────────────────────────────────────────────────────

#[test]
fn calculator_flow_feeds_all_derivations() {
    let mut calc = Calculator::new();
    calc.add_team(); // 3 teams
    calc.set_iterations(3);

    let inputs = calc.inputs().clone();
    let result = calc.result().clone();

    // Derivations agree with a direct kernel computation.
    assert_eq!(result, compute(&inputs));

    // Layout edge count matches the reported path count.
    let lines = edges(inputs.team_count as usize);
    assert_eq!(lines.len() as i64, result.communication_paths);

    // Gauge, breakdown, and comparison all consume the same result.
    let band = RiskBand::from_unit(result.total_success);
    assert_eq!(band.status_label(), "Likely to fail");

    let steps = explain(&inputs, &result);
    assert_eq!(steps.len(), 5);
    assert!(steps[4]
        .formula
        .ends_with(&format!("{}%", format_percent(result.total_success))));

    let report = compare_to_single_team(&inputs);
    assert_eq!(report.current_total, result.total_success);
    assert_eq!(report.single_team_total, 8000);
}

// ─────────────────────────────────────────────────────────────
// Test 2: default scenario lands in the risky band
// ─────────────────────────────────────────────────────────────

#[test]
fn default_scenario_is_risky_territory() {
    let calc = Calculator::new();
    let total = calc.result().total_success;

    assert_eq!(total, 4173);
    assert_eq!(RiskBand::from_unit(total), RiskBand::Risky);
    assert_eq!(format_percent(total), "41.7");

    // Needle lands left of center.
    let rotation = needle_rotation(total);
    assert!(rotation > -90.0 && rotation < 0.0);
}

// ─────────────────────────────────────────────────────────────
// Test 3: single-team session bypasses every penalty
// ─────────────────────────────────────────────────────────────

#[test]
fn single_team_session_shows_baseline_everywhere() {
    let mut inputs = ModelInputs::default();
    inputs.team_count = 1;
    let calc = Calculator::with_inputs(inputs.clone()).expect("valid inputs");
    let result = calc.result().clone();

    assert_eq!(result.total_success, 8000);
    assert_eq!(RiskBand::from_unit(result.total_success), RiskBand::Good);
    assert!(edges(1).is_empty());
    assert_eq!(node_positions(1).len(), 1);
    assert_eq!(compare_to_single_team(&inputs).improvement, 0);
}

// ─────────────────────────────────────────────────────────────
// Test 4: reports serialize for export
// ─────────────────────────────────────────────────────────────

#[test]
fn reports_serialize_to_json() {
    let inputs = ModelInputs::default();
    let report = compare_to_single_team(&inputs);
    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["current_teams"], 2);
    assert_eq!(json["improvement"], 8000 - 4173);

    let steps = explain(&inputs, &compute(&inputs));
    let json = serde_json::to_value(&steps).expect("breakdown serializes");
    assert_eq!(json.as_array().map(|a| a.len()), Some(5));
}
