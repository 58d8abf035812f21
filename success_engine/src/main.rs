/// SuccessModel v1.0 — Scenario Test Harness
///
/// Loads scenario fixtures (inputs + expected fixed-point results),
/// runs them through the model, and compares every field.

use std::fs;
use std::path::Path;

use success_engine::domain::{ModelInputs, ModelResult};
use success_engine::hashing::canonical_hash;
use success_engine::model::compute;
use success_engine::validate::try_validate_inputs;

fn main() {
    // Try to find test_fixtures.json relative to the binary or in the crate root
    let fixture_paths = [
        "test_fixtures.json",
        "../test_fixtures.json",
        "success_engine/test_fixtures.json",
    ];

    let mut fixture_data = None;
    for p in &fixture_paths {
        if Path::new(p).exists() {
            fixture_data = Some(fs::read_to_string(p).expect("Failed to read fixture file"));
            println!("Loaded fixtures from: {}", p);
            break;
        }
    }

    let data = fixture_data.expect("Could not find test_fixtures.json.");

    let fixtures: Vec<serde_json::Value> =
        serde_json::from_str(&data).expect("Failed to parse fixtures JSON");

    let mut all_passed = true;
    let mut total = 0;
    let mut passed = 0;

    for fixture in &fixtures {
        let name = fixture["name"].as_str().unwrap_or("<unnamed>");
        let inputs: ModelInputs = serde_json::from_value(fixture["inputs"].clone())
            .expect("Failed to parse fixture inputs");
        let expected: ModelResult = serde_json::from_value(fixture["expected"].clone())
            .expect("Failed to parse fixture expected result");

        if let Err(e) = try_validate_inputs(&inputs) {
            println!("[FAIL] {}: invalid fixture inputs: {}", name, e);
            all_passed = false;
            total += 1;
            continue;
        }

        // Run 1
        let result = compute(&inputs);
        let h1 = canonical_hash(&inputs, &result);

        // Run 2 (determinism check)
        let result2 = compute(&inputs);
        let h2 = canonical_hash(&inputs, &result2);

        total += 1;
        let fields_match = result == expected;
        let determ_match = h1 == h2;

        if fields_match && determ_match {
            passed += 1;
            println!(
                "[PASS] {}: total={}, paths={}, hash={}",
                name, result.total_success, result.communication_paths, h1
            );
        } else {
            all_passed = false;
            println!("[FAIL] {}:", name);
            if !fields_match {
                println!("  Expected: {:?}", expected);
                println!("  Got:      {:?}", result);
            }
            if !determ_match {
                println!("  Determinism fail: run1={} run2={}", h1, h2);
            }
        }
    }

    println!("\n===========================================");
    println!("Results: {}/{} passed", passed, total);
    if all_passed {
        println!("[OK] All scenario checks PASSED.");
    } else {
        println!("[FAIL] Some checks failed.");
        std::process::exit(1);
    }
}
