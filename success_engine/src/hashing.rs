/// SuccessModel v1.0 — Canonical Hashing
///
/// Deterministic canonical serialization + SHA-256 hashing of one
/// (inputs, result) scenario record. Produces byte-identical output
/// across platforms.
///
/// Rules:
///   - model_version first — part of the record identity
///   - strict field order, UTF-8 JSON, no whitespace
///   - integers only, no float, no platform newline

use sha2::{Digest, Sha256};
use serde_json::{Map, Value};

use crate::domain::{ModelInputs, ModelResult};
use crate::MODEL_VERSION;

/// Canonical serialization of a scenario record to UTF-8 JSON bytes.
pub fn canonical_serialize(inputs: &ModelInputs, result: &ModelResult) -> Vec<u8> {
    let obj = build_canonical_value(inputs, result);
    serde_json::to_string(&obj)
        .expect("canonical_serialize: JSON serialization failed")
        .into_bytes()
}

/// SHA-256 of the canonical serialization. Lowercase hex string.
pub fn canonical_hash(inputs: &ModelInputs, result: &ModelResult) -> String {
    let bytes = canonical_serialize(inputs, result);
    let digest = Sha256::digest(&bytes);
    digest
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}

/// Build the canonical serde_json::Value in strict field order.
///
/// Uses serde_json::Map which preserves insertion order.
///
/// Field order: model_version, inputs (input declaration order),
///              result (pipeline order).
fn build_canonical_value(inputs: &ModelInputs, result: &ModelResult) -> Value {
    let mut in_map = Map::new();
    in_map.insert("team_count".to_string(), inputs.team_count.into());
    in_map.insert("team_success_rate".to_string(), inputs.team_success_rate.into());
    in_map.insert("availability".to_string(), inputs.availability.into());
    in_map.insert("communication".to_string(), inputs.communication.into());
    in_map.insert("skin_in_game".to_string(), inputs.skin_in_game.into());
    in_map.insert("iteration_ability".to_string(), inputs.iteration_ability.into());
    in_map.insert("iterations".to_string(), inputs.iterations.into());

    let mut res_map = Map::new();
    res_map.insert("communication_paths".to_string(), result.communication_paths.into());
    res_map.insert("friction_penalty".to_string(), result.friction_penalty.into());
    res_map.insert("base_success".to_string(), result.base_success.into());
    res_map.insert("communication_penalty".to_string(), result.communication_penalty.into());
    res_map.insert(
        "success_per_iteration".to_string(),
        result.success_per_iteration.into(),
    );
    res_map.insert("total_success".to_string(), result.total_success.into());

    let mut root = Map::new();
    root.insert(
        "model_version".to_string(),
        Value::Number((MODEL_VERSION as i64).into()),
    );
    root.insert("inputs".to_string(), Value::Object(in_map));
    root.insert("result".to_string(), Value::Object(res_map));

    Value::Object(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::compute;

    #[test]
    fn test_canonical_json_is_byte_exact() {
        let inputs = ModelInputs::default();
        let result = compute(&inputs);
        let json = String::from_utf8(canonical_serialize(&inputs, &result)).unwrap();
        assert_eq!(
            json,
            "{\"model_version\":1,\
             \"inputs\":{\"team_count\":2,\"team_success_rate\":80,\
             \"availability\":90,\"communication\":85,\"skin_in_game\":80,\
             \"iteration_ability\":85,\"iterations\":2},\
             \"result\":{\"communication_paths\":1,\"friction_penalty\":8500,\
             \"base_success\":6800,\"communication_penalty\":9500,\
             \"success_per_iteration\":6460,\"total_success\":4173}}"
        );
    }

    #[test]
    fn test_hash_is_lowercase_hex() {
        let inputs = ModelInputs::default();
        let result = compute(&inputs);
        let hash = canonical_hash(&inputs, &result);
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_is_deterministic() {
        let inputs = ModelInputs::default();
        let result = compute(&inputs);
        assert_eq!(
            canonical_hash(&inputs, &result),
            canonical_hash(&inputs, &result)
        );
    }
}
