//! JSON Schema validation for incident input.
//!
//! Incident JSON is validated against schema/incident.schema.json before it
//! is deserialized, so type mismatches and unknown fields are reported with
//! their instance paths.

use std::sync::OnceLock;

/// Embedded incident schema (loaded at compile time).
const INCIDENT_SCHEMA_JSON: &str = include_str!("../../../../schema/incident.schema.json");

/// Compiled JSON Schema validator (initialized once, reused).
static COMPILED_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

fn get_validator() -> Result<&'static jsonschema::Validator, String> {
    let result = COMPILED_SCHEMA.get_or_init(|| {
        let schema_value: serde_json::Value = serde_json::from_str(INCIDENT_SCHEMA_JSON)
            .map_err(|e| format!("Invalid schema JSON: {}", e))?;

        jsonschema::options()
            .build(&schema_value)
            .map_err(|e| format!("Failed to compile schema: {}", e))
    });

    result.as_ref().map_err(|e| format!("Failed to load schema: {}", e))
}

/// Validate incident JSON against the schema.
///
/// Returns every violation as `"<message> at <path>"`.
pub fn validate_incident_schema(incident_json: &serde_json::Value) -> Result<(), Vec<String>> {
    let validator = get_validator().map_err(|e| vec![e])?;

    let errors: Vec<String> = validator
        .iter_errors(incident_json)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
