//! JSON Schema validation for installation profiles

use anyhow::{Result, anyhow};
use jsonschema::Validator;
use serde_json::Value;

/// Get the embedded JSON schema for installation profiles
///
/// # Errors
///
/// Returns an error if:
/// - The embedded schema is not valid JSON or not a valid Draft 7 schema
#[inline]
pub fn get_schema() -> Result<Validator> {
    let schema_str = include_str!("../../docs/schema.json");
    let schema: Value = serde_json::from_str(schema_str)
        .map_err(|e| anyhow!("Failed to parse embedded JSON schema: {e}"))?;

    jsonschema::draft7::new(&schema).map_err(|e| anyhow!("Failed to compile JSON schema: {e}"))
}

/// Validate a profile document against the schema
///
/// # Errors
///
/// Returns an error listing every violation found
#[inline]
pub fn validate_against_schema(profile: &Value) -> Result<()> {
    let schema = get_schema()?;

    let error_messages: Vec<String> = schema
        .iter_errors(profile)
        .map(|e| format!("  - {e}"))
        .collect();

    if !error_messages.is_empty() {
        return Err(anyhow!(
            "Profile validation failed:\n{}",
            error_messages.join("\n")
        ));
    }

    Ok(())
}
