//! GeoJSON structural validation.

use clippr_plugins::{EntryError, PluginEntry};

/// Checks that the input is a GeoJSON document with a `type` and a
/// `features` array, returning `{valid: true, features: <count>}`.
pub struct GeojsonValidator;

impl PluginEntry for GeojsonValidator {
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
        let geo: serde_json::Value = serde_json::from_str(input)?;
        let has_type = geo.get("type").is_some_and(|t| !t.is_null());
        let features = geo.get("features").and_then(serde_json::Value::as_array);
        match (has_type, features) {
            (true, Some(features)) => Ok(serde_json::json!({
                "valid": true,
                "features": features.len(),
            })),
            _ => Err("Invalid GeoJSON: must include type + features".into()),
        }
    }
}
