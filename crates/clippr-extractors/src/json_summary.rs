//! JSON array summarisation: keys and the value types seen under each.

use serde_json::Value;

use clippr_plugins::{EntryError, PluginEntry};

/// Summarises a JSON array of objects as `[{key, types}]`, preserving
/// first-seen order of keys and types.
pub struct JsonSummary;

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl PluginEntry for JsonSummary {
    fn run(&self, input: &str) -> Result<serde_json::Value, EntryError> {
        let parsed: Value = serde_json::from_str(input)?;
        let Value::Array(items) = parsed else {
            return Err("Input must be JSON array".into());
        };

        let mut keys: Vec<String> = Vec::new();
        for item in &items {
            if let Value::Object(object) = item {
                for key in object.keys() {
                    if !keys.contains(key) {
                        keys.push(key.clone());
                    }
                }
            }
        }

        let summary: Vec<Value> = keys
            .iter()
            .map(|key| {
                let mut types: Vec<&'static str> = Vec::new();
                for item in &items {
                    if let Some(value) = item.get(key) {
                        let name = type_name(value);
                        if !types.contains(&name) {
                            types.push(name);
                        }
                    }
                }
                serde_json::json!({ "key": key, "types": types })
            })
            .collect();
        Ok(Value::Array(summary))
    }
}
