//! Strict-mode JSON Schema tooling.
//!
//! The completion service's structured-output mode rejects schemas unless
//! every object node carries `additionalProperties: false` and a `required`
//! list naming exactly its declared properties, and `$ref` nodes carry no
//! sibling keywords. `normalize_for_strict_mode` rewrites a schemars-derived
//! schema in place to satisfy those rules; the same normalized document is
//! compiled locally to validate replies, so corrective prompts can quote the
//! exact failing pointer.

use jsonschema::JSONSchema;
use schemars::{schema_for, JsonSchema};
use serde_json::{json, Value};

use crate::models::evaluation::EvaluationResponse;
use crate::models::evaluation_raw::EvaluationResponseRaw;

/// Compiled schemas shared across requests.
pub struct Schemas {
    /// Strict schema for the raw (pre-enrichment) reply, also sent to the
    /// completion service as the response format.
    pub raw: JSONSchema,
    pub raw_value: Value,
    /// Full (post-enrichment) schema used for the final contract check.
    pub full: JSONSchema,
}

impl Schemas {
    pub fn build() -> anyhow::Result<Self> {
        let raw_value = strict_schema_for::<EvaluationResponseRaw>()?;
        let full_value = strict_schema_for::<EvaluationResponse>()?;

        let raw = JSONSchema::compile(&raw_value)
            .map_err(|e| anyhow::anyhow!("raw schema failed to compile: {e}"))?;
        let full = JSONSchema::compile(&full_value)
            .map_err(|e| anyhow::anyhow!("full schema failed to compile: {e}"))?;

        Ok(Self {
            raw,
            raw_value,
            full,
        })
    }

    /// `response_format` block for the chat-completions request.
    pub fn response_format(&self) -> Value {
        json!({
            "type": "json_schema",
            "json_schema": {
                "name": "ProfileEvaluationResponse",
                "schema": self.raw_value,
                "strict": true,
            }
        })
    }

    /// Validates a candidate value, returning every violation as one string.
    pub fn validate_raw(&self, value: &Value) -> Result<(), String> {
        collect_errors(&self.raw, value)
    }

    pub fn validate_full(&self, value: &Value) -> Result<(), String> {
        collect_errors(&self.full, value)
    }
}

fn collect_errors(schema: &JSONSchema, value: &Value) -> Result<(), String> {
    let result = schema.validate(value);
    match result {
        Ok(()) => Ok(()),
        Err(errors) => {
            let details: Vec<String> = errors
                .map(|e| format!("{} (at {})", e, e.instance_path))
                .collect();
            Err(details.join("; "))
        }
    }
}

fn strict_schema_for<T: JsonSchema>() -> anyhow::Result<Value> {
    let mut value = serde_json::to_value(schema_for!(T))?;
    normalize_for_strict_mode(&mut value);
    Ok(value)
}

/// Rewrites a schema in place for strict structured-output mode.
pub fn normalize_for_strict_mode(node: &mut Value) {
    match node {
        Value::Object(map) => {
            // $ref must stand alone; drop any sibling keywords.
            if map.contains_key("$ref") && map.len() > 1 {
                let reference = map.get("$ref").cloned();
                map.clear();
                if let Some(reference) = reference {
                    map.insert("$ref".to_string(), reference);
                }
                return;
            }

            if map.get("type").and_then(Value::as_str) == Some("object") {
                let property_names: Vec<String> = map
                    .get("properties")
                    .and_then(Value::as_object)
                    .map(|props| props.keys().cloned().collect())
                    .unwrap_or_default();

                map.insert("additionalProperties".to_string(), Value::Bool(false));
                map.insert(
                    "required".to_string(),
                    Value::Array(property_names.iter().cloned().map(Value::String).collect()),
                );
            }

            for key in ["properties", "definitions", "$defs"] {
                if let Some(children) = map.get_mut(key).and_then(Value::as_object_mut) {
                    for child in children.values_mut() {
                        normalize_for_strict_mode(child);
                    }
                }
            }
            if let Some(items) = map.get_mut("items") {
                normalize_for_strict_mode(items);
            }
            for key in ["oneOf", "anyOf", "allOf"] {
                if let Some(children) = map.get_mut(key).and_then(Value::as_array_mut) {
                    for child in children {
                        normalize_for_strict_mode(child);
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                normalize_for_strict_mode(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_objects_are_strict(node: &Value, path: &str) {
        if let Some(map) = node.as_object() {
            // A bare $ref node is exempt from the object rules.
            if map.contains_key("$ref") {
                assert_eq!(map.len(), 1, "$ref node at {path} has sibling keywords");
                return;
            }
            if map.get("type").and_then(Value::as_str) == Some("object") {
                assert_eq!(
                    map.get("additionalProperties"),
                    Some(&Value::Bool(false)),
                    "object at {path} allows extra properties"
                );
                let props: Vec<&String> = map
                    .get("properties")
                    .and_then(Value::as_object)
                    .map(|p| p.keys().collect())
                    .unwrap_or_default();
                let required: Vec<&str> = map
                    .get("required")
                    .and_then(Value::as_array)
                    .map(|r| r.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default();
                assert_eq!(
                    props.len(),
                    required.len(),
                    "required mismatch at {path}"
                );
            }
            for (key, child) in map {
                assert_objects_are_strict(child, &format!("{path}/{key}"));
            }
        } else if let Some(items) = node.as_array() {
            for (i, item) in items.iter().enumerate() {
                assert_objects_are_strict(item, &format!("{path}/{i}"));
            }
        }
    }

    #[test]
    fn test_raw_schema_is_fully_strict() {
        let schema = strict_schema_for::<EvaluationResponseRaw>().unwrap();
        assert_objects_are_strict(&schema, "");
    }

    #[test]
    fn test_full_schema_is_fully_strict() {
        let schema = strict_schema_for::<EvaluationResponse>().unwrap();
        assert_objects_are_strict(&schema, "");
    }

    #[test]
    fn test_ref_siblings_are_stripped() {
        let mut node = json!({
            "$ref": "#/definitions/Thing",
            "description": "extra keyword that must go"
        });
        normalize_for_strict_mode(&mut node);
        assert_eq!(node, json!({"$ref": "#/definitions/Thing"}));
    }

    #[test]
    fn test_schemas_compile() {
        let schemas = Schemas::build().unwrap();
        assert!(schemas.response_format()["json_schema"]["strict"]
            .as_bool()
            .unwrap());
    }

    #[test]
    fn test_validate_raw_rejects_wrong_shape() {
        let schemas = Schemas::build().unwrap();
        let bad = json!({"profile_evaluation": {"profile_strength_score": "not a number"}});
        let err = schemas.validate_raw(&bad).unwrap_err();
        assert!(!err.is_empty());
    }
}
