//! JSON Schema construction and evaluation for setting validators.
//!
//! Validators are stored on each definition as plain schema documents so
//! definitions stay serializable and deep-comparable; compilation happens on
//! demand when a value is checked.

use jsonschema::Validator;
use serde_json::{Map, Value, json};

use crate::error::{SettingsError, SettingsResult};
use crate::keys::SettingKey;

/// Schema accepting any boolean.
#[must_use]
pub fn boolean() -> Value {
    json!({ "type": "boolean" })
}

/// Schema accepting any string.
#[must_use]
pub fn string() -> Value {
    json!({ "type": "string" })
}

/// Schema accepting any number.
#[must_use]
pub fn number() -> Value {
    json!({ "type": "number" })
}

/// Schema accepting integers greater than or equal to zero.
#[must_use]
pub fn unsigned_integer() -> Value {
    json!({ "type": "integer", "minimum": 0 })
}

/// Schema accepting a string or null.
#[must_use]
pub fn nullable_string() -> Value {
    json!({ "type": ["string", "null"] })
}

/// Schema accepting any object.
#[must_use]
pub fn any_object() -> Value {
    json!({ "type": "object" })
}

/// Schema accepting an array whose items all match `items`.
#[must_use]
pub fn array_of(items: Value) -> Value {
    json!({ "type": "array", "items": items })
}

/// Schema accepting an object with exactly the given properties.
///
/// Every listed property is required and unknown properties are rejected,
/// matching the strictness the settings UI relies on for JSON payloads.
#[must_use]
pub fn object(properties: &[(&str, Value)]) -> Value {
    let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let props: Map<String, Value> = properties
        .iter()
        .map(|(name, property)| ((*name).to_string(), property.clone()))
        .collect();
    json!({
        "type": "object",
        "properties": props,
        "required": required,
        "additionalProperties": false,
    })
}

/// Compile a schema document into an executable validator.
pub(crate) fn compile(key: SettingKey, schema: &Value) -> SettingsResult<Validator> {
    Validator::new(schema).map_err(|err| SettingsError::SchemaCompile {
        key,
        detail: err.to_string(),
    })
}

/// Evaluate `candidate` against a compiled validator.
pub(crate) fn validate(
    key: SettingKey,
    validator: &Validator,
    candidate: &Value,
) -> SettingsResult<()> {
    validator
        .validate(candidate)
        .map_err(|err| SettingsError::ValidationRejected {
            key,
            detail: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(schema: &Value, candidate: &Value) -> SettingsResult<()> {
        let compiled = compile(SettingKey::MetaFields, schema).expect("schema compiles");
        validate(SettingKey::MetaFields, &compiled, candidate)
    }

    #[test]
    fn unsigned_integer_accepts_zero_and_positives() {
        let schema = unsigned_integer();
        assert!(check(&schema, &json!(0)).is_ok());
        assert!(check(&schema, &json!(12)).is_ok());
    }

    #[test]
    fn unsigned_integer_rejects_negatives_and_fractions() {
        let schema = unsigned_integer();
        assert!(check(&schema, &json!(-1)).is_err());
        assert!(check(&schema, &json!(2.5)).is_err());
        assert!(check(&schema, &json!("3")).is_err());
    }

    #[test]
    fn object_requires_all_listed_properties() {
        let schema = object(&[("from", string()), ("to", string())]);
        assert!(check(&schema, &json!({ "from": "now-15m", "to": "now" })).is_ok());
        assert!(check(&schema, &json!({ "from": "now-15m" })).is_err());
        assert!(check(&schema, &json!({ "from": "a", "to": "b", "extra": 1 })).is_err());
    }

    #[test]
    fn nullable_string_accepts_null() {
        let schema = nullable_string();
        assert!(check(&schema, &Value::Null).is_ok());
        assert!(check(&schema, &json!("logs-*")).is_ok());
        assert!(check(&schema, &json!(7)).is_err());
    }

    #[test]
    fn array_of_checks_item_type() {
        let schema = array_of(string());
        assert!(check(&schema, &json!(["_source", "_id"])).is_ok());
        assert!(check(&schema, &json!(["_source", 3])).is_err());
    }
}
