//! Typed setting definitions and value classification.
//!
//! # Design
//! - Pure data carriers consumed by the registry and the host store.
//! - Validators are plain JSON Schema documents so definitions stay
//!   comparable and serializable; see `schema.rs` for evaluation.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{SettingsError, SettingsResult};
use crate::keys::SettingKey;
use crate::schema;
use crate::scope::SettingScope;

/// Classification tag a host renderer uses to pick an editor widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Free-form text.
    String,
    /// Numeric value.
    Number,
    /// On/off toggle.
    Boolean,
    /// Ordered sequence of values.
    Array,
    /// JSON document stored as serialized text.
    Json,
    /// One value out of a finite option set.
    Select,
}

/// One entry in the settings registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingDefinition {
    /// Stable key used for lookup and persistence.
    pub key: SettingKey,
    /// Human-readable label (opaque localized string).
    pub display_name: String,
    /// Opaque description; may textually reference other setting keys.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Value applied when no override is stored. Must satisfy `schema`.
    pub default_value: Value,
    /// Renderer classification; inferred from the default's shape when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    /// JSON Schema document accepting or rejecting candidate values.
    pub schema: Value,
    /// Finite set of legal values; only meaningful for select entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_options: Option<Vec<String>>,
    /// Display label per allowed option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_labels: Option<BTreeMap<String, String>>,
    /// Category tags used for grouping in the settings UI.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_tags: Vec<String>,
    /// Whether changing this setting requires a full application reload.
    pub requires_reload: bool,
    /// Granularity at which the value is stored and overridden.
    pub scope: SettingScope,
}

impl SettingDefinition {
    /// Create a definition with the mandatory fields; everything else takes
    /// its documented default (no description, inferred type, global scope).
    #[must_use]
    pub fn new(
        key: SettingKey,
        display_name: impl Into<String>,
        default_value: Value,
        schema: Value,
    ) -> Self {
        Self {
            key,
            display_name: display_name.into(),
            description: String::new(),
            default_value,
            value_type: None,
            schema,
            allowed_options: None,
            option_labels: None,
            group_tags: Vec::new(),
            requires_reload: false,
            scope: SettingScope::Global,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare the renderer classification explicitly.
    #[must_use]
    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    /// Declare the option set and per-option labels of a select entry.
    #[must_use]
    pub fn with_options(mut self, options: Vec<String>, labels: BTreeMap<String, String>) -> Self {
        self.allowed_options = Some(options);
        self.option_labels = Some(labels);
        self
    }

    /// Tag the entry with UI grouping categories.
    #[must_use]
    pub fn with_group_tags(mut self, tags: &[&str]) -> Self {
        self.group_tags = tags.iter().map(|tag| (*tag).to_string()).collect();
        self
    }

    /// Mark the entry as requiring a full application reload on change.
    #[must_use]
    pub fn with_reload_required(mut self) -> Self {
        self.requires_reload = true;
        self
    }

    /// Store the entry at the given scope instead of the global default.
    #[must_use]
    pub fn scoped(mut self, scope: SettingScope) -> Self {
        self.scope = scope;
        self
    }

    /// The renderer classification, inferring one from the default value's
    /// shape when none was declared. A null default falls back to `String`.
    #[must_use]
    pub fn effective_value_type(&self) -> ValueType {
        self.value_type.map_or_else(
            || match &self.default_value {
                Value::Bool(_) => ValueType::Boolean,
                Value::Number(_) => ValueType::Number,
                Value::Array(_) => ValueType::Array,
                Value::Object(_) => ValueType::Json,
                Value::String(_) | Value::Null => ValueType::String,
            },
            |explicit| explicit,
        )
    }

    /// Check a candidate value against this entry's validator.
    ///
    /// JSON-typed entries store their payload as serialized text: the
    /// candidate must be a string that parses as JSON, and the parsed
    /// document is what the schema is evaluated against. Select entries
    /// additionally require membership in `allowed_options`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationRejected` when the candidate fails the schema, is
    /// not well-formed JSON text for a JSON-typed entry, or falls outside a
    /// select entry's option set.
    pub fn validate_candidate(&self, candidate: &Value) -> SettingsResult<()> {
        if let Some(options) = &self.allowed_options {
            let member = candidate
                .as_str()
                .is_some_and(|value| options.iter().any(|option| option == value));
            if !member {
                return Err(SettingsError::ValidationRejected {
                    key: self.key,
                    detail: format!("{candidate} is not an allowed option"),
                });
            }
        }

        let validator = schema::compile(self.key, &self.schema)?;
        match self.effective_value_type() {
            ValueType::Json => {
                let Value::String(raw) = candidate else {
                    return Err(SettingsError::ValidationRejected {
                        key: self.key,
                        detail: "JSON settings are stored as serialized text".to_string(),
                    });
                };
                let parsed: Value =
                    serde_json::from_str(raw).map_err(|err| SettingsError::ValidationRejected {
                        key: self.key,
                        detail: format!("payload is not well-formed JSON: {err}"),
                    })?;
                schema::validate(self.key, &validator, &parsed)
            }
            _ => schema::validate(self.key, &validator, candidate),
        }
    }

    /// Check the construction-time invariants tied to the default value.
    pub(crate) fn validate_default(&self) -> SettingsResult<()> {
        if let Some(options) = &self.allowed_options {
            let member = self
                .default_value
                .as_str()
                .is_some_and(|value| options.iter().any(|option| option == value));
            if !member {
                return Err(SettingsError::DefaultOutsideOptions {
                    key: self.key,
                    value: self.default_value.to_string(),
                });
            }
        }

        self.validate_candidate(&self.default_value)
            .map_err(|err| match err {
                SettingsError::ValidationRejected { key, detail } => {
                    SettingsError::DefaultRejected { key, detail }
                }
                other => other,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition(default_value: Value, schema: Value) -> SettingDefinition {
        SettingDefinition::new(SettingKey::HistoryLimit, "History limit", default_value, schema)
    }

    #[test]
    fn value_type_is_inferred_from_default_shape() {
        assert_eq!(
            definition(json!(true), schema::boolean()).effective_value_type(),
            ValueType::Boolean
        );
        assert_eq!(
            definition(json!(10), schema::number()).effective_value_type(),
            ValueType::Number
        );
        assert_eq!(
            definition(json!(["a"]), schema::array_of(schema::string())).effective_value_type(),
            ValueType::Array
        );
        assert_eq!(
            definition(Value::Null, schema::nullable_string()).effective_value_type(),
            ValueType::String
        );
    }

    #[test]
    fn explicit_value_type_wins_over_inference() {
        let entry = definition(json!("{}"), schema::any_object()).with_value_type(ValueType::Json);
        assert_eq!(entry.effective_value_type(), ValueType::Json);
    }

    #[test]
    fn json_entries_validate_the_parsed_payload() {
        let entry = definition(
            json!("{ \"pause\": false, \"value\": 0 }"),
            schema::object(&[("pause", schema::boolean()), ("value", schema::number())]),
        )
        .with_value_type(ValueType::Json);

        assert!(entry.validate_default().is_ok());
        assert!(entry
            .validate_candidate(&json!("{ \"pause\": true, \"value\": 5000 }"))
            .is_ok());
        assert!(entry.validate_candidate(&json!("{ \"pause\": true }")).is_err());
        assert!(entry.validate_candidate(&json!("not json")).is_err());
        assert!(entry.validate_candidate(&json!({ "pause": true, "value": 1 })).is_err());
    }

    #[test]
    fn select_entries_require_membership() {
        let labels: BTreeMap<String, String> = [("a", "A"), ("b", "B")]
            .into_iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        let entry = definition(json!("a"), schema::string())
            .with_value_type(ValueType::Select)
            .with_options(vec!["a".to_string(), "b".to_string()], labels);

        assert!(entry.validate_default().is_ok());
        assert!(entry.validate_candidate(&json!("b")).is_ok());
        let err = entry.validate_candidate(&json!("c")).unwrap_err();
        assert!(matches!(err, SettingsError::ValidationRejected { .. }));
    }

    #[test]
    fn default_outside_options_is_reported_distinctly() {
        let entry = definition(json!("c"), schema::string())
            .with_value_type(ValueType::Select)
            .with_options(vec!["a".to_string()], BTreeMap::new());
        let err = entry.validate_default().unwrap_err();
        assert!(matches!(err, SettingsError::DefaultOutsideOptions { .. }));
    }
}
