//! Schema model: ordered property definitions and their choice lists.
//!
//! A schema is plain JSON of the form `{ "properties": { key: def, ... } }`.
//! Declaration order is the question order, so properties are kept in an
//! `IndexMap`.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDef>,
}

impl Schema {
    /// Parse a schema from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::validation_invalid_json(e, Some("parse schema".to_string())))
    }

    pub fn property(&self, key: &str) -> Option<&PropertyDef> {
        self.properties.get(key)
    }

    /// Properties that will actually be asked, in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = (&String, &PropertyDef)> {
        self.properties.iter().filter(|(_, def)| !def.disable)
    }

    /// Reject the first enabled property whose type has no question form.
    pub fn check_types(&self) -> Result<()> {
        for (key, def) in self.enabled() {
            if let PropertyType::Other(name) = &def.kind {
                return Err(Error::schema_unknown_type(key.as_str(), name.as_str()));
            }
        }
        Ok(())
    }
}

/// One schema entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_exp: Option<String>,
    /// Custom message shown when validation fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalidate: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    pub disable: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<ChoiceItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependence: Option<String>,
    #[serde(default)]
    pub dep_level: i64,
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    pub checkbox: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    #[default]
    String,
    Number,
    Password,
    Boolean,
    List,
    Other(String),
}

impl PropertyType {
    pub const SUPPORTED: &'static [&'static str] =
        &["string", "number", "password", "boolean", "list"];

    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Password => "password",
            PropertyType::Boolean => "boolean",
            PropertyType::List => "list",
            PropertyType::Other(name) => name,
        }
    }
}

impl From<String> for PropertyType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "string" => PropertyType::String,
            "number" => PropertyType::Number,
            "password" => PropertyType::Password,
            "boolean" => PropertyType::Boolean,
            "list" => PropertyType::List,
            _ => PropertyType::Other(value),
        }
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        value.as_str().to_string()
    }
}

/// One selectable option of a `list` property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceItem {
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imgs: Vec<ImageRef>,
    /// Cascading lists keyed by the dependent property's `ref`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub sub_list: IndexMap<String, Vec<ChoiceItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Text form of a JSON value as a user would type it (strings unquoted).
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Schema flags are often written as `1`, `"yes"` or `true`; accept any
/// JSON value and apply the usual truthiness rules.
fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"{
        "properties": {
            "name": { "type": "string", "name": "project name", "regExp": "^[a-z]+$" },
            "author": { "type": "string", "name": "author" },
            "region": {
                "type": "list",
                "name": "region",
                "list": [
                    { "value": "asia", "name": "Asia", "subList": { "cityRef": [ { "value": "tokyo", "name": "Tokyo" } ] } }
                ]
            },
            "city": { "type": "list", "name": "city", "dependence": "region", "depLevel": 1, "ref": "cityRef" },
            "legacy": { "type": "radio", "disable": 1 }
        }
    }"#;

    #[test]
    fn from_json_preserves_declaration_order() {
        let schema = Schema::from_json(SCHEMA).unwrap();
        let keys: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "author", "region", "city", "legacy"]);
    }

    #[test]
    fn from_json_reads_camel_case_fields() {
        let schema = Schema::from_json(SCHEMA).unwrap();
        let city = schema.property("city").unwrap();

        assert_eq!(city.kind, PropertyType::List);
        assert_eq!(city.dependence.as_deref(), Some("region"));
        assert_eq!(city.dep_level, 1);
        assert_eq!(city.reference.as_deref(), Some("cityRef"));

        let region = schema.property("region").unwrap();
        assert_eq!(region.list[0].sub_list["cityRef"][0].value, "tokyo");
        assert_eq!(
            schema.property("name").unwrap().reg_exp.as_deref(),
            Some("^[a-z]+$")
        );
    }

    #[test]
    fn unknown_type_survives_parsing() {
        let schema = Schema::from_json(SCHEMA).unwrap();
        let legacy = schema.property("legacy").unwrap();
        assert_eq!(legacy.kind, PropertyType::Other("radio".to_string()));
        assert!(legacy.disable);
    }

    #[test]
    fn check_types_ignores_disabled_properties() {
        let schema = Schema::from_json(SCHEMA).unwrap();
        assert!(schema.check_types().is_ok());
        assert_eq!(schema.enabled().count(), 4);
    }

    #[test]
    fn check_types_rejects_enabled_unknown_type() {
        let schema =
            Schema::from_json(r#"{"properties":{"a":{"type":"string"},"b":{"type":"radio"}}}"#)
                .unwrap();
        let err = schema.check_types().unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::SchemaUnknownType);
        assert_eq!(err.details["key"], "b");
    }

    #[test]
    fn null_default_is_absent() {
        let schema =
            Schema::from_json(r#"{"properties":{"a":{"type":"string","default":null}}}"#).unwrap();
        assert!(schema.property("a").unwrap().default.is_none());
    }

    #[test]
    fn truthiness_follows_loose_rules() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&serde_json::json!(0)));
        assert!(!is_truthy(&serde_json::json!("")));
        assert!(is_truthy(&serde_json::json!("no")));
        assert!(is_truthy(&serde_json::json!(2)));
        assert!(is_truthy(&serde_json::json!([])));
    }

    #[test]
    fn value_text_unquotes_strings() {
        assert_eq!(value_text(&serde_json::json!("asia")), "asia");
        assert_eq!(value_text(&serde_json::json!(3)), "3");
        assert_eq!(value_text(&Value::Null), "");
    }

    #[test]
    fn invalid_json_maps_to_validation_error() {
        let err = Schema::from_json("{").unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ValidationInvalidJson);
    }
}
