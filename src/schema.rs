//! Schema document types and loading.
//!
//! The schema is served per project and version by the Mammoth schema
//! service at `{base_url}/{project}/schema/{version}`. The document is
//! decoded forward-compatibly: unknown fields are ignored so older
//! generator builds keep working against newer schema revisions.
//!
//! The whole model is read-only for the lifetime of one generation run.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// The decoded event/type catalogue for one project and schema version.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Project identifier (e.g., `"whitelabel"`).
    pub project_id: String,

    /// Schema version number, embedded into generated metadata entries.
    pub version_number: i64,

    /// Trackable events in schema order.
    pub events: Vec<Event>,

    /// Named types in schema order. Only types carrying a string enum
    /// contribute generated code.
    pub types: Vec<Type>,
}

/// One trackable occurrence: static values, dynamic parameters, tags.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable numeric event identifier.
    pub id: i64,

    /// Raw event name (e.g., `"SomeScreenOpen"`). Used unnormalized as the
    /// business event name.
    pub name: String,

    /// Human-readable description, attached as KDoc to the generated function.
    #[serde(default)]
    pub description: String,

    /// Statically-known parameter assignments.
    #[serde(default)]
    pub values: Vec<Value>,

    /// Dynamic parameters, becoming the generated function's parameter list.
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Descriptive tags; classes containing `"Sdk"` select explicit
    /// consumer destinations.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// A statically-known parameter assignment belonging to an event.
///
/// Exactly one of the four payload fields must be set; a value with no
/// payload is a data error surfaced as [`Error::InvalidValue`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    /// The parameter this value assigns.
    pub parameter: Parameter,

    #[serde(default)]
    pub string_value: Option<String>,

    #[serde(default)]
    pub integer_value: Option<i64>,

    #[serde(default)]
    pub boolean_value: Option<bool>,

    /// A string-enum member name. The `event_type` value must use this slot.
    #[serde(default)]
    pub string_enum_value: Option<String>,
}

/// A dynamic event parameter.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Wire/schema identifier (e.g., `"screen_name"`).
    pub name: String,

    /// `"String"`, `"Integer"`, `"Boolean"`, or the name of a schema type.
    pub type_name: String,

    #[serde(default)]
    pub description: String,

    /// Key used in the outward-facing publish parameter map.
    pub publish_name: String,
}

/// The generated-code type of a parameter, resolved once from
/// [`Parameter::type_name`] instead of re-matching the string at every use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Boolean,
    /// References a schema [`Type`] carrying a string enum; the generated
    /// parameter type is the generated enum class.
    EnumRef(String),
}

impl Parameter {
    /// Resolve the declared type name to a [`ParamType`].
    pub fn param_type(&self) -> ParamType {
        match self.type_name.as_str() {
            "String" => ParamType::String,
            "Integer" => ParamType::Integer,
            "Boolean" => ParamType::Boolean,
            other => ParamType::EnumRef(other.to_string()),
        }
    }
}

/// A descriptive event tag.
#[derive(Debug, Deserialize)]
pub struct Tag {
    /// Destination name (e.g., `"Braze"`).
    pub name: String,

    /// Free-form category (e.g., `"SdkIntegration"`, `"Analytics"`).
    #[serde(rename = "class")]
    pub class_name: String,
}

/// A named schema type. Types without a string enum generate nothing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    pub name: String,

    /// Ordered wire strings, one generated enum constant each.
    #[serde(default)]
    pub string_enum: Option<Vec<String>>,
}

/// Load a cached schema document from disk.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let schema: Schema = serde_json::from_str(&content)?;
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_schema_json() -> String {
        r#"{
            "projectId": "whitelabel",
            "versionNumber": 1,
            "events": [
                {
                    "id": 0,
                    "name": "SomeScreenOpen",
                    "description": "Some screen was opened",
                    "values": [
                        {
                            "parameter": {
                                "name": "event_type",
                                "typeName": "event_type",
                                "description": "",
                                "publishName": "event_type"
                            },
                            "stringValue": null,
                            "integerValue": null,
                            "booleanValue": null,
                            "stringEnumValue": "screen_open"
                        }
                    ],
                    "parameters": [],
                    "tags": []
                }
            ],
            "types": [
                {
                    "name": "event_type",
                    "stringEnum": ["screen_open", "element_tap"]
                }
            ]
        }"#
        .to_string()
    }

    #[test]
    fn parse_minimal_schema() {
        let schema: Schema = serde_json::from_str(&minimal_schema_json()).unwrap();
        assert_eq!(schema.project_id, "whitelabel");
        assert_eq!(schema.version_number, 1);
        assert_eq!(schema.events.len(), 1);
        assert_eq!(schema.types.len(), 1);
    }

    #[test]
    fn parse_event_value() {
        let schema: Schema = serde_json::from_str(&minimal_schema_json()).unwrap();
        let event = &schema.events[0];

        assert_eq!(event.id, 0);
        assert_eq!(event.name, "SomeScreenOpen");
        assert_eq!(event.values.len(), 1);

        let value = &event.values[0];
        assert_eq!(value.parameter.name, "event_type");
        assert_eq!(value.string_enum_value.as_deref(), Some("screen_open"));
        assert!(value.string_value.is_none());
        assert!(value.integer_value.is_none());
        assert!(value.boolean_value.is_none());
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let json = r#"{
            "projectId": "p",
            "versionNumber": 7,
            "futureTopLevelField": {"nested": true},
            "events": [],
            "types": [{"name": "t", "stringEnum": null, "futureTypeField": 1}]
        }"#;
        let schema: Schema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.version_number, 7);
        assert!(schema.types[0].string_enum.is_none());
    }

    #[test]
    fn param_type_resolution() {
        let param = |type_name: &str| Parameter {
            name: "p".to_string(),
            type_name: type_name.to_string(),
            description: String::new(),
            publish_name: "p".to_string(),
        };
        assert_eq!(param("String").param_type(), ParamType::String);
        assert_eq!(param("Integer").param_type(), ParamType::Integer);
        assert_eq!(param("Boolean").param_type(), ParamType::Boolean);
        assert_eq!(
            param("event_type").param_type(),
            ParamType::EnumRef("event_type".to_string())
        );
    }
}
