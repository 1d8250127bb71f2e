//! Kotlin code generation from an analytics schema.
//!
//! Builds, per event, a function constructing a dual business/publish event
//! value, and per string-enum type an enum class. The generated output is
//! deterministic: identical schema and configuration always produce
//! byte-identical text. Only ordered containers are walked; no wall-clock
//! time or randomness is consulted.

use std::collections::HashSet;

use crate::ast::{
    EnumDef, EnumVariant, EventRecord, FunctionDef, KotlinFile, ParamDef, ParamEntry,
};
use crate::emit::ENUM_VALUE_PROPERTY;
use crate::error::{Error, Result};
use crate::ident::{decapitalize, enum_variant_name, normalize};
use crate::schema::{Event, ParamType, Schema, Type, Value};

/// Reserved parameter name whose value selects the publish event name.
pub const EVENT_TYPE_PARAMETER: &str = "event_type";

/// Reserved parameter names receiving a generated default expression that
/// reads the shared runtime context.
const SCREEN_NAME_PARAMETER: &str = "screen_name";
const PREVIOUS_SCREEN_NAME_PARAMETER: &str = "previous_screen_name";
const MODAL_NAME_PARAMETER: &str = "modal_name";

/// Metadata keys in the business parameter map.
const SCHEMA_EVENT_ID_KEY: &str = "schema_event_id";
const SCHEMA_VERSION_KEY: &str = "schema_version";

/// Metadata keys in the publish parameter map.
const PUBLISH_EVENT_ID_KEY: &str = "achievement_id";
const PUBLISH_SCHEMA_VERSION_KEY: &str = "score";

/// Tag classes containing this substring (case-insensitively) select
/// explicit consumer destinations.
const EXPLICIT_CONSUMER_TAG_CLASS: &str = "sdk";

/// Generation configuration, passed in explicitly so multiple generations
/// with different targets can run independently.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Kotlin package of the generated file.
    pub package_name: String,

    /// Name of the enclosing object holding the event functions.
    pub object_name: String,

    /// When false, the schema-version constant and both metadata entries
    /// are omitted from generated parameter maps.
    pub include_schema_metadata: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            package_name: "com.trafi.analytics".to_string(),
            object_name: "AnalyticsEvent".to_string(),
            include_schema_metadata: true,
        }
    }
}

/// Generate the full Kotlin source text for a schema.
///
/// Fatal-per-run: the first invalid event aborts generation for the whole
/// schema and no output is produced.
pub fn generate(schema: &Schema, config: &GenConfig) -> Result<String> {
    let file = build_file(schema, config)?;
    Ok(crate::emit::render(&file))
}

/// Build the generated-file representation without rendering it.
pub fn build_file(schema: &Schema, config: &GenConfig) -> Result<KotlinFile> {
    let functions = schema
        .events
        .iter()
        .map(|event| generate_event(event, config.include_schema_metadata))
        .collect::<Result<Vec<_>>>()?;

    let enums = schema.types.iter().filter_map(generate_enum).collect();

    Ok(KotlinFile {
        project_id: schema.project_id.clone(),
        version_number: schema.version_number,
        package_name: config.package_name.clone(),
        object_name: config.object_name.clone(),
        schema_version_const: config
            .include_schema_metadata
            .then(|| schema.version_number.to_string()),
        functions,
        enums,
    })
}

// ── Enum type generation ───────────────────────────────────────────────

/// Build an enum class definition for a type, or `None` when the type
/// carries no string enum.
///
/// Variants keep schema order and their original wire string. Duplicate
/// identifiers after normalization pass straight through; the generated
/// Kotlin fails at its own compile time.
pub fn generate_enum(ty: &Type) -> Option<EnumDef> {
    let string_enum = ty.string_enum.as_ref()?;
    Some(EnumDef {
        name: normalize(&ty.name),
        variants: string_enum
            .iter()
            .map(|entry| EnumVariant {
                name: enum_variant_name(entry),
                wire_value: entry.clone(),
            })
            .collect(),
    })
}

// ── Event generation ───────────────────────────────────────────────────

/// Build the function definition for one event.
pub fn generate_event(event: &Event, include_metadata: bool) -> Result<FunctionDef> {
    check_duplicate_parameters(event)?;

    // Parameter list: identifiers, types, defaults; then a stable partition
    // putting non-defaulted parameters first (Kotlin requires defaulted
    // parameters to trail in call syntax).
    let mut params: Vec<ParamDef> = Vec::with_capacity(event.parameters.len());
    for parameter in &event.parameters {
        let ident = decapitalize(&normalize(&parameter.name));
        let kotlin_type = match parameter.param_type() {
            ParamType::String => "String".to_string(),
            ParamType::Integer => "Int".to_string(),
            ParamType::Boolean => "Boolean".to_string(),
            ParamType::EnumRef(name) => normalize(&name),
        };
        params.push(ParamDef {
            name: ident,
            kotlin_type,
            default_expr: default_expression(&parameter.name),
        });
    }
    let (required, defaulted): (Vec<_>, Vec<_>) =
        params.into_iter().partition(|p| p.default_expr.is_none());
    let params: Vec<ParamDef> = required.into_iter().chain(defaulted).collect();

    let business = business_record(event, include_metadata)?;
    let publish = publish_record(event, include_metadata)?;

    // Tags whose class names an explicit external consumer, in schema order.
    let explicit_consumer_tags: Vec<String> = event
        .tags
        .iter()
        .filter(|tag| {
            tag.class_name
                .to_lowercase()
                .contains(EXPLICIT_CONSUMER_TAG_CLASS)
        })
        .map(|tag| tag.name.clone())
        .collect();

    Ok(FunctionDef {
        name: decapitalize(&normalize(&event.name)),
        doc: event.description.clone(),
        params,
        business,
        publish,
        explicit_consumer_tags,
    })
}

fn check_duplicate_parameters(event: &Event) -> Result<()> {
    let mut seen = HashSet::new();
    for parameter in &event.parameters {
        if !seen.insert(parameter.name.as_str()) {
            return Err(Error::DuplicateParameter {
                event: event.name.clone(),
                parameter: parameter.name.clone(),
            });
        }
    }
    Ok(())
}

/// Default expression for reserved parameter names reading the shared
/// runtime context; `None` for everything else.
fn default_expression(raw_name: &str) -> Option<String> {
    let expr = match raw_name {
        SCREEN_NAME_PARAMETER => "Analytics.currentScreenName",
        PREVIOUS_SCREEN_NAME_PARAMETER => "Analytics.previousScreenName",
        MODAL_NAME_PARAMETER => "Analytics.currentModalName",
        _ => return None,
    };
    Some(expr.to_string())
}

/// The business event record, always present: raw event name, value
/// literals keyed by schema name, parameter expressions, metadata entries.
fn business_record(event: &Event, include_metadata: bool) -> Result<EventRecord> {
    let mut entries: Vec<(String, ParamEntry)> = Vec::new();

    for value in &event.values {
        entries.push((
            value.parameter.name.clone(),
            ParamEntry::Literal(publish_value(event, value)?),
        ));
    }
    for parameter in &event.parameters {
        entries.push((
            parameter.name.clone(),
            ParamEntry::Expr(native_parameter_expression(parameter.param_type(), &parameter.name)),
        ));
    }
    if include_metadata {
        entries.push((
            SCHEMA_EVENT_ID_KEY.to_string(),
            ParamEntry::Literal(event.id.to_string()),
        ));
        entries.push((SCHEMA_VERSION_KEY.to_string(), ParamEntry::SchemaVersion));
    }

    Ok(EventRecord {
        name: event.name.clone(),
        entries,
    })
}

/// The publish event record, present iff the event declares an
/// `event_type` value. Keys use publish names; the `event_type` value
/// itself becomes the record name and is excluded from the map.
fn publish_record(event: &Event, include_metadata: bool) -> Result<Option<EventRecord>> {
    let Some(event_type) = event
        .values
        .iter()
        .find(|v| v.parameter.name == EVENT_TYPE_PARAMETER)
    else {
        return Ok(None);
    };
    let name = event_type
        .string_enum_value
        .clone()
        .ok_or_else(|| Error::InvalidEventType {
            event: event.name.clone(),
        })?;

    let mut entries: Vec<(String, ParamEntry)> = Vec::new();

    for value in &event.values {
        if value.parameter.name == EVENT_TYPE_PARAMETER {
            continue;
        }
        entries.push((
            value.parameter.publish_name.clone(),
            ParamEntry::Literal(publish_value(event, value)?),
        ));
    }
    for parameter in &event.parameters {
        entries.push((
            parameter.publish_name.clone(),
            ParamEntry::Expr(native_parameter_expression(parameter.param_type(), &parameter.name)),
        ));
    }
    if include_metadata {
        entries.push((
            PUBLISH_EVENT_ID_KEY.to_string(),
            ParamEntry::Literal(event.id.to_string()),
        ));
        entries.push((
            PUBLISH_SCHEMA_VERSION_KEY.to_string(),
            ParamEntry::SchemaVersion,
        ));
    }

    Ok(Some(EventRecord { name, entries }))
}

/// Resolve a value's literal payload to its string form.
///
/// Exactly one of the four payload slots must be set; integers and
/// booleans are stringified.
fn publish_value(event: &Event, value: &Value) -> Result<String> {
    value
        .string_value
        .clone()
        .or_else(|| value.integer_value.map(|i| i.to_string()))
        .or_else(|| value.boolean_value.map(|b| b.to_string()))
        .or_else(|| value.string_enum_value.clone())
        .ok_or_else(|| Error::InvalidValue {
            event: event.name.clone(),
            parameter: value.parameter.name.clone(),
        })
}

/// The Kotlin expression carrying a dynamic parameter into a parameter map.
///
/// `String` parameters pass through as the identifier; `Integer`/`Boolean`
/// are stringified via interpolation; enum parameters read the wire value
/// property.
fn native_parameter_expression(param_type: ParamType, raw_name: &str) -> String {
    let ident = decapitalize(&normalize(raw_name));
    match param_type {
        ParamType::String => ident,
        ParamType::Integer | ParamType::Boolean => format!("\"${ident}\""),
        ParamType::EnumRef(_) => format!("{ident}.{ENUM_VALUE_PROPERTY}"),
    }
}
