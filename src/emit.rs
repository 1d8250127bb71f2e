//! Deterministic Kotlin rendering of a generated file.
//!
//! Pure textual concern: takes the structures built by [`crate::codegen`]
//! and prints them with fixed indentation and ordering. Identical input
//! always yields byte-identical output.

use std::fmt::Write;

use crate::ast::{EnumDef, EventRecord, FunctionDef, KotlinFile, ParamEntry};

/// Name of the private constant holding the schema version.
const SCHEMA_VERSION_CONST: &str = "mammothSchemaVersion";

/// Kotlin property holding an enum constant's wire string.
pub(crate) const ENUM_VALUE_PROPERTY: &str = "value";

/// Render a generated file to Kotlin source text.
pub fn render(file: &KotlinFile) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "// {} schema version {}",
        file.project_id, file.version_number
    )
    .unwrap();
    writeln!(out, "// Generated by mammoth-event-gen. Do not edit manually.").unwrap();
    writeln!(out, "package {}", file.package_name).unwrap();
    writeln!(out).unwrap();

    if let Some(version) = &file.schema_version_const {
        writeln!(
            out,
            "private const val {SCHEMA_VERSION_CONST}: String = {}",
            quote(version)
        )
        .unwrap();
        writeln!(out).unwrap();
    }

    writeln!(out, "public object {} {{", file.object_name).unwrap();
    for (i, function) in file.functions.iter().enumerate() {
        if i > 0 {
            writeln!(out).unwrap();
        }
        render_function(&mut out, function);
    }
    writeln!(out, "}}").unwrap();

    for enum_def in &file.enums {
        writeln!(out).unwrap();
        render_enum(&mut out, enum_def);
    }

    out
}

fn render_function(out: &mut String, function: &FunctionDef) {
    if !function.doc.is_empty() {
        writeln!(out, "    /**").unwrap();
        for line in function.doc.lines() {
            writeln!(out, "     * {line}").unwrap();
        }
        writeln!(out, "     */").unwrap();
    }

    if function.params.is_empty() {
        writeln!(
            out,
            "    public fun {}(): Analytics.Event = Analytics.Event(",
            function.name
        )
        .unwrap();
    } else {
        writeln!(out, "    public fun {}(", function.name).unwrap();
        for (i, param) in function.params.iter().enumerate() {
            let comma = if i + 1 < function.params.len() { "," } else { "" };
            match &param.default_expr {
                Some(default) => writeln!(
                    out,
                    "        {}: {} = {default}{comma}",
                    param.name, param.kotlin_type
                )
                .unwrap(),
                None => {
                    writeln!(out, "        {}: {}{comma}", param.name, param.kotlin_type).unwrap()
                }
            }
        }
        writeln!(out, "    ): Analytics.Event = Analytics.Event(").unwrap();
    }

    let mut args: Vec<String> = vec![render_record("business", &function.business)];
    if let Some(publish) = &function.publish {
        args.push(render_record("publish", publish));
    }
    if !function.explicit_consumer_tags.is_empty() {
        let tags = function
            .explicit_consumer_tags
            .iter()
            .map(|name| quote(name))
            .collect::<Vec<_>>()
            .join(", ");
        args.push(format!("        explicitConsumerTags = listOf({tags})"));
    }
    writeln!(out, "{}", args.join(",\n")).unwrap();
    writeln!(out, "    )").unwrap();
}

/// Render one `RawEvent(...)` argument block, without trailing newline so
/// the caller can join arguments with commas.
fn render_record(label: &str, record: &EventRecord) -> String {
    let mut out = String::new();
    writeln!(out, "        {label} = RawEvent(").unwrap();
    writeln!(out, "            name = {},", quote(&record.name)).unwrap();
    if record.entries.is_empty() {
        writeln!(out, "            parameters = mapOf()").unwrap();
    } else {
        writeln!(out, "            parameters = mapOf(").unwrap();
        for (i, (key, entry)) in record.entries.iter().enumerate() {
            let comma = if i + 1 < record.entries.len() { "," } else { "" };
            let value = match entry {
                ParamEntry::Literal(literal) => quote(literal),
                ParamEntry::Expr(expr) => expr.clone(),
                ParamEntry::SchemaVersion => SCHEMA_VERSION_CONST.to_string(),
            };
            writeln!(out, "                {} to {value}{comma}", quote(key)).unwrap();
        }
        writeln!(out, "            )").unwrap();
    }
    write!(out, "        )").unwrap();
    out
}

fn render_enum(out: &mut String, enum_def: &EnumDef) {
    writeln!(out, "public enum class {}(", enum_def.name).unwrap();
    writeln!(out, "    public val {ENUM_VALUE_PROPERTY}: String").unwrap();
    writeln!(out, ") {{").unwrap();
    for variant in &enum_def.variants {
        writeln!(out, "    {}({}),", variant.name, quote(&variant.wire_value)).unwrap();
    }
    writeln!(out, "    ;").unwrap();
    writeln!(out, "}}").unwrap();
}

/// Quote a string as a Kotlin string literal, escaping characters that
/// would change meaning inside double quotes.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{EnumVariant, ParamDef};

    #[test]
    fn quote_escapes_specials() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("$cost"), "\"\\$cost\"");
        assert_eq!(quote("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn renders_enum_class() {
        let mut out = String::new();
        render_enum(
            &mut out,
            &EnumDef {
                name: "EventType".to_string(),
                variants: vec![
                    EnumVariant {
                        name: "SCREEN_OPEN".to_string(),
                        wire_value: "screen_open".to_string(),
                    },
                    EnumVariant {
                        name: "ELEMENT_TAP".to_string(),
                        wire_value: "element_tap".to_string(),
                    },
                ],
            },
        );
        assert_eq!(
            out,
            "public enum class EventType(\n\
             \x20   public val value: String\n\
             ) {\n\
             \x20   SCREEN_OPEN(\"screen_open\"),\n\
             \x20   ELEMENT_TAP(\"element_tap\"),\n\
             \x20   ;\n\
             }\n"
        );
    }

    #[test]
    fn renders_parameter_list_with_defaults() {
        let mut out = String::new();
        render_function(
            &mut out,
            &FunctionDef {
                name: "elementTap".to_string(),
                doc: String::new(),
                params: vec![
                    ParamDef {
                        name: "count".to_string(),
                        kotlin_type: "Int".to_string(),
                        default_expr: None,
                    },
                    ParamDef {
                        name: "screenName".to_string(),
                        kotlin_type: "String".to_string(),
                        default_expr: Some("Analytics.currentScreenName".to_string()),
                    },
                ],
                business: EventRecord {
                    name: "ElementTap".to_string(),
                    entries: vec![],
                },
                publish: None,
                explicit_consumer_tags: vec![],
            },
        );
        assert!(out.contains("    public fun elementTap(\n"));
        assert!(out.contains("        count: Int,\n"));
        assert!(out.contains("        screenName: String = Analytics.currentScreenName\n"));
        assert!(out.contains("            parameters = mapOf()\n"));
    }

    #[test]
    fn renders_consumer_tags_argument() {
        let mut out = String::new();
        render_function(
            &mut out,
            &FunctionDef {
                name: "someScreenOpen".to_string(),
                doc: String::new(),
                params: vec![],
                business: EventRecord {
                    name: "SomeScreenOpen".to_string(),
                    entries: vec![],
                },
                publish: None,
                explicit_consumer_tags: vec!["Braze".to_string(), "Adjust".to_string()],
            },
        );
        assert!(out.contains("        explicitConsumerTags = listOf(\"Braze\", \"Adjust\")\n"));
    }
}
