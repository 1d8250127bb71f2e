//! Internal representation of a generated Kotlin file.
//!
//! The generators in [`crate::codegen`] build these structures; the
//! pretty-printer in [`crate::emit`] renders them to text. Keeping the two
//! apart makes generation testable without string-diffing the final output.

/// One generated Kotlin source file.
#[derive(Debug)]
pub struct KotlinFile {
    /// Project id, rendered into the header comment.
    pub project_id: String,

    /// Schema version number, rendered into the header comment.
    pub version_number: i64,

    /// Kotlin package of the generated file.
    pub package_name: String,

    /// Name of the enclosing object holding the event functions.
    pub object_name: String,

    /// Value of the private schema-version constant, or `None` when schema
    /// metadata is excluded from generation.
    pub schema_version_const: Option<String>,

    /// One function per event, in schema order.
    pub functions: Vec<FunctionDef>,

    /// One enum class per string-enum type, in schema order.
    pub enums: Vec<EnumDef>,
}

/// A generated `enum class` definition.
#[derive(Debug)]
pub struct EnumDef {
    pub name: String,
    pub variants: Vec<EnumVariant>,
}

/// One enum constant carrying its original wire string.
#[derive(Debug)]
pub struct EnumVariant {
    pub name: String,
    pub wire_value: String,
}

/// A generated event function returning a dual business/publish event value.
#[derive(Debug)]
pub struct FunctionDef {
    pub name: String,

    /// KDoc text; omitted from output when empty.
    pub doc: String,

    /// Parameter list, already ordered (non-defaulted before defaulted).
    pub params: Vec<ParamDef>,

    /// Always present.
    pub business: EventRecord,

    /// Present iff the event declares an `event_type` value.
    pub publish: Option<EventRecord>,

    /// Tag names selected for explicit external consumers; empty means the
    /// argument is omitted from the generated call.
    pub explicit_consumer_tags: Vec<String>,
}

/// One function parameter.
#[derive(Debug)]
pub struct ParamDef {
    pub name: String,
    pub kotlin_type: String,
    /// Kotlin default expression, rendered verbatim after `=`.
    pub default_expr: Option<String>,
}

/// A named event record with an ordered parameter map.
#[derive(Debug)]
pub struct EventRecord {
    pub name: String,
    pub entries: Vec<(String, ParamEntry)>,
}

/// The value side of one parameter-map entry.
#[derive(Debug)]
pub enum ParamEntry {
    /// A resolved literal, rendered as a quoted Kotlin string.
    Literal(String),

    /// A Kotlin expression, rendered verbatim (an identifier, an
    /// interpolation like `"$count"`, or an enum `.value` access).
    Expr(String),

    /// A reference to the private schema-version constant.
    SchemaVersion,
}
