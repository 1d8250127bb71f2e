//! Maps raw schema names to Kotlin identifier conventions.
//!
//! # Naming Table
//!
//! | Schema name | Helper | Result |
//! |-------------|--------|--------|
//! | `"SomeScreenOpen"` | `normalize` + `decapitalize` | `someScreenOpen` (function) |
//! | `"screen_name"` | `normalize` + `decapitalize` | `screenName` (parameter) |
//! | `"event_type"` | `normalize` | `EventType` (enum class) |
//! | `"screen_open"` | `enum_variant_name` | `SCREEN_OPEN` (enum constant) |
//!
//! All transforms are pure and deterministic. Casing uses Rust's
//! locale-independent Unicode mappings, so non-ASCII schema names do not
//! produce platform-dependent identifiers.

/// Convert a raw schema name to an UpperCamelCase Kotlin identifier.
///
/// Spaces are removed, then each `_`-separated segment is capitalized and
/// the segments concatenated:
/// - `"screen_name"` → `"ScreenName"`
/// - `"SomeScreenOpen"` → `"SomeScreenOpen"`
/// - `"element tap"` → `"Elementtap"` (spaces are removed, not split on)
pub fn normalize(name: &str) -> String {
    name.replace(' ', "")
        .split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Lowercase only the first character, preserving the rest.
///
/// Turns a type-style identifier into a function/parameter-style one:
/// `"ScreenName"` → `"screenName"`.
pub fn decapitalize(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Convert a raw string-enum entry to a Kotlin enum constant identifier.
///
/// - `"screen_open"` → `"SCREEN_OPEN"`
/// - `"element_tap"` → `"ELEMENT_TAP"`
///
/// Underscores are kept; spaces are removed. No de-duplication is applied:
/// two entries that uppercase to the same identifier pass straight through
/// and fail at the generated code's own compile time.
pub fn enum_variant_name(entry: &str) -> String {
    entry.replace(' ', "").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_snake_case() {
        assert_eq!(normalize("screen_name"), "ScreenName");
        assert_eq!(normalize("previous_screen_name"), "PreviousScreenName");
        assert_eq!(normalize("event_type"), "EventType");
    }

    #[test]
    fn normalize_already_camel() {
        assert_eq!(normalize("SomeScreenOpen"), "SomeScreenOpen");
        // A second pass leaves an already-normalized identifier intact.
        assert_eq!(normalize(&normalize("screen_name")), "ScreenName");
    }

    #[test]
    fn normalize_removes_spaces() {
        assert_eq!(normalize("screen name"), "Screenname");
        assert_eq!(normalize("some_screen open"), "SomeScreenopen");
    }

    #[test]
    fn normalize_empty_segments() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("_"), "");
        assert_eq!(normalize("a__b"), "AB");
    }

    #[test]
    fn decapitalize_first_only() {
        assert_eq!(decapitalize("ScreenName"), "screenName");
        assert_eq!(decapitalize("A"), "a");
        assert_eq!(decapitalize(""), "");
        assert_eq!(decapitalize("already"), "already");
    }

    #[test]
    fn enum_variant_names() {
        assert_eq!(enum_variant_name("screen_open"), "SCREEN_OPEN");
        assert_eq!(enum_variant_name("element_tap"), "ELEMENT_TAP");
        assert_eq!(enum_variant_name("push enabled"), "PUSHENABLED");
    }
}
