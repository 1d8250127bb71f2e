//! Error types for the mammoth-event-gen crate.

use std::path::PathBuf;

/// Errors that can occur while decoding a schema or generating code.
///
/// Any codegen error aborts generation for the whole schema: one bad event
/// fails the run rather than silently shipping an incomplete generated API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A declared value has none of the four literal payload kinds set.
    #[error("event '{event}': value for parameter '{parameter}' has no literal payload")]
    InvalidValue { event: String, parameter: String },

    /// An `event_type` value exists but its payload is not a string-enum member.
    #[error("event '{event}': event_type value must carry a string enum payload")]
    InvalidEventType { event: String },

    /// Two parameters in one event share a raw name.
    #[error("event '{event}': parameter '{parameter}' is declared more than once")]
    DuplicateParameter { event: String, parameter: String },

    /// Failed to read a schema file from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the generated output file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Schema JSON parse error.
    #[error("failed to parse schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The schema service answered with a non-success status.
    #[cfg(feature = "download")]
    #[error("download failed: {0}")]
    Download(String),

    /// The schema service could not be reached (connectivity or timeout).
    #[cfg(feature = "download")]
    #[error("could not reach schema service: {0}")]
    Connect(String),
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
