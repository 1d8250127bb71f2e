//! Generate strongly-typed Kotlin analytics event tracking code from a
//! versioned schema JSON document.
//!
//! `mammoth-event-gen` reads the event/type catalogue served by the schema
//! service and generates a Kotlin file exposing one function per event and
//! one enum class per string-enum type, so consumers get compile-time
//! checked tracking calls instead of hand-written dictionaries.
//!
//! # Features
//!
//! - One `public fun` per event, returning a dual business/publish event value
//! - One `public enum class` per string-enum schema type, wire strings preserved
//! - Default expressions for screen/modal name parameters, reading the
//!   shared runtime context
//! - Explicit-consumer tag filtering (tag classes containing `"Sdk"`)
//! - Optional schema-version metadata embedding
//! - Deterministic output: byte-identical across runs
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use mammoth_event_gen::codegen::{self, GenConfig};
//!
//! let schema = mammoth_event_gen::schema::load_schema(Path::new("schema.json"))?;
//! let code = codegen::generate(&schema, &GenConfig::default())?;
//! eprintln!("Generated {} bytes of Kotlin", code.len());
//! # Ok::<(), mammoth_event_gen::error::Error>(())
//! ```

pub mod ast;
pub mod codegen;
pub mod emit;
pub mod error;
#[cfg(feature = "download")]
pub mod fetch;
pub mod ident;
pub mod schema;
