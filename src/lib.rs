//! Glean - translatable message extraction for structured content
//!
//! Glean walks parsed content (YAML, JSON, front matter documents) and collects
//! every string stored under a tagged key (`title@: Welcome`) into a catalog,
//! along with where it was found and any author comment (`title@#: ...`).
//! Locale overrides are registered against regex patterns and resolved per
//! concrete locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (tag grammar, walker, message store, resolver)

pub mod cli;
pub mod config;
pub mod core;
