//! Extraction engine.
//!
//! Content flows through the engine in three steps:
//!
//! 1. **Walk**: `walker` visits parsed content and applies the `tags` grammar to
//!    find translatable strings.
//! 2. **Store**: `store` deduplicates messages and accumulates their locations
//!    and comments; locale overrides are registered alongside.
//! 3. **Resolve**: `resolve` merges the overrides of every pattern matching a
//!    locale into one flat map.
//!
//! `context` drives the steps over a whole corpus of files.

pub mod content;
pub mod context;
pub mod error;
pub mod file_scanner;
pub mod parsers;
pub mod resolve;
pub mod store;
pub mod tags;
pub mod walker;

pub use content::ContentValue;
pub use context::{ExtractContext, Extraction, ParseFailure};
pub use error::CatalogError;
pub use store::{LocalePattern, MessageEntry, MessageStore};
pub use walker::{ExtractedMessage, collect_messages};
