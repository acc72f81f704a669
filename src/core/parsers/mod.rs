//! Parsers turning files into extractor input.
//!
//! - `document`: content files (YAML, JSON, front matter documents)
//! - `translations`: locale override files

pub mod document;
pub mod translations;
