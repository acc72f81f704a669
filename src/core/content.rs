use std::fmt;

use indexmap::IndexMap;

/// Parsed content handed to the extractor.
///
/// Documents reach the engine already deserialized; this is the shape the walker
/// dispatches on. Only three shapes matter for extraction:
///
/// 1. **String**: a scalar that may become a message.
/// 2. **Sequence**: an ordered list whose elements inherit the enclosing context.
/// 3. **Mapping**: key-ordered entries, each deciding its own tagging.
///
/// Everything else (numbers, booleans, null) is kept as [`ContentValue::Other`]
/// and never extracted.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentValue {
    /// A string scalar: `title@: Welcome`
    String(String),

    /// An ordered sequence: `items@: [one, two]`
    Sequence(Vec<ContentValue>),

    /// A key-ordered mapping with string keys.
    Mapping(IndexMap<String, ContentValue>),

    /// Any non-string scalar.
    Other,
}

impl ContentValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ContentValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty_mapping(&self) -> bool {
        matches!(self, ContentValue::Mapping(map) if map.is_empty())
    }

    pub fn empty_mapping() -> Self {
        ContentValue::Mapping(IndexMap::new())
    }
}

impl fmt::Display for ContentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentValue::String(_) => write!(f, "string"),
            ContentValue::Sequence(_) => write!(f, "sequence"),
            ContentValue::Mapping(_) => write!(f, "mapping"),
            ContentValue::Other => write!(f, "scalar"),
        }
    }
}

impl From<serde_json::Value> for ContentValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(s) => ContentValue::String(s),
            Value::Array(items) => {
                ContentValue::Sequence(items.into_iter().map(ContentValue::from).collect())
            }
            Value::Object(map) => ContentValue::Mapping(
                map.into_iter()
                    .map(|(key, val)| (key, ContentValue::from(val)))
                    .collect(),
            ),
            Value::Null | Value::Bool(_) | Value::Number(_) => ContentValue::Other,
        }
    }
}

impl From<serde_yaml::Value> for ContentValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::String(s) => ContentValue::String(s),
            Value::Sequence(items) => {
                ContentValue::Sequence(items.into_iter().map(ContentValue::from).collect())
            }
            Value::Mapping(map) => ContentValue::Mapping(
                map.into_iter()
                    // YAML allows non-string keys (`1: one`, `true: yes`); they can
                    // never be tagged, so the whole entry is dropped.
                    .filter_map(|(key, val)| match key {
                        Value::String(key) => Some((key, ContentValue::from(val))),
                        _ => None,
                    })
                    .collect(),
            ),
            // Custom tags (`!include foo.yaml`) are resolved by the document layer;
            // here only the tagged payload is kept.
            Value::Tagged(tagged) => ContentValue::from(tagged.value),
            Value::Null | Value::Bool(_) | Value::Number(_) => ContentValue::Other,
        }
    }
}
