use std::collections::BTreeSet;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::content::ContentValue;
use super::error::CatalogError;
use super::walker::{ExtractedMessage, collect_messages};

/// Provenance accumulated for a single message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MessageEntry {
    /// Every source location the message was seen at.
    pub locations: BTreeSet<String>,
    /// Author comments in discovery order, duplicates kept.
    pub comments: Vec<String>,
}

/// Translations registered under one locale pattern.
#[derive(Debug, Clone)]
pub struct LocalePattern {
    pub(super) regex: Regex,
    pub(super) translations: IndexMap<String, String>,
}

impl LocalePattern {
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn translations(&self) -> &IndexMap<String, String> {
        &self.translations
    }
}

/// Catalog of extracted messages and locale-scoped overrides for one session.
///
/// The store is append-only: messages and translations are never removed.
///
/// # Example
///
/// ```
/// use glean::core::MessageStore;
///
/// let mut store = MessageStore::new();
/// store.add_message("Welcome", Some("/content/index.yaml"), Some("Page title"));
/// store.add_translation("^fr", Some("Welcome"), "Bienvenue").unwrap();
///
/// assert!(store.contains("Welcome"));
/// assert_eq!(store.get_translations("fr_CA")["Welcome"], "Bienvenue");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: IndexMap<String, MessageEntry>,
    pub(super) patterns: IndexMap<String, LocalePattern>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message, unioning its location and appending its comment.
    pub fn add_message(&mut self, message: &str, location: Option<&str>, comment: Option<&str>) {
        let entry = self.messages.entry(message.to_string()).or_default();
        if let Some(location) = location {
            entry.locations.insert(location.to_string());
        }
        if let Some(comment) = comment {
            entry.comments.push(comment.to_string());
        }
    }

    /// Walk `value` and record every tagged string found in it.
    ///
    /// All messages are collected before any is recorded, so the store only ever
    /// sees a complete walk. Returns the number of occurrences recorded.
    pub fn extract_object(&mut self, value: &ContentValue, source: Option<&str>) -> usize {
        let found = collect_messages(value, source);
        self.commit(found)
    }

    /// Record messages collected by a previous walk.
    pub fn commit(&mut self, found: Vec<ExtractedMessage>) -> usize {
        let count = found.len();
        for ExtractedMessage {
            message,
            location,
            comment,
        } in found
        {
            self.add_message(&message, location.as_deref(), comment.as_deref());
        }
        debug!(count, total = self.messages.len(), "committed messages");
        count
    }

    /// Distinct messages in first-discovery order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn get(&self, message: &str) -> Option<&MessageEntry> {
        self.messages.get(message)
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.contains_key(message)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &MessageEntry)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Register `translated` as the override for `message` in locales matching `pattern`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::MissingBase`] if `message` is absent or empty. This is
    ///   checked before anything else.
    /// - [`CatalogError::InvalidPattern`] if `pattern` is not a valid regex.
    ///
    /// The store is left untouched on error.
    pub fn add_translation(
        &mut self,
        pattern: &str,
        message: Option<&str>,
        translated: &str,
    ) -> Result<(), CatalogError> {
        let message = match message {
            Some(m) if !m.is_empty() => m,
            _ => {
                return Err(CatalogError::MissingBase {
                    pattern: pattern.to_string(),
                });
            }
        };

        if !self.patterns.contains_key(pattern) {
            let regex = Regex::new(pattern).map_err(|source| CatalogError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            self.patterns.insert(
                pattern.to_string(),
                LocalePattern {
                    regex,
                    translations: IndexMap::new(),
                },
            );
        }

        if let Some(entry) = self.patterns.get_mut(pattern) {
            entry
                .translations
                .insert(message.to_string(), translated.to_string());
        }
        Ok(())
    }

    /// Registered locale patterns in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &LocalePattern> {
        self.patterns.values()
    }

    /// Fold a privately built store into this one.
    ///
    /// Messages keep this store's order, with new ones appended; locations are
    /// unioned and comments appended. Translations are re-registered in `other`'s
    /// order, so on conflict `other` wins.
    pub fn merge(&mut self, other: MessageStore) {
        for (message, entry) in other.messages {
            let target = self.messages.entry(message).or_default();
            target.locations.extend(entry.locations);
            target.comments.extend(entry.comments);
        }
        for (pattern, incoming) in other.patterns {
            match self.patterns.get_mut(&pattern) {
                Some(existing) => existing.translations.extend(incoming.translations),
                None => {
                    self.patterns.insert(pattern, incoming);
                }
            }
        }
    }
}
