//! Locale resolution over registered translation overrides.
//!
//! Every registered pattern is a regular expression searched (not anchored) in
//! the requested locale. All matching patterns contribute their translations.
//!
//! ## Merge order
//!
//! Matching patterns are applied in registration order, and a later pattern
//! overwrites an earlier one for the same message:
//!
//! ```text
//! "(es|fr)" -> {foo: foobar}
//! "es"      -> {fuz: ball}
//! "fr"      -> {bar: bell}
//!
//! get_translations("es") == {foo: foobar, fuz: ball}
//! get_translations("en") == {}
//! ```

use indexmap::IndexMap;
use tracing::debug;

use super::store::{LocalePattern, MessageStore};

impl MessageStore {
    /// Flat message → translation map for `locale`.
    ///
    /// A locale that matches no pattern yields an empty map.
    pub fn get_translations(&self, locale: &str) -> IndexMap<String, String> {
        let mut merged = IndexMap::new();
        for entry in self.matching_patterns(locale) {
            for (message, translated) in &entry.translations {
                merged.insert(message.clone(), translated.clone());
            }
        }
        debug!(locale, count = merged.len(), "resolved translations");
        merged
    }

    /// Patterns matching `locale`, in registration order.
    pub fn matching_patterns<'a>(
        &'a self,
        locale: &'a str,
    ) -> impl Iterator<Item = &'a LocalePattern> + 'a {
        self.patterns
            .values()
            .filter(move |entry| entry.regex.is_match(locale))
    }
}
