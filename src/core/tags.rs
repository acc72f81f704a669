//! Tagging grammar for mapping keys.
//!
//! A mapping key marks its value as translatable by ending with [`EXTRACT_MARKER`]:
//!
//! ```yaml
//! title@: Welcome
//! title@#: Shown as the page heading.
//! ```
//!
//! The sibling key formed by appending [`COMMENT_MARKER`] carries the author comment
//! for whatever the tagged key extracts. The short form without the extraction
//! marker (`title#`) is accepted too. Everything before the trailing marker is
//! opaque, so `title@fr@` is simply a tagged key.

/// Trailing character that marks a key's value as extractable.
pub const EXTRACT_MARKER: char = '@';

/// Trailing character that forms the comment key for a sibling key.
pub const COMMENT_MARKER: char = '#';

/// Returns true if the key's value should be collected as messages.
///
/// Comment keys are never tagged, even when their text would otherwise qualify.
pub fn is_tagged(key: &str) -> bool {
    key.ends_with(EXTRACT_MARKER)
}

/// Returns true if the key only carries a comment for a sibling key.
pub fn is_comment_key(key: &str) -> bool {
    key.ends_with(COMMENT_MARKER)
}

/// Builds the sibling key holding the comment for `key`.
///
/// Examples:
/// - `"title@"` -> `"title@#"`
/// - `"items"` -> `"items#"`
pub fn comment_key_for(key: &str) -> String {
    let mut comment_key = String::with_capacity(key.len() + COMMENT_MARKER.len_utf8());
    comment_key.push_str(key);
    comment_key.push(COMMENT_MARKER);
    comment_key
}

/// Sibling keys that may hold the comment for `key`, in lookup order.
///
/// Examples:
/// - `"title@"` -> `["title@#", "title#"]`
/// - `"items"` -> `["items#"]`
pub fn comment_keys_for(key: &str) -> Vec<String> {
    let mut keys = vec![comment_key_for(key)];
    if let Some(base) = key.strip_suffix(EXTRACT_MARKER) {
        keys.push(comment_key_for(base));
    }
    keys
}
