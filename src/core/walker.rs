//! Tree walker collecting tagged strings from parsed content.
//!
//! Tagging is key-local:
//!
//! - A **mapping** recomputes the context for every entry from the entry's own key,
//!   discarding whatever the parent passed down.
//! - A **sequence** hands its context to every element unchanged.
//! - A **string** is collected only when the inherited context is tagged.
//!
//! ```yaml
//! title@: Welcome          # collected
//! items@: [one, two]       # both collected
//! nested@:
//!   inner: ignored         # mapping resets tagging, not collected
//! ```

use tracing::trace;

use super::content::ContentValue;
use super::tags::{comment_keys_for, is_comment_key, is_tagged};

/// A message found during a walk, before it is committed to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMessage {
    pub message: String,
    pub location: Option<String>,
    pub comment: Option<String>,
}

/// Context inherited by a value from the key (or sequence) enclosing it.
#[derive(Debug, Clone, Copy, Default)]
struct WalkContext<'a> {
    is_tagged: bool,
    comment: Option<&'a str>,
    source: Option<&'a str>,
}

/// Collect every tagged string in `value`.
///
/// The walk is total: shapes that cannot carry messages are skipped, never rejected.
/// Messages are returned in discovery order, duplicates included.
pub fn collect_messages(value: &ContentValue, source: Option<&str>) -> Vec<ExtractedMessage> {
    let mut found = Vec::new();
    let ctx = WalkContext {
        source,
        ..WalkContext::default()
    };
    walk(value, ctx, &mut found);
    found
}

fn walk<'a>(value: &'a ContentValue, ctx: WalkContext<'a>, found: &mut Vec<ExtractedMessage>) {
    match value {
        ContentValue::String(s) => {
            if ctx.is_tagged {
                trace!(message = %s, source = ?ctx.source, "tagged string");
                found.push(ExtractedMessage {
                    message: s.clone(),
                    location: ctx.source.map(str::to_string),
                    comment: ctx.comment.map(str::to_string),
                });
            }
        }
        ContentValue::Sequence(items) => {
            for item in items {
                walk(item, ctx, found);
            }
        }
        ContentValue::Mapping(map) => {
            for (key, val) in map {
                // Comment keys are metadata for their sibling
                if is_comment_key(key) {
                    continue;
                }
                let comment = comment_keys_for(key)
                    .iter()
                    .find_map(|comment_key| map.get(comment_key))
                    .and_then(ContentValue::as_str);
                let entry_ctx = WalkContext {
                    is_tagged: is_tagged(key),
                    comment,
                    source: ctx.source,
                };
                walk(val, entry_ctx, found);
            }
        }
        ContentValue::Other => {}
    }
}
