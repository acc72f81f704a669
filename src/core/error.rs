use thiserror::Error;

/// Errors raised while registering translation overrides.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The override has no base message to anchor it.
    #[error("translation for pattern '{pattern}' has no base message")]
    MissingBase { pattern: String },

    /// The locale pattern is not a valid regular expression.
    #[error("invalid locale pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
