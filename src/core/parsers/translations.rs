use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use indexmap::IndexMap;

use super::document::DocumentKind;
use crate::core::MessageStore;

/// Override file layout: locale pattern -> (message -> translation).
pub type TranslationOverrides = IndexMap<String, IndexMap<String, String>>;

/// Parse override file text, keeping pattern and message order.
pub fn parse_translations(
    content: &str,
    kind: DocumentKind,
    name: &str,
) -> Result<TranslationOverrides> {
    let overrides = match kind {
        DocumentKind::Json => serde_json::from_str(content)
            .map_err(|e| anyhow!("Error parsing {}: {}", name, e))?,
        DocumentKind::Yaml => serde_yaml::from_str(content)
            .map_err(|e| anyhow!("Error parsing {}: {}", name, e))?,
        DocumentKind::FrontMatter => {
            anyhow::bail!("Translations file must be JSON or YAML: {}", name)
        }
    };
    Ok(overrides)
}

/// Register every override in `overrides` with the store, in file order.
///
/// Stops at the first rejected override.
pub fn register_translations(
    store: &mut MessageStore,
    overrides: &TranslationOverrides,
) -> Result<usize> {
    let mut count = 0;
    for (pattern, translations) in overrides {
        for (message, translated) in translations {
            store
                .add_translation(pattern, Some(message.as_str()), translated)
                .with_context(|| format!("Failed to register translation for \"{}\"", message))?;
            count += 1;
        }
    }
    Ok(count)
}

/// Load an override file and register its contents.
pub fn load_translations_file(store: &mut MessageStore, path: &Path) -> Result<usize> {
    let name = path.to_string_lossy();
    let kind = DocumentKind::from_path(path)
        .with_context(|| format!("Unsupported translations file: {}", name))?;
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", name))?;
    let overrides = parse_translations(&content, kind, &name)?;
    register_translations(store, &overrides)
}
