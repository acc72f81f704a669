use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result, anyhow};
use regex::Regex;

use crate::core::ContentValue;

/// Front matter boundary: a line of three or more dashes.
static BOUNDARY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)^-{3,}$").unwrap());

/// How a content file is turned into a [`ContentValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Whole file is YAML (`.yaml`, `.yml`).
    Yaml,
    /// Whole file is JSON (`.json`).
    Json,
    /// Only the YAML front matter is structured (`.md`, `.html`).
    FrontMatter,
}

impl DocumentKind {
    /// Pick the document kind from a file extension.
    ///
    /// Examples:
    /// - "pages/index.yaml" -> Some(Yaml)
    /// - "posts/hello.md" -> Some(FrontMatter)
    /// - "assets/logo.png" -> None
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Some(DocumentKind::Yaml),
            Some("json") => Some(DocumentKind::Json),
            Some("md" | "html" | "htm") => Some(DocumentKind::FrontMatter),
            _ => None,
        }
    }
}

/// Split a document into its front matter and body.
///
/// Front matter exists only when the boundary splits the text into exactly three
/// parts; both parts are trimmed. Otherwise the whole trimmed text is the body.
pub fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let parts: Vec<&str> = BOUNDARY_REGEX.split(content).collect();
    if parts.len() == 3 {
        (Some(parts[1].trim()), parts[2].trim())
    } else {
        (None, content.trim())
    }
}

/// Parse document text into content.
///
/// `name` is only used to label errors.
pub fn parse_content(content: &str, kind: DocumentKind, name: &str) -> Result<ContentValue> {
    let value = match kind {
        DocumentKind::Json => {
            let json: serde_json::Value = serde_json::from_str(content)
                .map_err(|e| anyhow!("Error parsing {}: {}", name, e))?;
            ContentValue::from(json)
        }
        DocumentKind::Yaml => parse_yaml(content, name)?,
        DocumentKind::FrontMatter => match split_front_matter(content) {
            (Some(front_matter), _) if !front_matter.is_empty() => {
                parse_yaml(front_matter, name)?
            }
            _ => ContentValue::empty_mapping(),
        },
    };
    Ok(value)
}

fn parse_yaml(content: &str, name: &str) -> Result<ContentValue> {
    // An empty document carries nothing to extract.
    if content.trim().is_empty() {
        return Ok(ContentValue::Other);
    }
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| anyhow!("Error parsing {}: {}", name, e))?;
    Ok(ContentValue::from(yaml))
}

/// Read and parse a content file, picking the parser from its extension.
pub fn parse_content_file(path: &Path) -> Result<ContentValue> {
    let name = path.to_string_lossy();
    let kind = DocumentKind::from_path(path)
        .with_context(|| format!("Unsupported content file: {}", name))?;
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", name))?;
    parse_content(&content, kind, &name)
}
