use std::{
    collections::BTreeSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        ExtractedMessage, MessageStore, collect_messages,
        file_scanner::scan_files,
        parsers::{document::parse_content_file, translations::load_translations_file},
    },
};

/// A content file that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParseFailure {
    pub file_path: String,
    pub error: String,
}

/// Output of one extraction session.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Catalog with every discovered message and registered override.
    pub store: MessageStore,
    /// Files that failed to parse; their messages are absent from the store.
    pub parse_failures: Vec<ParseFailure>,
    /// Number of content files whose messages were committed.
    pub files_extracted: usize,
    /// Number of overrides registered from the translations file.
    pub translations_registered: usize,
}

/// Extraction session over a content corpus.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--content-root ./site`)
/// 2. `.gleanrc.json` config file
/// 3. Built-in defaults
pub struct ExtractContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving paths given on the command line).
    pub root_dir: PathBuf,

    /// Resolved content root directory.
    pub content_root: PathBuf,

    /// Resolved translations file, if one is configured.
    pub translations: Option<PathBuf>,

    /// Content files to extract, sorted by path.
    pub files: BTreeSet<String>,
}

impl ExtractContext {
    /// Create a new `ExtractContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Content root doesn't exist or is not a directory
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            info!("No .gleanrc.json found, using default configuration");
        }

        let config_dir = config_result.config_dir;
        let mut config = config_result.config;

        // Paths from the command line are relative to the root, paths from the
        // config file to the directory holding it.
        let content_root = match common_args.content_root {
            Some(ref content_root) => {
                config.content_root = content_root.to_string_lossy().to_string();
                resolve_under(&root_dir, &config.content_root)
            }
            None => resolve_under(&config_dir, &config.content_root),
        };
        let translations = match common_args.translations {
            Some(ref translations) => {
                config.translations = Some(translations.to_string_lossy().to_string());
                Some(resolve_under(&root_dir, &translations.to_string_lossy()))
            }
            None => config
                .translations
                .as_deref()
                .map(|p| resolve_under(&config_dir, p)),
        };

        if !content_root.exists() {
            anyhow::bail!(
                "Content root '{}' does not exist.\n\
                 Hint: Check your .gleanrc.json 'contentRoot' setting.",
                content_root.display()
            );
        }
        if !content_root.is_dir() {
            anyhow::bail!("'{}' is not a directory.", content_root.display());
        }

        let scan_result = scan_files(&content_root, &config.includes, &config.ignores);
        if scan_result.skipped_count > 0 {
            warn!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }
        debug!(files = scan_result.files.len(), root = %content_root.display(), "scanned content");

        Ok(Self {
            config,
            root_dir,
            content_root,
            translations,
            files: scan_result.files,
        })
    }

    /// Path of the configured translations file, if any.
    pub fn translations_path(&self) -> Option<&Path> {
        self.translations.as_deref()
    }

    /// Extract every content file into one store, then register overrides.
    ///
    /// Files are parsed and walked in parallel, each into its own buffer.
    /// Buffers are committed in path order so the catalog is deterministic.
    /// Unparseable files are reported in [`Extraction::parse_failures`].
    ///
    /// # Errors
    ///
    /// Returns error if the translations file cannot be read or one of its
    /// overrides is rejected.
    pub fn extract(&self) -> Result<Extraction> {
        let results: Vec<(String, Result<Vec<ExtractedMessage>>)> = self
            .files
            .par_iter()
            .map(|file_path| {
                let found = parse_content_file(Path::new(file_path)).map(|value| {
                    if value.is_empty_mapping() {
                        debug!(file = %file_path, "no front matter");
                    }
                    trace!(file = %file_path, shape = %value, "parsed");
                    collect_messages(&value, Some(file_path.as_str()))
                });
                (file_path.clone(), found)
            })
            .collect();

        let mut extraction = Extraction::default();
        for (file_path, result) in results {
            match result {
                Ok(found) => {
                    debug!(file = %file_path, count = found.len(), "extracted");
                    extraction.store.commit(found);
                    extraction.files_extracted += 1;
                }
                Err(e) => {
                    warn!("{} - {}", file_path, e);
                    extraction.parse_failures.push(ParseFailure {
                        file_path,
                        error: e.to_string(),
                    });
                }
            }
        }

        if let Some(path) = self.translations_path() {
            extraction.translations_registered =
                load_translations_file(&mut extraction.store, &path).with_context(|| {
                    anyhow!("Failed to load translations from {}", path.display())
                })?;
        }

        Ok(extraction)
    }
}

/// Resolve a configured path against `root_dir`.
fn resolve_under(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
