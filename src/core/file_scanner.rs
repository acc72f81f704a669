use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::Pattern;
use tracing::warn;
use walkdir::WalkDir;

use super::parsers::document::DocumentKind;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning the content root.
pub struct ScanResult {
    /// Content files, sorted by path.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Include rules, matched against paths relative to the content root.
struct IncludeFilter {
    globs: Vec<Pattern>,
    dirs: Vec<PathBuf>,
}

impl IncludeFilter {
    fn new(base_dir: &Path, includes: &[String]) -> Self {
        let mut globs = Vec::new();
        let mut dirs = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                match Pattern::new(inc) {
                    Ok(pattern) => globs.push(pattern),
                    Err(e) => warn!("Invalid glob pattern '{}': {}", inc, e),
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    dirs.push(PathBuf::from(inc));
                } else {
                    warn!("Include path does not exist: {}", path.display());
                }
            }
        }
        Self { globs, dirs }
    }

    /// A file is included when a glob matches it or one of its parent directories,
    /// or when it lies under a literal include.
    fn matches(&self, relative: &Path) -> bool {
        let by_glob = relative
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .any(|p| self.globs.iter().any(|g| g.matches_path(p)));
        by_glob || self.dirs.iter().any(|dir| relative.starts_with(dir))
    }
}

/// Find every content file under `base_dir`.
///
/// `includes` holds file globs (`**/*.yaml`), directory globs (`sections/*`) or
/// literal directories, all relative to `base_dir`; an empty list scans the whole
/// root. `ignores` removes paths by literal prefix or glob pattern.
pub fn scan_files(base_dir: &Path, includes: &[String], ignore_patterns: &[String]) -> ScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => warn!("Invalid ignore pattern '{}': {}", p, e),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let include_filter = (!includes.is_empty()).then(|| IncludeFilter::new(base_dir, includes));

    for entry in WalkDir::new(base_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                warn!("Cannot access path: {}", e);
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if !path.is_file() || DocumentKind::from_path(path).is_none() {
            continue;
        }

        if let Some(filter) = &include_filter {
            let relative = path.strip_prefix(base_dir).unwrap_or(path);
            if !filter.matches(relative) {
                continue;
            }
        }

        files.insert(path_str.into());
    }

    if include_filter.is_some() && files.is_empty() {
        warn!(
            "No content files under {} matched includes: {}",
            base_dir.display(),
            includes.join(", ")
        );
    }

    ScanResult {
        files,
        skipped_count,
    }
}
