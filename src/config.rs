use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".gleanrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignores: Vec<String>,
    /// File or directory globs, relative to the content root.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    /// Relative to the directory holding the config file.
    #[serde(default = "default_content_root")]
    pub content_root: String,
    /// Locale override file (JSON or YAML), relative to the directory holding the
    /// config file.
    #[serde(default)]
    pub translations: Option<String>,
}

fn default_content_root() -> String {
    "./content".to_string()
}

/// Every content file kind glean can parse.
pub fn default_includes() -> Vec<String> {
    ["**/*.yaml", "**/*.yml", "**/*.md", "**/*.html", "**/*.json"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: default_includes(),
            content_root: default_content_root(),
            translations: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Look for the config file in `start_dir`, then in each parent directory.
///
/// The search stops at the first directory containing `.git`.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let config_path = start_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Some(config_path);
    }
    if start_dir.join(".git").exists() {
        return None;
    }

    // A relative start such as "." has no parents of its own.
    let mut current = start_dir.canonicalize().ok()?;
    while current.pop() {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
    }
    None
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory that relative paths in the config are resolved against: the one
    /// holding the config file, or the start directory when using defaults.
    pub config_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let config_dir = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                config_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            config_dir: start_dir.to_path_buf(),
        }),
    }
}
