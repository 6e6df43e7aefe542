//
//  config.rs
//  modgraph
//

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{ModgraphError, Result};
use crate::graph::MatchStrategy;

/// File name looked up in the scanned root when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = "modgraph.toml";

/// Top-level modgraph configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub resolve: ResolveConfig,
}

/// Which files under the root count as modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Source file extensions, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory or file names that are never descended into. Defaults
    /// cover tool and cache directories only; `build`, `dist`, `venv` and
    /// the like can hold real packages and must be listed explicitly.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    /// Honor .gitignore / .ignore files while walking.
    #[serde(default)]
    pub respect_gitignore: bool,
    /// Descend into hidden files and directories.
    #[serde(default = "default_true")]
    pub include_hidden: bool,
    /// Follow symbolic links.
    #[serde(default)]
    pub follow_links: bool,
}

/// How import candidates are matched against discovered modules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default)]
    pub strategy: MatchStrategy,
}

fn default_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

fn default_exclude() -> Vec<String> {
    [
        "__pycache__",
        ".git",
        ".hg",
        ".svn",
        ".tox",
        ".mypy_cache",
        ".pytest_cache",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_true() -> bool {
    true
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
            respect_gitignore: false,
            include_hidden: true,
            follow_links: false,
        }
    }
}

impl DiscoveryConfig {
    /// Whether a file extension marks a source module.
    pub fn is_source_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    /// Whether a path component is on the exclusion list.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|e| e == name)
    }
}

impl Config {
    /// Load config from a TOML file. Read and parse failures are errors.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ModgraphError::ConfigRead(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ModgraphError::ConfigParse(path.to_path_buf(), e))
    }

    /// Load config from a TOML file, falling back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring invalid config file");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Resolve the effective config for a scan of `root`.
    ///
    /// An explicit path must load cleanly. Otherwise `<root>/modgraph.toml`
    /// is used when present, and defaults when not.
    pub fn for_root(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Ok(Self::load_or_default(&Self::default_path(root))),
        }
    }

    /// Location of the implicit config file for a root.
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }
}
