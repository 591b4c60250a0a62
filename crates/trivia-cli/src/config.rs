//! CLI configuration.
//!
//! Resolved in layers, later layers winning:
//!
//! 1. Built-in defaults (`rounds/`, `manifest.json`, default header).
//! 2. YAML file: `--config <FILE>`, else `trivia.yaml` at the repository
//!    root when present.
//! 3. Environment: `TRIVIA_ROUNDS_DIR`, `TRIVIA_MANIFEST_PATH`.
//! 4. Explicit subcommand arguments (applied by each handler).
//!
//! ```yaml
//! rounds_dir: rounds
//! manifest_path: manifest.json
//! manifest:
//!   name: Trivia Content Repository
//!   version: 1.2.0
//!   contributors:
//!     - name: Ada
//!       github: ada
//! validation:
//!   check_cat_matches: false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use trivia_content::{ManifestHeader, ValidationOptions, MANIFEST_FILE, ROUNDS_DIR};

/// Default config file name, looked up at the repository root.
pub const CONFIG_FILE: &str = "trivia.yaml";

/// Overrides the rounds directory.
pub const ENV_ROUNDS_DIR: &str = "TRIVIA_ROUNDS_DIR";

/// Overrides the manifest output path.
pub const ENV_MANIFEST_PATH: &str = "TRIVIA_MANIFEST_PATH";

/// Resolved configuration for one CLI run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriviaConfig {
    /// Rounds directory, relative paths taken from the repository root.
    pub rounds_dir: PathBuf,
    /// Manifest output path, relative paths taken from the repository root.
    pub manifest_path: PathBuf,
    /// Static manifest metadata.
    pub manifest: ManifestHeader,
    pub validation: ValidationOptions,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            rounds_dir: PathBuf::from(ROUNDS_DIR),
            manifest_path: PathBuf::from(MANIFEST_FILE),
            manifest: ManifestHeader::default(),
            validation: ValidationOptions::default(),
        }
    }
}

impl TriviaConfig {
    /// Load the configuration for a run rooted at `repo_root`.
    ///
    /// An explicit `config_file` must exist. Without one, `trivia.yaml` in
    /// the repository root is used if present.
    pub fn load(config_file: Option<&Path>, repo_root: &Path) -> Result<Self, ConfigError> {
        let mut config = match config_file {
            Some(path) => Self::from_yaml_file(path)?,
            None => {
                let default_path = repo_root.join(CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_yaml_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|var| std::env::var(var).ok());
        Ok(config)
    }

    /// Parse a YAML config file. Omitted keys keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    /// Apply environment overrides. Empty values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(ENV_ROUNDS_DIR).filter(|v| !v.is_empty()) {
            self.rounds_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup(ENV_MANIFEST_PATH).filter(|v| !v.is_empty()) {
            self.manifest_path = PathBuf::from(path);
        }
    }

    /// The configured rounds directory, anchored at `repo_root`.
    pub fn rounds_dir_in(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.rounds_dir)
    }

    /// The configured manifest path, anchored at `repo_root`.
    pub fn manifest_path_in(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.manifest_path)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
