//! # Tree Walker
//!
//! Read-only access to a rounds tree, shared by the validator, the
//! structural checker, the aggregator and the round listing so that path
//! construction and record loading follow one set of rules:
//!
//! ```text
//! <root>/<round>/round.json
//! <root>/<round>/<category>/cat.json
//! <root>/<round>/<category>/<image>
//! ```
//!
//! Round enumeration is sorted by directory name, so reports are stable
//! across runs.

use std::path::{Path, PathBuf};

use serde_json::Value;

use trivia_core::{CategoryRecord, RoundRecord, CATEGORY_RECORD_FILE, ROUND_RECORD_FILE};

use crate::error::{ContentError, ContentResult, LoadError};

/// A rounds directory.
#[derive(Debug, Clone)]
pub struct ContentTree {
    root: PathBuf,
}

impl ContentTree {
    /// Open a rounds directory.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::RootNotFound`] if `root` is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> ContentResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ContentError::RootNotFound { path: root });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All immediate subdirectories, sorted by name.
    pub fn rounds(&self) -> ContentResult<Vec<RoundDir>> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| ContentError::ReadDir {
            path: self.root.clone(),
            source,
        })?;

        let mut rounds = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(dir = %self.root.display(), error = %e, "failed to read directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let id = entry.file_name().to_string_lossy().into_owned();
            rounds.push(RoundDir { id, path });
        }
        rounds.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(rounds)
    }

    /// The round directory with the given id. Existence is not checked.
    pub fn round(&self, id: &str) -> RoundDir {
        RoundDir {
            id: id.to_string(),
            path: self.root.join(id),
        }
    }
}

/// One round directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundDir {
    /// Directory name, used as the round identifier.
    pub id: String,
    pub path: PathBuf,
}

impl RoundDir {
    /// A round addressed directly by path (single-round validation).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::RoundNotFound`] if `path` does not exist.
    pub fn from_path(path: impl Into<PathBuf>) -> ContentResult<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(ContentError::RoundNotFound { path });
        }
        let id = path
            .canonicalize()
            .ok()
            .as_deref()
            .and_then(Path::file_name)
            .or_else(|| path.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { id, path })
    }

    pub fn record_path(&self) -> PathBuf {
        self.path.join(ROUND_RECORD_FILE)
    }

    /// Load and decode `round.json`.
    pub fn load_record(&self) -> Result<RoundRecord, LoadError> {
        let document = load_json(&self.record_path(), ROUND_RECORD_FILE)?;
        Ok(RoundRecord::from_document(document)?)
    }

    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.path.join(category)
    }

    pub fn category_record_path(&self, category: &str) -> PathBuf {
        self.category_dir(category).join(CATEGORY_RECORD_FILE)
    }

    /// True if the category directory exists.
    pub fn has_category_dir(&self, category: &str) -> bool {
        self.category_dir(category).is_dir()
    }

    /// Load and decode a category's `cat.json`.
    pub fn load_category(&self, category: &str) -> Result<CategoryRecord, LoadError> {
        let document = load_json(&self.category_record_path(category), CATEGORY_RECORD_FILE)?;
        Ok(CategoryRecord::from_document(document)?)
    }

    /// Names of the regular files directly inside the round directory,
    /// sorted.
    pub fn root_files(&self) -> std::io::Result<Vec<String>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
        files.sort();
        Ok(files)
    }
}

/// True if `name` can be joined onto a directory without leaving it:
/// non-empty, no path separators, not `.` or `..`.
pub fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && !has_separator(name) && name != "." && name != ".."
}

/// True if `name` contains a `/` or `\`.
pub fn has_separator(name: &str) -> bool {
    name.contains('/') || name.contains('\\')
}

fn load_json(path: &Path, file: &'static str) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::Missing {
                file,
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                file,
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    serde_json::from_str(&content).map_err(|e| LoadError::Malformed {
        file,
        path: path.to_path_buf(),
        source: e,
    })
}
