use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::FileCategory;

/// One source file as read from disk. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    category: FileCategory,
    content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, category: FileCategory, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            category,
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn category(&self) -> FileCategory {
        self.category
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Base name shown in the section banner.
    pub fn label(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// A source file that could not be read.
///
/// Recoverable: the file still gets a section, with empty content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for ReadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error reading {}: {}", self.path.display(), self.reason)
    }
}
