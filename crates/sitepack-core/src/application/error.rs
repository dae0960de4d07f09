//! Application layer errors.
//!
//! These errors represent failures in orchestration, not rendering rules.
//! Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A file could not be read. Fatal only where the caller says so.
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    /// The output file could not be written.
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// A required input (dist directory, built index page) is absent.
    #[error("{what} not found at {path}")]
    MissingInput { what: &'static str, path: PathBuf },

    /// In-memory adapter state is unusable (lock poisoned).
    #[error("Filesystem state is unavailable")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ReadFailed { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file is readable and UTF-8 encoded".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the root directory exists".into(),
            ],
            Self::MissingInput { path, .. } => vec![
                format!("Nothing found at: {}", path.display()),
                "Run your bundler first: npm run build".into(),
                "Or point at the build output with --dist".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingInput { .. } => ErrorCategory::NotFound,
            Self::ReadFailed { .. } | Self::WriteFailed { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
