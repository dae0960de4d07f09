//! Unified error handling for Sitepack Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.
//!
//! Only *fatal* pipeline failures travel through [`SitepackError`]. A source
//! file that cannot be read is not an error at this level: it is recorded as a
//! [`ReadFailure`](crate::domain::ReadFailure) in the build report and the run
//! continues.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Sitepack Core operations.
#[derive(Debug, Error, Clone)]
pub enum SitepackError {
    /// Errors from the domain layer (invalid layout, rendering).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl SitepackError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type SitepackResult<T> = Result<T, SitepackError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn write_failure_is_internal() {
        let err: SitepackError = ApplicationError::WriteFailed {
            path: PathBuf::from("standalone.html"),
            reason: "disk full".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("standalone.html"));
    }

    #[test]
    fn invalid_layout_is_validation() {
        let err: SitepackError = DomainError::InvalidLayout("empty output file".into()).into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn missing_input_is_not_found() {
        let err: SitepackError = ApplicationError::MissingInput {
            what: "dist directory",
            path: PathBuf::from("dist"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("build")));
    }
}
