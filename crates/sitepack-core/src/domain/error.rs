// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid source layout: {0}")]
    InvalidLayout(String),

    #[error("Section '{label}' ({category}) is out of order")]
    OrderingViolated { label: String, category: String },

    // ========================================================================
    // Rendering
    // ========================================================================
    #[error("Failed to render page: {0}")]
    PageRender(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLayout(msg) => vec![
                "Check the [layout] section of your configuration".into(),
                format!("Details: {}", msg),
                "Directory and file names must be relative to the root".into(),
            ],
            _ => vec!["This appears to be a bug in Sitepack, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidLayout(_) => ErrorCategory::Validation,
            Self::OrderingViolated { .. } | Self::PageRender(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
