//! Errors that end a `sitepack` run, and how they reach the terminal.
//!
//! Recoverable problems (an unreadable source file, a missing asset) never
//! become a [`CliError`]; commands report those and carry on.

use std::error::Error;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use sitepack_core::error::{ErrorCategory as CoreCategory, SitepackError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{0}")]
    Core(#[from] SitepackError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// What went wrong, from the user's side. Decides the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad flags or an invalid layout: exit 2.
    UserError,
    /// A required input is absent: exit 3.
    NotFound,
    /// A configuration file or variable did not parse: exit 4.
    Configuration,
    /// Anything else, including a failed write: exit 1.
    Internal,
}

impl ErrorCategory {
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

impl CliError {
    /// Startup configuration failure; the `anyhow` chain becomes the source.
    pub fn config(err: anyhow::Error) -> Self {
        Self::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                "Check sitepack.toml in the project root, or the file passed with --config".into(),
                "Check SITEPACK_* environment variables".into(),
                "Print the effective configuration: sitepack config list".into(),
            ],
            Self::Core(core_err) => core_err.suggestions(),
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Error block for stderr: message, cause chain when `verbose`, then
    /// suggestions. `color` switches ANSI styling on.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| {
            if color {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };
        let alarm = Style::new().red().bold();

        let mut out = String::new();
        if color {
            out.push_str(&format!(
                "\n{} {}\n\n",
                paint("\u{2717}", alarm),
                paint("Error:", alarm)
            ));
            out.push_str(&format!("  {}\n", paint(&self.to_string(), Style::new().red())));
        } else {
            out.push_str(&format!("\nError: {self}\n"));
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = if color {
                    format!("  {} {}", "\u{2192}".dimmed(), err.to_string().dimmed())
                } else {
                    format!("  Caused by: {err}")
                };
                out.push_str(&line);
                out.push('\n');
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let heading = paint("Suggestions:", Style::new().yellow().bold());
            out.push_str(&format!("\n{heading}\n"));
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push('\n');
            out.push_str(&paint("Use -v / --verbose for more details.", Style::new().dimmed()));
            out.push('\n');
        }

        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(error = %self, "Run failed")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self, "Run failed")
            }
        }

        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "Underlying error");
        }
    }
}

/// Attach a context message while turning a foreign error into [`CliError`].
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, SitepackError> {
    /// Core errors name their own paths; the context is only logged.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| {
            let context: String = f().into();
            tracing::debug!(%context, "Core operation failed");
            CliError::Core(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use sitepack_core::{application::ApplicationError, domain::DomainError};

    use super::*;

    fn write_failed() -> CliError {
        CliError::Core(
            ApplicationError::WriteFailed {
                path: PathBuf::from("/app/standalone.html"),
                reason: "Permission denied".into(),
            }
            .into(),
        )
    }

    fn missing_dist() -> CliError {
        CliError::Core(
            ApplicationError::MissingInput {
                what: "dist directory",
                path: PathBuf::from("/app/dist"),
            }
            .into(),
        )
    }

    #[test]
    fn exit_codes_follow_category() {
        assert_eq!(write_failed().exit_code(), 1);
        assert_eq!(missing_dist().exit_code(), 3);
        assert_eq!(
            CliError::Core(DomainError::InvalidLayout("x".into()).into()).exit_code(),
            2
        );
        assert_eq!(
            CliError::config(anyhow::anyhow!("bad toml")).exit_code(),
            4
        );
        assert_eq!(
            CliError::from(io::Error::new(io::ErrorKind::Other, "e")).exit_code(),
            1
        );
    }

    #[test]
    fn missing_dist_suggests_build() {
        assert!(
            missing_dist()
                .suggestions()
                .iter()
                .any(|s| s.contains("npm run build"))
        );
    }

    #[test]
    fn plain_render_has_header_and_hint() {
        let s = write_failed().render(false, false);
        assert!(s.contains("Error:"));
        assert!(s.contains("standalone.html"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_shows_cause_and_omits_hint() {
        let err = CliError::config(anyhow::anyhow!("expected a table"));
        let s = err.render(true, false);
        assert!(s.contains("Caused by: expected a table"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn colored_render_uses_ansi() {
        let s = missing_dist().render(false, true);
        assert!(s.contains('\u{1b}'));
        assert!(s.contains("dist"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "writing inspect output");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
