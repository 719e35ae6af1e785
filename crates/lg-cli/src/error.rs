//! CLI error type, exit codes and stderr rendering.

use std::error::Error;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use lg_core::error::{ErrorCategory as CoreCategory, LgError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A generator or name validation failed.
    #[error(transparent)]
    Core(#[from] LgError),

    /// `lg.toml`, `--config` or an `LG_*` variable could not be read.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// Writing to the terminal or reading the working directory failed.
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

/// How an error is presented and which exit code it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),
            Self::ConfigError { .. } => vec![
                "Check ./lg.toml or the file passed with --config".into(),
                "Check LG_* environment variables".into(),
            ],
            Self::IoError { .. } => vec!["Check file permissions".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// | Category               | Code |
    /// |------------------------|------|
    /// | Not found, internal    |  1   |
    /// | User error             |  2   |
    /// | Configuration          |  4   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Text printed to stderr: the message, the cause chain when `verbose`,
    /// then suggestions. ANSI styling only when `color` is set.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| {
            if color {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", Style::new().red().bold()),
            paint(&self.to_string(), Style::new().red())
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&paint(&format!("  Caused by: {err}"), Style::new().dimmed()));
                out.push('\n');
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push('\n');
            out.push_str(&paint("Suggestions:", Style::new().yellow().bold()));
            out.push('\n');
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
            ErrorCategory::UserError | ErrorCategory::NotFound => tracing::warn!(error = %self),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self)
            }
        }

        if matches!(self, Self::Core(core) if core.is_precondition()) {
            tracing::debug!("Stopped before any file was modified");
        }
    }
}

/// Attach a context message to `std::io` failures.
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

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use lg_core::{application::ApplicationError, domain::DomainError};

    use super::*;

    fn missing_target() -> CliError {
        CliError::Core(
            ApplicationError::TargetNotFound {
                path: PathBuf::from("/p/src/app/app.component.html"),
            }
            .into(),
        )
    }

    fn io_failure() -> CliError {
        CliError::IoError {
            message: "reading working directory".into(),
            source: io::Error::other("gone"),
        }
    }

    #[test]
    fn exit_codes_by_category() {
        let invalid_name = CliError::Core(
            DomainError::InvalidServiceName {
                name: "1x".into(),
                reason: "r".into(),
            }
            .into(),
        );
        let write_failure = CliError::Core(
            ApplicationError::FilesystemError {
                path: PathBuf::from("x"),
                reason: "denied".into(),
            }
            .into(),
        );
        let config = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };

        assert_eq!(missing_target().exit_code(), 1);
        assert_eq!(write_failure.exit_code(), 1);
        assert_eq!(io_failure().exit_code(), 1);
        assert_eq!(invalid_name.exit_code(), 2);
        assert_eq!(config.exit_code(), 4);
    }

    #[test]
    fn plain_render_names_the_missing_file() {
        let s = missing_target().render(false, false);
        assert!(s.contains("Error: File /p/src/app/app.component.html not found"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_shows_cause_and_omits_hint() {
        let s = io_failure().render(true, false);
        assert!(s.contains("Caused by: gone"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn colored_render_uses_ansi() {
        assert!(missing_target().render(false, true).contains('\u{1b}'));
    }

    #[test]
    fn into_cli_keeps_the_context_message() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        match result.with_cli_context(|| "reading working directory") {
            Err(CliError::IoError { message, .. }) => {
                assert_eq!(message, "reading working directory")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
