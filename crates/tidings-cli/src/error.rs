//! Everything that can end a `tidings` run early.
//!
//! Each variant knows its hints for the user and the process exit code it
//! maps to; `main` only renders and returns.

use std::error::Error;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use tidings_core::error::{ErrorCategory as CoreCategory, TidingsError};

use crate::config::AppConfig;

pub type CliResult<T> = Result<T, CliError>;

type BoxedSource = Box<dyn Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum CliError {
    /// No fixture file on the command line or in `defaults.fixtures`.
    #[error("No fixture file given")]
    MissingFixtures,

    /// `tidings check` found templates that break the rules.
    #[error("{count} template(s) rejected, first: {first}")]
    TemplatesRejected { count: usize, first: TidingsError },

    #[error("Bad configuration: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("{0}")]
    Core(#[from] TidingsError),

    #[error("Could not write output: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        let message = source.to_string();
        Self::IoError { message, source }
    }
}

impl CliError {
    pub fn config(message: impl Into<String>, source: impl Error + Send + Sync + 'static) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn unknown_config_key(key: &str) -> Self {
        Self::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingFixtures => vec![
                "Pass the fixture file: tidings check fixtures.toml".into(),
                "Or set `defaults.fixtures` in the config file".into(),
                format!("Config file: {}", AppConfig::config_path().display()),
            ],
            Self::TemplatesRejected { first, .. } => first.suggestions(),
            Self::ConfigError { .. } => vec![
                "Known keys: defaults.lang, defaults.fixtures, output.no_color, output.format"
                    .into(),
                "Show what was loaded with `tidings config list`".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check that stdout is writable".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingFixtures => ErrorCategory::UserError,
            Self::TemplatesRejected { first: core, .. } | Self::Core(core) => {
                core.category().into()
            }
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// 0 is success; see [`ErrorCategory`] for the rest.
    pub fn exit_code(&self) -> u8 {
        self.category() as u8
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let mut out = String::new();
        if color {
            let _ = writeln!(out, "\n{} {}", "\u{2717} Error:".red().bold(), self.red());
        } else {
            let _ = writeln!(out, "\nError: {self}");
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                if color {
                    let _ = writeln!(out, "  {}", format!("caused by: {err}").dimmed());
                } else {
                    let _ = writeln!(out, "  caused by: {err}");
                }
                cause = err.source();
            }
        }

        let hints = self.suggestions();
        if !hints.is_empty() {
            if color {
                let _ = writeln!(out, "\n{}", "Hints:".yellow().bold());
            } else {
                out.push_str("\nHints:\n");
            }
            for hint in &hints {
                let _ = writeln!(out, "  - {hint}");
            }
        }

        if !verbose {
            let tip = "Run again with -v for the underlying cause.";
            if color {
                let _ = writeln!(out, "\n{}", tip.dimmed());
            } else {
                let _ = writeln!(out, "\n{tip}");
            }
        }

        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(category = ?self.category(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(category = ?self.category(), "{self}")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "underlying cause");
        }
    }
}

/// Exit-code classes; the discriminant is the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCategory {
    Internal = 1,
    UserError = 2,
    NotFound = 3,
    Configuration = 4,
}

/// Rule violations are the caller's to fix, so they exit as user errors.
impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation | CoreCategory::Permission => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Internal => Self::Internal,
        }
    }
}
