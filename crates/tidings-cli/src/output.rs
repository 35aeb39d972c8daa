//! Human, plain and JSON rendering of command results.

use std::io::{self, IsTerminal as _};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::{
    cli::global::{GlobalArgs, OutputFormat},
    config::AppConfig,
};

/// Writes command results to stdout in the resolved format.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(global: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins; `auto` falls through to the config, then to TTY detection.
        let requested = match global.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };

        let format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            format,
            quiet: global.quiet,
            no_color: global.no_color || config.output.no_color || format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Plain line on stdout. Dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Pretty JSON on stdout, written even under `--quiet`.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&rendered)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Success, msg)
    }

    /// Unlike the other status lines this one ignores `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Error, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            return self.term.write_line(text);
        }
        self.term.write_line(&text.cyan().bold().to_string())
    }

    fn status(&self, status: Status, msg: &str) -> io::Result<()> {
        if self.quiet && status != Status::Error {
            return Ok(());
        }
        let symbol = status.symbol();
        if self.no_color {
            return self.term.write_line(&format!("{symbol} {msg}"));
        }
        let painted = match status {
            Status::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Status::Error => format!("{} {}", symbol.red().bold(), msg.red()),
            Status::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Status::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
        };
        self.term.write_line(&painted)
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Error,
    Warning,
    Info,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Error => "\u{2717}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(format: OutputFormat, config: &AppConfig) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, config)
    }

    #[test]
    fn explicit_flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();

        assert!(!manager(OutputFormat::Plain, &config).is_json());
        assert!(manager(OutputFormat::Auto, &config).is_json());
    }

    #[test]
    fn unknown_config_format_falls_back_to_detection() {
        let mut config = AppConfig::default();
        config.output.format = "fancy".into();

        let out = manager(OutputFormat::Auto, &config);
        assert_ne!(out.format, OutputFormat::Auto);
        assert!(!out.is_json());
    }

    #[test]
    fn only_human_output_is_coloured() {
        let config = AppConfig::default();
        assert!(manager(OutputFormat::Human, &config).supports_color());
        assert!(!manager(OutputFormat::Plain, &config).supports_color());

        let mut no_color = AppConfig::default();
        no_color.output.no_color = true;
        assert!(!manager(OutputFormat::Human, &no_color).supports_color());
    }

    #[test]
    fn quiet_mode_still_writes_errors() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(out.print("hidden").is_ok());
        assert!(out.error("shown").is_ok());
    }
}
