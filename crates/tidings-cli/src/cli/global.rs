//! Flags shared by every subcommand.

use std::path::PathBuf;

use clap::{Args, ValueEnum, builder::FalseyValueParser};

/// Flattened into [`super::Cli`]; every flag here is `global`.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// `-v` logs stored templates, `-vv` adds rule checks and dropped
    /// language rows, `-vvv` is everything.
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "More log output on stderr (repeatable)",
        long_help = "More log output on stderr:
    (none)  rejected templates only
    -v      stored templates
    -vv     rule checks, dropped language rows
    -vvv    everything"
    )]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and requested data"
    )]
    pub quiet: bool,

    /// Any non-falsey `NO_COLOR` value counts (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Never emit ANSI colours"
    )]
    pub no_color: bool,

    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    /// `auto` defers to `output.format` in the config, then to TTY detection.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help = "How results are written to stdout"
    )]
    pub output_format: OutputFormat,
}

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Coloured, with status symbols.
    Human,
    /// No colours; stable for scripts.
    Plain,
    Json,
}
