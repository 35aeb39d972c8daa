//! Command-line argument definitions (clap derive).
//!
//! Argument names, help text and value enums live here and nowhere else.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use tidings_core::domain::{ChannelId, ClientId, LangCode};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name     = "tidings",
    bin_name = "tidings",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Check notification templates against their sharing and language rules",
    long_about = "Tidings loads notification clients, channels and templates from a \
                  TOML fixture file, applies the template rules (ownership, sharing, \
                  channel senders, language rows) and answers sender and language \
                  lookups.",
    after_help = "EXAMPLES:\n\
        \x20 tidings check fixtures.toml\n\
        \x20 tidings list fixtures.toml --client client-a\n\
        \x20 tidings sender fixtures.toml --template \"OTP Template\" --channel email\n\
        \x20 tidings lang fixtures.toml --template \"OTP Template\" --lang ar",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a fixture file and report which templates pass the rules.
    #[command(
        about = "Validate every template in a fixture file",
        after_help = "EXAMPLES:\n\
            \x20 tidings check fixtures.toml\n\
            \x20 tidings check fixtures.toml --output-format json"
    )]
    Check(CheckArgs),

    #[command(
        visible_alias = "ls",
        about = "List stored templates",
        after_help = "EXAMPLES:\n\
            \x20 tidings list fixtures.toml\n\
            \x20 tidings list fixtures.toml --client client-a\n\
            \x20 tidings list fixtures.toml --format json"
    )]
    List(ListArgs),

    #[command(
        about = "Show the sender a template uses for a channel",
        after_help = "EXAMPLES:\n\
            \x20 tidings sender fixtures.toml --template \"OTP Template\" --channel email"
    )]
    Sender(SenderArgs),

    #[command(
        about = "Show a template's subject and content for a language",
        after_help = "EXAMPLES:\n\
            \x20 tidings lang fixtures.toml --template \"OTP Template\" --lang ar\n\
            \x20 tidings lang fixtures.toml --template \"OTP Template\"   # defaults.lang"
    )]
    Lang(LangArgs),

    #[command(
        about = "Print a shell completion script",
        after_help = "EXAMPLES:\n\
            \x20 tidings completions bash > ~/.local/share/bash-completion/completions/tidings\n\
            \x20 tidings completions zsh  > ~/.zfunc/_tidings\n\
            \x20 tidings completions fish > ~/.config/fish/completions/tidings.fish"
    )]
    Completions(CompletionsArgs),

    #[command(
        about = "Inspect the effective configuration",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tidings config get defaults.lang\n\
            \x20 tidings config list\n\
            \x20 tidings config path"
    )]
    Config(ConfigCommands),
}

// -- check --

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Fixture file. Falls back to `defaults.fixtures`.
    #[arg(value_name = "FIXTURES", help = "Fixture file (TOML)")]
    pub fixtures: Option<PathBuf>,
}

// -- list --

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(value_name = "FIXTURES", help = "Fixture file (TOML)")]
    pub fixtures: Option<PathBuf>,

    /// Only templates this client created or that are shared with it.
    #[arg(
        long = "client",
        value_name = "ID",
        help = "Show templates available to a client"
    )]
    pub client: Option<ClientId>,

    /// Overrides `--output-format` for this listing.
    #[arg(long = "format", value_enum, help = "Listing format")]
    pub format: Option<ListFormat>,
}

/// Output format for `tidings list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One block per template.
    Table,
    /// One title per line.
    List,
    /// JSON array.
    Json,
}

// -- sender --

#[derive(Debug, Args)]
pub struct SenderArgs {
    #[arg(value_name = "FIXTURES", help = "Fixture file (TOML)")]
    pub fixtures: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "template",
        value_name = "TITLE",
        help = "Template title"
    )]
    pub template: String,

    #[arg(
        long = "channel",
        value_name = "ID",
        help = "Notification channel id"
    )]
    pub channel: ChannelId,
}

// -- lang --

#[derive(Debug, Args)]
pub struct LangArgs {
    #[arg(value_name = "FIXTURES", help = "Fixture file (TOML)")]
    pub fixtures: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "template",
        value_name = "TITLE",
        help = "Template title"
    )]
    pub template: String,

    /// Falls back to `defaults.lang` when omitted.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "CODE",
        help = "Language code (e.g. en, ar)"
    )]
    pub lang: Option<LangCode>,
}

// -- completions --

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// -- config subcommands --

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.lang`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path of the default configuration file.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sender_command() {
        let cli = Cli::parse_from([
            "tidings",
            "sender",
            "fixtures.toml",
            "--template",
            "OTP Template",
            "--channel",
            "email",
        ]);
        let Commands::Sender(args) = cli.command else {
            panic!("expected Sender command");
        };
        assert_eq!(args.template, "OTP Template");
        assert_eq!(args.channel, ChannelId::new("email"));
        assert_eq!(args.fixtures, Some(PathBuf::from("fixtures.toml")));
    }

    #[test]
    fn lang_is_optional() {
        let cli = Cli::parse_from(["tidings", "lang", "f.toml", "-t", "OTP"]);
        let Commands::Lang(args) = cli.command else {
            panic!("expected Lang command");
        };
        assert!(args.lang.is_none());
    }

    #[test]
    fn blank_client_is_rejected() {
        let result = Cli::try_parse_from(["tidings", "list", "f.toml", "--client", "  "]);
        assert!(result.is_err());
    }

    #[test]
    fn ls_alias() {
        let cli = Cli::parse_from(["tidings", "ls", "f.toml", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::List(ListArgs {
                format: Some(ListFormat::Json),
                ..
            })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["tidings", "--quiet", "--verbose", "check", "f.toml"]);
        assert!(result.is_err());
    }
}
