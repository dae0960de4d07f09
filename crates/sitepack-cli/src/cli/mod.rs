//! Command-line surface of `sitepack`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use sitepack_core::domain::EmitMode;

pub mod global;
pub use global::GlobalArgs;

#[derive(Debug, Parser)]
#[command(
    name    = "sitepack",
    bin_name = "sitepack",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Aggregate a front-end source tree into a standalone HTML page",
    long_about = "Sitepack concatenates a project's types, services, components \
                  and entry files into one review document and writes a \
                  standalone.html page next to them. It does not bundle: use \
                  `sitepack inline` on the output of a real bundler for that.",
    after_help = "EXAMPLES:\n\
        \x20 sitepack                         # build in the current directory\n\
        \x20 sitepack build --mode embed -C ./app\n\
        \x20 sitepack inspect --format json\n\
        \x20 sitepack inline --dist ./dist\n\
        \x20 sitepack completions bash > /usr/share/bash-completion/completions/sitepack",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Defaults to `build`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Aggregate sources and write the standalone page.
    #[command(
        visible_alias = "b",
        about = "Write the standalone page (default)",
        after_help = "EXAMPLES:\n\
            \x20 sitepack build\n\
            \x20 sitepack build --mode embed\n\
            \x20 sitepack build -o preview.html --title \"My App\""
    )]
    Build(BuildArgs),

    /// Show what a build would aggregate, without writing anything.
    #[command(
        visible_alias = "ls",
        about = "Show aggregation order and imports",
        after_help = "EXAMPLES:\n\
            \x20 sitepack inspect\n\
            \x20 sitepack inspect --format json | jq '.sections[].label'"
    )]
    Inspect(InspectArgs),

    /// Inline the assets of an external build into one page.
    #[command(
        about = "Inline dist/ assets into a standalone page",
        after_help = "EXAMPLES:\n\
            \x20 npm run build && sitepack inline\n\
            \x20 sitepack inline --dist build -o app.html"
    )]
    Inline(InlineArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sitepack completions bash > ~/.local/share/bash-completion/completions/sitepack\n\
            \x20 sitepack completions zsh  > ~/.zfunc/_sitepack\n\
            \x20 sitepack completions fish > ~/.config/fish/completions/sitepack.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sitepack config list\n\
            \x20 sitepack config path"
    )]
    Config(ConfigCommands),
}

/// Arguments for `sitepack build`.
#[derive(Debug, Default, Args)]
pub struct BuildArgs {
    /// What the page carries besides the template.
    #[arg(long = "mode", value_enum, help = "Emission mode [default: instructions]")]
    pub mode: Option<Mode>,

    /// Output file name, written inside the root.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "NAME",
        help = "Output file name (default: standalone.html)"
    )]
    pub output: Option<String>,

    /// Page title.
    #[arg(long = "title", value_name = "TITLE", help = "Page title")]
    pub title: Option<String>,
}

/// Emission mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Mode {
    /// Template only; the page explains how to bundle.
    Instructions,
    /// Also embed the aggregated source as an inert block.
    Embed,
}

impl From<Mode> for EmitMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Instructions => EmitMode::Instructions,
            Mode::Embed => EmitMode::Embed,
        }
    }
}

/// Arguments for `sitepack inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: InspectFormat,
}

/// Output format for the `inspect` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    /// Human-readable listing.
    Table,
    /// JSON document.
    Json,
}

/// Arguments for `sitepack inline`.
#[derive(Debug, Args)]
pub struct InlineArgs {
    /// Build output directory; relative paths resolve against the root.
    #[arg(long = "dist", value_name = "DIR", help = "Build output directory")]
    pub dist: Option<PathBuf>,

    /// Output file name, written inside the root.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "NAME",
        help = "Output file name (default: standalone.html)"
    )]
    pub output: Option<String>,
}

/// Arguments for `sitepack completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Subcommands for `sitepack config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print all effective configuration values as TOML.
    List,
    /// Print the path of the configuration file in effect.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["sitepack"]);
        assert!(cli.command.is_none());
        assert!(cli.global.root.is_none());
    }

    #[test]
    fn parse_build_with_mode() {
        let cli = Cli::parse_from(["sitepack", "build", "--mode", "embed", "-o", "x.html"]);
        match cli.command {
            Some(Commands::Build(args)) => {
                assert_eq!(args.mode, Some(Mode::Embed));
                assert_eq!(args.output.as_deref(), Some("x.html"));
            }
            other => panic!("expected Build, got {other:?}"),
        }
    }

    #[test]
    fn mode_converts_to_emit_mode() {
        assert_eq!(EmitMode::from(Mode::Instructions), EmitMode::Instructions);
        assert_eq!(EmitMode::from(Mode::Embed), EmitMode::Embed);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["sitepack", "build", "--mode", "bundle"]).is_err());
    }

    #[test]
    fn root_is_global() {
        let cli = Cli::parse_from(["sitepack", "inspect", "-C", "/tmp/app"]);
        assert_eq!(cli.global.root, Some(PathBuf::from("/tmp/app")));
        assert!(matches!(
            cli.command,
            Some(Commands::Inspect(InspectArgs {
                format: InspectFormat::Table
            }))
        ));
    }

    #[test]
    fn inline_takes_dist() {
        let cli = Cli::parse_from(["sitepack", "inline", "--dist", "build"]);
        match cli.command {
            Some(Commands::Inline(args)) => assert_eq!(args.dist, Some(PathBuf::from("build"))),
            other => panic!("expected Inline, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["sitepack", "--quiet", "--verbose", "build"]);
        assert!(result.is_err());
    }
}
