//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - warnings and errors
    -v      - which files were found and written
    -vv     - per-file and per-asset decisions
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Read failures and machine-readable output are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and raw output"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` or `[output] no_color`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Replaces `<root>/sitepack.toml`; the global file still applies.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    /// Every input and the output file resolve against this directory.
    #[arg(
        short = 'C',
        long = "root",
        global = true,
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn root_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
