//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity (events go to stderr):
    (none)  - Warnings and errors
    -v      - Accepted and rejected submissions
    -vv     - Skipped steps, loaded files
    -vvv    - Everything"
    )]
    pub verbose: u8,

    /// Only errors and rejected values are printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file (default: platform config dir)"
    )]
    pub config: Option<PathBuf>,

    /// Month card expiry is compared against; overrides `validation.today`.
    #[arg(
        long = "today",
        global = true,
        value_name = "YYYY-MM",
        help = "Treat this month as the current one"
    )]
    pub today: Option<String>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Symbols and colors.
    Human,
    /// Symbols, no colors.
    Plain,
    /// One JSON document per command.
    Json,
}

impl OutputFormat {
    /// Settle `Auto` for the given stdout.
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdout_is_terminal => Self::Human,
            Self::Auto => Self::Plain,
            other => other,
        }
    }
}
