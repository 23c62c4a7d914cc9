//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No validation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "freshcart",
    bin_name = "freshcart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2714} FreshCart form field validation",
    long_about = "freshcart checks storefront input the way the FreshCart \
                  forms do: one field at a time or a whole submission, \
                  reporting the first rule that fails.",
    after_help = "EXAMPLES:\n\
        \x20 freshcart check email user@example.com\n\
        \x20 freshcart check card-number '4532 0151 1283 0366' --explain\n\
        \x20 freshcart form registration --file signup.json\n\
        \x20 freshcart form checkout --dir orders/ --today 2025-03\n\
        \x20 freshcart rules password",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a single value.
    #[command(
        visible_alias = "c",
        about = "Validate one value as a field kind",
        after_help = "EXAMPLES:\n\
            \x20 freshcart check email user@example.com\n\
            \x20 freshcart check name 'B' --label 'Last Name'\n\
            \x20 freshcart check expiry-date 02/25 --today 2025-03 --explain"
    )]
    Check(CheckArgs),

    /// Validate a whole form submission.
    #[command(
        visible_alias = "f",
        about = "Validate a form submission",
        after_help = "EXAMPLES:\n\
            \x20 freshcart form login --set email=user@example.com --set password=secret\n\
            \x20 freshcart form checkout --file order.toml --set payment_method=cash\n\
            \x20 freshcart form registration --dir signups/\n\
            \x20 freshcart form profile --interactive"
    )]
    Form(FormArgs),

    /// List the rules each field kind evaluates.
    #[command(
        visible_alias = "ls",
        about = "List validation rules in evaluation order",
        after_help = "EXAMPLES:\n\
            \x20 freshcart rules\n\
            \x20 freshcart rules password\n\
            \x20 freshcart rules --output-format json"
    )]
    Rules(RulesArgs),

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 freshcart init                      # default location\n\
            \x20 freshcart -c ./freshcart.toml init  # explicit path\n\
            \x20 freshcart init --force              # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 freshcart completions bash > ~/.local/share/bash-completion/completions/freshcart\n\
            \x20 freshcart completions zsh  > ~/.zfunc/_freshcart\n\
            \x20 freshcart completions fish > ~/.config/fish/completions/freshcart.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 freshcart config get validation.notice_duration_ms\n\
            \x20 freshcart config list\n\
            \x20 freshcart config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `freshcart check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Field kind, e.g. `email`, `phone`, `card-number`.
    #[arg(value_name = "KIND", help = "Field kind (see `freshcart rules`)")]
    pub kind: String,

    /// The value to validate. Quote it to keep spaces.
    #[arg(value_name = "VALUE", allow_hyphen_values = true, help = "Value to validate")]
    pub value: String,

    /// Field name used in messages.
    #[arg(
        short = 'l',
        long = "label",
        value_name = "LABEL",
        help = "Field name used in messages (e.g. 'Last Name')"
    )]
    pub label: Option<String>,

    /// Also print the id of the rule that failed.
    #[arg(short = 'e', long = "explain", help = "Show which rule failed")]
    pub explain: bool,
}

// ── form ──────────────────────────────────────────────────────────────────────

/// Arguments for `freshcart form`.
#[derive(Debug, Args)]
pub struct FormArgs {
    /// Form name, e.g. `registration`, `checkout`.
    #[arg(value_name = "FORM", help = "Form to validate")]
    pub form: String,

    /// Read the submission from a JSON or TOML file.
    #[arg(
        long = "file",
        value_name = "FILE",
        conflicts_with = "dir",
        help = "Submission file (.json or .toml)"
    )]
    pub file: Option<PathBuf>,

    /// Validate every submission file under a directory.
    #[arg(
        long = "dir",
        value_name = "DIR",
        conflicts_with = "interactive",
        help = "Directory of submission files"
    )]
    pub dir: Option<PathBuf>,

    /// Set or override one field.
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        help = "Field value, repeatable"
    )]
    pub set: Vec<String>,

    /// Prompt for every field that has no value yet.
    #[arg(short = 'i', long = "interactive", help = "Prompt for missing fields")]
    pub interactive: bool,
}

// ── rules ─────────────────────────────────────────────────────────────────────

/// Arguments for `freshcart rules`.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Only list this kind.
    #[arg(value_name = "KIND", help = "Field kind to show (default: all)")]
    pub kind: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `freshcart init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `freshcart completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `freshcart config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `forms.default_payment_method`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
