//! # FreshCart CLI
//!
//! Validates storefront form input from the command line.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success, every value/submission valid    |
//! |  1   | Internal / system error                  |
//! |  2   | Invalid value, rejected form, bad input  |
//! |  3   | Unknown field kind or form, missing file |
//! |  4   | Configuration error                      |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Before tracing init so RUST_LOG from .env applies.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and must exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    // `init` and `completions` never read it; init must work even when the
    // target file is missing or broken.
    let config = match cli.command {
        Commands::Init(_) | Commands::Completions(_) => AppConfig::default(),
        _ => match AppConfig::load(cli.global.config.as_ref()) {
            Ok(cfg) => cfg,
            Err(e) => {
                return handle_error(
                    CliError::ConfigError {
                        message: format!("{e:#}"),
                        source: None,
                    },
                    cli.global.verbose > 0,
                );
            }
        },
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("freshcart completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Check(cmd) => {
            commands::check::execute(cmd, cli.global.today.as_deref(), config, output)
        }
        Commands::Form(cmd) => {
            commands::form::execute(cmd, cli.global.today.as_deref(), config, output)
        }
        Commands::Rules(cmd) => commands::rules::execute(cmd, output),
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global.config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => {
            let path = AppConfig::resolve_path(cli.global.config.as_ref());
            commands::config::execute(cmd, config, path, output)
        }
    }
}

/// Translate a `CliError` into a user message and an exit code.
///
/// Rejections were already printed by the command, so they only get logged.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    if !err.already_reported() {
        let colored = std::io::IsTerminal::is_terminal(&std::io::stderr());
        eprint!("{}", err.render(verbose, colored));
    }

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
