//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum as _;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use freshcart_core::domain::{Notice, Severity};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

const PROGRESS_TEMPLATE: &str = "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format` in the config; whatever
    /// is still `auto` becomes Human on a TTY and Plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => configured_format(config),
            explicit => explicit,
        };

        let resolved_format = requested.resolve(io::stdout().is_terminal());

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Success, msg)
    }

    /// `✗ <msg>` in red. Written even in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Error, msg)
    }

    /// `⚠ <msg>` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Warning, msg)
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Info, msg)
    }

    fn marked(&self, mark: Mark, msg: &str) -> io::Result<()> {
        if self.quiet && mark != Mark::Error {
            return Ok(());
        }
        let symbol = mark.symbol();
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            match mark {
                Mark::Success => format!("{} {}", symbol.green().bold(), msg.green()),
                Mark::Error => format!("{} {}", symbol.red().bold(), msg.red()),
                Mark::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
                Mark::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
            }
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Dimmed detail line, indented under the previous one.
    pub fn detail(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("  {text}")
        } else {
            format!("  {}", text.dimmed())
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON. Always written: scripts asked for it.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Render a notice with the mark matching its severity.
    pub fn notice(&self, notice: &Notice) -> io::Result<()> {
        let mark = match notice.severity() {
            Severity::Error => Mark::Error,
            Severity::Success => Mark::Success,
            Severity::Warning => Mark::Warning,
            Severity::Info => Mark::Info,
        };
        self.marked(mark, &notice.to_string())
    }

    /// Progress bar for `len` steps. Hidden unless output is Human and not
    /// quiet.
    pub fn progress(&self, len: u64) -> ProgressBar {
        if self.quiet || self.resolved_format != OutputFormat::Human {
            return ProgressBar::hidden();
        }
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        ProgressBar::new(len).with_style(style)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` when results should be emitted as JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Success,
    Error,
    Warning,
    Info,
}

impl Mark {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Error => "\u{2717}",   // ✗
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
        }
    }
}

/// The format named by `output.format`; unknown names fall back to auto.
fn configured_format(config: &AppConfig) -> OutputFormat {
    match OutputFormat::from_str(&config.output.format, true) {
        Ok(format) => format,
        Err(_) => {
            tracing::warn!(
                format = %config.output.format,
                "unknown output.format in config, using auto"
            );
            OutputFormat::Auto
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: OutputFormat, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            today: None,
            output_format: format,
        }
    }

    fn config_with_format(format: &str) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.output.format = format.into();
        cfg
    }

    #[test]
    fn flag_beats_config() {
        let out = OutputManager::new(
            &args(OutputFormat::Plain, false, false),
            &config_with_format("json"),
        );
        assert_eq!(out.resolved_format, OutputFormat::Plain);
    }

    #[test]
    fn config_used_when_flag_is_auto() {
        let out = OutputManager::new(
            &args(OutputFormat::Auto, false, false),
            &config_with_format("JSON"),
        );
        assert!(out.is_json());
    }

    #[test]
    fn unknown_config_format_falls_back() {
        assert_eq!(
            configured_format(&config_with_format("yaml")),
            OutputFormat::Auto
        );
    }

    #[test]
    fn colour_only_for_human_output() {
        let human = OutputManager::new(
            &args(OutputFormat::Human, false, false),
            &AppConfig::default(),
        );
        let plain = OutputManager::new(
            &args(OutputFormat::Plain, false, false),
            &AppConfig::default(),
        );
        let no_color = OutputManager::new(
            &args(OutputFormat::Human, false, true),
            &AppConfig::default(),
        );
        assert!(!human.no_color);
        assert!(plain.no_color);
        assert!(no_color.no_color);
    }

    #[test]
    fn quiet_writes_still_succeed() {
        let out = OutputManager::new(&args(OutputFormat::Plain, true, true), &AppConfig::default());
        assert!(out.print("hidden").is_ok());
        assert!(out.error("always shown").is_ok());
    }

    #[test]
    fn progress_hidden_outside_human_output() {
        let out = OutputManager::new(&args(OutputFormat::Plain, false, true), &AppConfig::default());
        assert!(out.progress(3).is_hidden());
    }
}
