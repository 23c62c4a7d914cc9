//! `freshcart form`: validate whole submissions the way the storefront
//! forms do.
//!
//! A single submission is assembled from `--file`, then `--set` overrides,
//! then (with `--interactive`) prompts for whatever is still missing.
//! `--dir` runs every submission file under a directory instead, with the
//! same `--set` overrides applied to each.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use freshcart_adapters::{LogNotifier, MemoryNotifier, SubmissionLoader};
use freshcart_core::{
    application::FormService,
    domain::{FormKind, FormReport, FormSubmission, Notice},
};

use crate::{
    cli::FormArgs,
    commands::clock_for,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

const PAYMENT_METHOD: &str = "payment_method";

/// JSON shape of one validated submission.
#[derive(Debug, Serialize)]
struct SubmissionReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    report: &'a FormReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<&'a Notice>,
}

#[instrument(skip_all, fields(form = %args.form))]
pub fn execute(
    args: FormArgs,
    today: Option<&str>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let form: FormKind = args.form.parse()?;
    let overrides = FormSubmission::from_entries(&args.set)?;

    match args.dir.as_deref() {
        Some(dir) => run_batch(form, dir, overrides, today, &config, &output),
        None => run_single(form, overrides, &args, today, &config, &output),
    }
}

fn run_single(
    form: FormKind,
    overrides: FormSubmission,
    args: &FormArgs,
    today: Option<&str>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let mut submission = match args.file.as_deref() {
        Some(path) => SubmissionLoader::new().load(path)?,
        None => FormSubmission::new(),
    };
    submission.merge(overrides);

    if args.interactive {
        prompt_missing(form, &mut submission)?;
    }
    apply_defaults(form, &mut submission, config);

    let notifier = MemoryNotifier::new();
    let service = FormService::new(
        clock_for(today, config)?,
        Box::new(notifier.clone()),
    )
    .with_notice_duration_ms(config.validation.notice_duration_ms);

    let report = service.submit(form, &submission)?;
    let notice = notifier.last()?;

    if output.is_json() {
        output.json(&SubmissionReport {
            path: args.file.as_ref().map(|p| p.display().to_string()),
            report: &report,
            notice: notice.as_ref(),
        })?;
    } else {
        match &notice {
            Some(notice) => output.notice(notice)?,
            None => output.print(&format!("{}: {}", report.title(), report.message()))?,
        }
        if let Some(key) = report.rejected_key() {
            output.detail(&format!("field: {key}"))?;
        }
    }

    if report.is_accepted() {
        Ok(())
    } else {
        Err(CliError::FormRejected {
            form: form.to_string(),
            rejected: 1,
            total: 1,
        })
    }
}

fn run_batch(
    form: FormKind,
    dir: &Path,
    overrides: FormSubmission,
    today: Option<&str>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let submissions = SubmissionLoader::new().load_dir(dir)?;
    if submissions.is_empty() {
        output.warning(&format!("No submission files found in {}", dir.display()))?;
        return Ok(());
    }

    let service = FormService::new(
        clock_for(today, config)?,
        Box::new(LogNotifier::new()),
    )
    .with_notice_duration_ms(config.validation.notice_duration_ms);

    let progress = output.progress(submissions.len() as u64);
    let mut results: Vec<(PathBuf, FormReport)> = Vec::with_capacity(submissions.len());

    for (path, mut submission) in submissions {
        let shown = display_path(dir, &path);
        progress.set_message(shown.clone());

        submission.merge(overrides.clone());
        apply_defaults(form, &mut submission, config);
        let report = service.submit(form, &submission)?;

        if !output.is_json() {
            let line = format!("{shown}: {}", report.message());
            progress.suspend(|| {
                if report.is_accepted() {
                    output.success(&line)
                } else {
                    output.error(&line)
                }
            })?;
        }

        progress.inc(1);
        results.push((path, report));
    }
    progress.finish_and_clear();

    let total = results.len();
    let rejected = results.iter().filter(|(_, r)| !r.is_accepted()).count();
    info!(total, rejected, "batch finished");

    if output.is_json() {
        let entries: Vec<SubmissionReport<'_>> = results
            .iter()
            .map(|(path, report)| SubmissionReport {
                path: Some(display_path(dir, path)),
                report,
                notice: None,
            })
            .collect();
        output.json(&entries)?;
    } else {
        output.print("")?;
        output.info(&format!(
            "{} accepted, {rejected} rejected ({total} {form} submissions)",
            total - rejected
        ))?;
    }

    if rejected == 0 {
        Ok(())
    } else {
        Err(CliError::FormRejected {
            form: form.to_string(),
            rejected,
            total,
        })
    }
}

/// Fill in what the config supplies when a submission leaves it blank.
fn apply_defaults(form: FormKind, submission: &mut FormSubmission, config: &AppConfig) {
    if form == FormKind::Checkout && submission.get(PAYMENT_METHOD).trim().is_empty() {
        submission.insert(PAYMENT_METHOD, config.forms.default_payment_method.clone());
    }
}

fn display_path(dir: &Path, path: &Path) -> String {
    path.strip_prefix(dir).unwrap_or(path).display().to_string()
}

#[cfg(feature = "interactive")]
fn prompt_missing(form: FormKind, submission: &mut FormSubmission) -> CliResult<()> {
    use dialoguer::{Input, Password};

    for key in form.schema().keys() {
        if submission.contains(key) {
            continue;
        }
        let value = if key.contains("password") {
            Password::new()
                .with_prompt(key)
                .allow_empty_password(true)
                .interact()
        } else {
            Input::<String>::new()
                .with_prompt(key)
                .allow_empty(true)
                .interact_text()
        }
        .map_err(prompt_error)?;
        submission.insert(key, value);
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(ref io) if io.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        other => CliError::InvalidInput {
            message: format!("prompt failed: {other}"),
            source: Some(Box::new(other)),
        },
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt_missing(_form: FormKind, _submission: &mut FormSubmission) -> CliResult<()> {
    tracing::warn!("interactive prompts requested but not compiled in");
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
