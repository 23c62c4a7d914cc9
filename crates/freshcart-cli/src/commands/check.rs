//! `freshcart check`: validate one value as a field kind.

use serde::Serialize;
use tracing::instrument;

use freshcart_adapters::LogNotifier;
use freshcart_core::{
    application::FormService,
    domain::{FieldKind, ValidationResult},
};

use crate::{
    cli::CheckArgs,
    commands::clock_for,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON shape of a check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport<'a> {
    kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    #[serde(flatten)]
    result: &'a ValidationResult,
    rule: Option<&'static str>,
}

#[instrument(skip_all, fields(kind = %args.kind))]
pub fn execute(
    args: CheckArgs,
    today: Option<&str>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let kind: FieldKind = args.kind.parse()?;
    let clock = clock_for(today, &config)?;
    let today = clock.today();

    let service = FormService::new(clock, Box::new(LogNotifier::new()));
    let result = service.check(kind, &args.value, args.label.as_deref());
    let rule = kind.failing_rule(&args.value, today).map(|rule| rule.id());

    if output.is_json() {
        output.json(&CheckReport {
            kind,
            label: args.label.as_deref(),
            result: &result,
            rule,
        })?;
    } else if result.is_valid() {
        output.success(&format!("Valid {kind}"))?;
    } else {
        output.error(result.message())?;
        if let Some(id) = rule.filter(|_| args.explain) {
            output.detail(&format!("rule: {id}"))?;
        }
    }

    match result.failure() {
        None => Ok(()),
        Some(message) => Err(CliError::InvalidValue {
            kind: kind.to_string(),
            message: message.to_string(),
        }),
    }
}
