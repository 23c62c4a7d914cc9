//! `freshcart rules`: list each kind's rules in the order they run.

use serde::Serialize;

use freshcart_core::domain::FieldKind;

use crate::{cli::RulesArgs, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct KindRules {
    kind: FieldKind,
    label: &'static str,
    rules: Vec<RuleLine>,
}

#[derive(Debug, Serialize)]
struct RuleLine {
    id: &'static str,
    message: String,
}

pub fn execute(args: RulesArgs, output: OutputManager) -> CliResult<()> {
    let kinds = match args.kind.as_deref() {
        Some(name) => vec![name.parse::<FieldKind>()?],
        None => FieldKind::ALL.to_vec(),
    };

    let listing: Vec<KindRules> = kinds.into_iter().map(describe).collect();

    if output.is_json() {
        output.json(&listing)?;
        return Ok(());
    }

    for (i, entry) in listing.iter().enumerate() {
        if i > 0 {
            output.print("")?;
        }
        output.header(&format!("{} ({} rules)", entry.kind, entry.rules.len()))?;
        for (n, rule) in entry.rules.iter().enumerate() {
            output.print(&format!("  {:>2}. {:<28} {}", n + 1, rule.id, rule.message))?;
        }
    }

    Ok(())
}

/// Messages are rendered with the kind's default label.
fn describe(kind: FieldKind) -> KindRules {
    let label = kind.default_label();
    KindRules {
        kind,
        label,
        rules: kind
            .rules()
            .iter()
            .map(|rule| RuleLine {
                id: rule.id(),
                message: rule.message().render(label),
            })
            .collect(),
    }
}
