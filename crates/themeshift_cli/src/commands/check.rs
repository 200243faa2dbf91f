//! `themeshift check`: dry run against the page.

use std::path::PathBuf;

use anyhow::Result;
use themeshift_core::{RewriteReport, RuleOutcome};
use themeshift_observability::{command_span, record_error};

use crate::output;

pub fn handle(path: PathBuf, verbose: bool) -> Result<()> {
    let span = command_span!("check", path.display());
    let _guard = span.enter();

    let report = themeshift_core::preview(&path).inspect_err(|e| record_error(e))?;

    output::header(&format!("Check: {}", report.path.display()));
    output::kv("rule set", report.rule_set);
    output::kv("pending", &report.total_replaced().to_string());
    output::kv("migrated", &report.total_already_migrated().to_string());
    output::kv("idle rules", &report.idle_rules().count().to_string());

    let shown: Vec<&RuleOutcome> = report
        .rules
        .iter()
        .filter(|r| verbose || r.replaced > 0)
        .collect();
    if !shown.is_empty() {
        print_outcomes(&shown);
    }

    summarize(&report);
    Ok(())
}

fn print_outcomes(outcomes: &[&RuleOutcome]) {
    let mut table = output::table(&["#", "Match", "Pending", "Migrated"]);
    for outcome in outcomes {
        output::table_row(
            &mut table,
            &[
                outcome.index.to_string(),
                outcome.from.to_string(),
                outcome.replaced.to_string(),
                outcome.already_migrated.to_string(),
            ],
        );
    }
    output::table_print(&table, outcomes);
}

fn summarize(report: &RewriteReport) {
    if report.changed {
        output::warning(&format!(
            "{} replacement(s) pending; run `themeshift apply` to write them",
            report.total_replaced()
        ));
    } else {
        output::success("Page already uses the adaptive palette");
    }
    output::data("report", report);
}
