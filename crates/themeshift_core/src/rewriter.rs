//! Read, rewrite and write back a single page.
//!
//! The whole file is read and decoded before any rule runs, and every rule
//! runs before the write starts. The write truncates in place; there is no
//! temp file and no rollback.

use std::path::Path;
use std::time::Instant;

use crate::error::{Result, RewriteError};
use crate::report::RewriteReport;
use crate::rule::RuleSet;
use crate::table::STATS_THEME;

/// Rewrite `path` with the statistics page table.
pub fn rewrite(path: &Path) -> Result<RewriteReport> {
    rewrite_with(&STATS_THEME, path)
}

pub fn rewrite_with(rules: &RuleSet, path: &Path) -> Result<RewriteReport> {
    let span = tracing::info_span!("rewrite", path = %path.display(), rule_set = rules.name());
    let _guard = span.enter();
    let started = Instant::now();

    let Run { text, mut report } = run(rules, path)?;

    std::fs::write(path, &text).map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    report.written = true;

    tracing::info!(
        replaced = report.total_replaced(),
        bytes = report.bytes_after,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "page rewritten"
    );

    Ok(report)
}

/// Apply the statistics page table without touching the file.
pub fn preview(path: &Path) -> Result<RewriteReport> {
    let span = tracing::info_span!("preview", path = %path.display());
    let _guard = span.enter();

    run(&STATS_THEME, path).map(|run| run.report)
}

struct Run {
    text: String,
    report: RewriteReport,
}

fn run(rules: &RuleSet, path: &Path) -> Result<Run> {
    let original = read_document(path)?;
    let (text, outcomes) = rules.apply(&original);

    let report = RewriteReport {
        path: path.to_path_buf(),
        rule_set: rules.name(),
        bytes_before: original.len(),
        bytes_after: text.len(),
        changed: text != original,
        written: false,
        rules: outcomes,
    };

    for idle in report.idle_rules() {
        tracing::debug!(rule = idle.index, "no occurrences");
    }

    Ok(Run { text, report })
}

fn read_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| RewriteError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
