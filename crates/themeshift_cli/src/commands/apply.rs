//! `themeshift apply`: rewrite the page in place.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use themeshift_core::app::COMPLETION_MESSAGE;
use themeshift_observability::{command_span, record_duration, record_error};

use crate::output;

pub fn handle(path: PathBuf) -> Result<()> {
    let span = command_span!("apply", path.display());
    let _guard = span.enter();
    let started = Instant::now();

    let report = themeshift_core::rewrite(&path).inspect_err(|e| record_error(e))?;
    record_duration("duration_ms", started.elapsed());

    tracing::debug!(
        replaced = report.total_replaced(),
        already_migrated = report.total_already_migrated(),
        changed = report.changed,
        "apply finished"
    );
    output::success_with(COMPLETION_MESSAGE, &report);

    Ok(())
}
