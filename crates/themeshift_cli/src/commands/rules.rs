//! `themeshift rules`: show the replacement table.

use anyhow::Result;
use themeshift_core::STATS_THEME;

use crate::output;

pub fn handle(conflicts: bool) -> Result<()> {
    output::header(&format!(
        "Rule set: {} ({} rules)",
        STATS_THEME.name(),
        STATS_THEME.len()
    ));

    let mut table = output::table(&["#", "Match", "Replacement"]);
    for (index, rule) in STATS_THEME.rules().iter().enumerate() {
        output::table_row(
            &mut table,
            &[(index + 1).to_string(), rule.from.to_string(), rule.to.to_string()],
        );
    }
    output::table_print(&table, STATS_THEME.rules());

    if conflicts {
        print_conflicts();
    }

    Ok(())
}

fn print_conflicts() {
    let conflicts = STATS_THEME.conflicts();
    if conflicts.is_empty() {
        output::dim("No order-sensitive rule pairs");
        return;
    }

    output::header("Order-sensitive pairs");
    let mut table = output::table(&["Earlier", "Later", "Kind"]);
    for conflict in &conflicts {
        output::table_row(
            &mut table,
            &[
                conflict.earlier.to_string(),
                conflict.later.to_string(),
                conflict.kind.to_string(),
            ],
        );
    }
    output::table_print(&table, conflicts.as_slice());
}
