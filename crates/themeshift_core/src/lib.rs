pub mod app;
pub mod error;
pub mod report;
pub mod rewriter;
pub mod rule;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{Result, RewriteError};
pub use report::{RewriteReport, RuleOutcome};
pub use rewriter::{preview, rewrite, rewrite_with};
pub use rule::{ConflictKind, Rule, RuleConflict, RuleSet};
pub use table::{STATS_THEME, STATS_THEME_RULES};
