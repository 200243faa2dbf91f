//! Per-run and per-rule results, serializable for JSON output.

use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// 1-based position in the rule set
    pub index: usize,
    pub from: &'static str,
    pub replaced: usize,
    /// Occurrences left alone because they already sit in the migrated form
    pub already_migrated: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub rule_set: &'static str,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub changed: bool,
    /// False for previews
    pub written: bool,
    pub rules: Vec<RuleOutcome>,
}

impl RewriteReport {
    pub fn total_replaced(&self) -> usize {
        self.rules.iter().map(|r| r.replaced).sum()
    }

    pub fn total_already_migrated(&self) -> usize {
        self.rules.iter().map(|r| r.already_migrated).sum()
    }

    /// Rules that found nothing to replace.
    pub fn idle_rules(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.rules
            .iter()
            .filter(|r| r.replaced == 0 && r.already_migrated == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(index: usize, replaced: usize, already_migrated: usize) -> RuleOutcome {
        RuleOutcome {
            index,
            from: "text-white/10",
            replaced,
            already_migrated,
        }
    }

    fn report() -> RewriteReport {
        RewriteReport {
            path: PathBuf::from("src/pages/Stats.tsx"),
            rule_set: "stats-theme",
            bytes_before: 10,
            bytes_after: 30,
            changed: true,
            written: true,
            rules: vec![outcome(1, 2, 0), outcome(2, 0, 1), outcome(3, 0, 0)],
        }
    }

    #[test]
    fn test_totals() {
        let report = report();
        assert_eq!(report.total_replaced(), 2);
        assert_eq!(report.total_already_migrated(), 1);
        let idle: Vec<_> = report.idle_rules().map(|r| r.index).collect();
        assert_eq!(idle, vec![3]);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["path"], "src/pages/Stats.tsx");
        assert_eq!(json["rule_set"], "stats-theme");
        assert_eq!(json["rules"][0]["replaced"], 2);
        assert_eq!(json["rules"][1]["already_migrated"], 1);
    }
}
