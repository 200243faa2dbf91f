//! Literal replacement rules and ordered rule sets.
//!
//! A [`Rule`] is a pair of literal strings. Matching is plain substring
//! search: no wildcards, no token awareness. The one refinement over
//! `str::replace` is that an occurrence already sitting inside the rule's
//! own replacement text is left alone, so re-running a rule over its output
//! never grows the text.

use serde::Serialize;

use crate::report::RuleOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub from: &'static str,
    pub to: &'static str,
}

/// Result of applying one rule to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Applied {
    pub(crate) text: String,
    pub(crate) replaced: usize,
    pub(crate) already_migrated: usize,
}

impl Rule {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    /// Byte offsets at which `to` contains `from`.
    fn migrated_offsets(&self) -> Vec<usize> {
        if self.from.is_empty() {
            return Vec::new();
        }
        self.to
            .char_indices()
            .map(|(i, _)| i)
            .filter(|&i| self.to[i..].starts_with(self.from))
            .collect()
    }

    /// Replace every non-overlapping occurrence of `from`, scanning left to right.
    pub(crate) fn apply(&self, text: &str) -> Applied {
        if self.from.is_empty() {
            return Applied {
                text: text.to_string(),
                replaced: 0,
                already_migrated: 0,
            };
        }

        let offsets = self.migrated_offsets();
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        let mut replaced = 0;
        let mut already_migrated = 0;

        while let Some(found) = text[cursor..].find(self.from) {
            let at = cursor + found;

            // Occurrence embedded in a previous rewrite: copy the whole migrated span through.
            let migrated_start = offsets.iter().copied().find(|&k| {
                at >= cursor + k
                    && text
                        .get(at - k..)
                        .is_some_and(|rest| rest.starts_with(self.to))
            });

            match migrated_start {
                Some(k) => {
                    let end = at - k + self.to.len();
                    out.push_str(&text[cursor..end]);
                    cursor = end;
                    already_migrated += 1;
                }
                None => {
                    out.push_str(&text[cursor..at]);
                    out.push_str(self.to);
                    cursor = at + self.from.len();
                    replaced += 1;
                }
            }
        }
        out.push_str(&text[cursor..]);

        Applied {
            text: out,
            replaced,
            already_migrated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// One match text contains the other.
    Contains,
    /// A trailing class token of one match starts the other.
    Overlaps,
    /// The earlier rule's replacement contains the later rule's match.
    Reintroduces,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Contains => "contains",
            Self::Overlaps => "overlaps",
            Self::Reintroduces => "reintroduces",
        };
        f.write_str(s)
    }
}

/// A pair of rules whose relative order can change the result. Indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleConflict {
    pub earlier: usize,
    pub later: usize,
    pub kind: ConflictKind,
}

/// A named, ordered list of rules applied in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    name: &'static str,
    rules: &'static [Rule],
}

impl RuleSet {
    pub const fn new(name: &'static str, rules: &'static [Rule]) -> Self {
        Self { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn apply(&self, text: &str) -> (String, Vec<RuleOutcome>) {
        let mut document = text.to_string();
        let mut outcomes = Vec::with_capacity(self.rules.len());

        for (index, rule) in self.rules.iter().enumerate() {
            let applied = rule.apply(&document);
            tracing::debug!(
                rule = index + 1,
                replaced = applied.replaced,
                already_migrated = applied.already_migrated,
                "applied rule"
            );
            outcomes.push(RuleOutcome {
                index: index + 1,
                from: rule.from,
                replaced: applied.replaced,
                already_migrated: applied.already_migrated,
            });
            document = applied.text;
        }

        (document, outcomes)
    }

    /// True when a second pass over the first pass's output changes nothing.
    pub fn is_idempotent_on(&self, text: &str) -> bool {
        let (once, _) = self.apply(text);
        let (twice, _) = self.apply(&once);
        once == twice
    }

    /// Order-sensitive rule pairs. Diagnostic only; `apply` never consults it.
    pub fn conflicts(&self) -> Vec<RuleConflict> {
        let mut conflicts = Vec::new();

        for (i, earlier) in self.rules.iter().enumerate() {
            for (j, later) in self.rules.iter().enumerate().skip(i + 1) {
                let pair = |kind| RuleConflict {
                    earlier: i + 1,
                    later: j + 1,
                    kind,
                };

                if earlier.from.contains(later.from) || later.from.contains(earlier.from) {
                    conflicts.push(pair(ConflictKind::Contains));
                } else if token_overlap(earlier.from, later.from)
                    || token_overlap(later.from, earlier.from)
                {
                    conflicts.push(pair(ConflictKind::Overlaps));
                }

                if !later.from.is_empty() && earlier.to.contains(later.from) {
                    conflicts.push(pair(ConflictKind::Reintroduces));
                }
            }
        }

        conflicts
    }
}

/// True when a whole trailing class token of `a` is also a leading token of `b`.
///
/// Token starts follow whitespace or a `variant:` prefix; token ends precede whitespace.
fn token_overlap(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    (1..a.len().min(b.len())).any(|n| {
        a.ends_with(&b[..n])
            && matches!(a[a.len() - n - 1], b' ' | b':')
            && b[n].is_ascii_whitespace()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_all_occurrences() {
        let rule = Rule::new("text-white/10", "text-black/20 dark:text-white/10");
        let applied = rule.apply("a text-white/10 b text-white/10");
        assert_eq!(
            applied.text,
            "a text-black/20 dark:text-white/10 b text-black/20 dark:text-white/10"
        );
        assert_eq!(applied.replaced, 2);
        assert_eq!(applied.already_migrated, 0);
    }

    #[test]
    fn test_apply_no_match_is_noop() {
        let rule = Rule::new("text-red-400", "text-red-600 dark:text-red-400");
        let applied = rule.apply("text-red-500");
        assert_eq!(applied.text, "text-red-500");
        assert_eq!(applied.replaced, 0);
    }

    #[test]
    fn test_apply_skips_migrated_form() {
        let rule = Rule::new("text-blue-400", "text-blue-600 dark:text-blue-400");
        let applied = rule.apply("x text-blue-600 dark:text-blue-400 y text-blue-400");
        assert_eq!(
            applied.text,
            "x text-blue-600 dark:text-blue-400 y text-blue-600 dark:text-blue-400"
        );
        assert_eq!(applied.replaced, 1);
        assert_eq!(applied.already_migrated, 1);
    }

    #[test]
    fn test_apply_twice_is_stable() {
        let rule = Rule::new("text-white text-lg", "text-black dark:text-white text-lg");
        let once = rule.apply("font-black text-white text-lg").text;
        let twice = rule.apply(&once);
        assert_eq!(twice.text, once);
        assert_eq!(twice.replaced, 0);
        assert_eq!(twice.already_migrated, 1);
    }

    #[test]
    fn test_apply_non_overlapping_left_to_right() {
        let rule = Rule::new("aa", "b");
        assert_eq!(rule.apply("aaa").text, "ba");
    }

    #[test]
    fn test_apply_empty_match_is_noop() {
        let rule = Rule::new("", "x");
        let applied = rule.apply("abc");
        assert_eq!(applied.text, "abc");
        assert_eq!(applied.replaced, 0);
    }

    #[test]
    fn test_apply_handles_multibyte_text() {
        let rule = Rule::new("text-white/10", "text-black/20 dark:text-white/10");
        let applied = rule.apply("Ação — text-white/10 ✓");
        assert_eq!(applied.text, "Ação — text-black/20 dark:text-white/10 ✓");
    }

    #[test]
    fn test_token_overlap() {
        assert!(token_overlap("text-2xl font-black text-white", "text-white text-lg"));
        assert!(token_overlap(
            "bg-surface-light/40 dark:bg-zinc-900/40",
            "bg-zinc-900/40 backdrop-blur-xl p-5"
        ));
        assert!(!token_overlap("text-white/50 uppercase", "text-white/30 max-w-sm"));
        assert!(!token_overlap("text-2xl font-black text-white", "text-white/10"));
    }

    static ORDERED: &[Rule] = &[
        Rule::new("border-white/5 shadow", "border-black/5 shadow"),
        Rule::new("border-white/5", "border-black/5 dark:border-white/5"),
        Rule::new("text-white", "text-black dark:text-white"),
        Rule::new("dark:text-white", "dark:text-zinc-100"),
    ];

    #[test]
    fn test_conflicts() {
        let set = RuleSet::new("ordered", ORDERED);
        let conflicts = set.conflicts();
        assert!(conflicts.contains(&RuleConflict {
            earlier: 1,
            later: 2,
            kind: ConflictKind::Contains,
        }));
        assert!(conflicts.contains(&RuleConflict {
            earlier: 3,
            later: 4,
            kind: ConflictKind::Reintroduces,
        }));
    }

    #[test]
    fn test_rule_set_apply_reports_every_rule() {
        let set = RuleSet::new("ordered", ORDERED);
        let (text, outcomes) = set.apply("plain");
        assert_eq!(text, "plain");
        assert_eq!(outcomes.len(), set.len());
        assert!(outcomes.iter().all(|o| o.replaced == 0));
        assert_eq!(outcomes[0].index, 1);
        assert_eq!(outcomes[3].index, 4);
    }
}
