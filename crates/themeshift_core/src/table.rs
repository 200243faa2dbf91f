//! The fixed light/dark migration table for the statistics page.
//!
//! Order is application order. Each replacement keeps the original dark
//! token behind a `dark:` variant and adds a light counterpart in front.

use crate::rule::{Rule, RuleSet};

pub static STATS_THEME_RULES: &[Rule] = &[
    // Page shell
    Rule::new("bg-surface-light/40 dark:bg-zinc-900/40", "bg-white/60 dark:bg-zinc-900/40"),
    Rule::new(
        "border border-white/5 shadow-2xl",
        "border border-black/5 dark:border-white/5 shadow-xl dark:shadow-2xl",
    ),

    // Developer tools panel
    Rule::new(
        "border border-white/10 rounded-xl",
        "border border-black/10 dark:border-white/10 rounded-xl",
    ),
    Rule::new(
        "text-white/50 uppercase tracking-widest",
        "text-black/50 dark:text-white/50 uppercase tracking-widest",
    ),
    Rule::new("text-white/30 max-w-sm", "text-black/40 dark:text-white/30 max-w-sm"),

    // Monthly chart
    Rule::new(
        "text-[10px] uppercase tracking-[0.3em] text-white/40",
        "text-[10px] uppercase tracking-[0.3em] text-black/40 dark:text-white/40",
    ),
    Rule::new(
        "tick={{ fontSize: 10, fill: '#ffffff40', fontWeight: 'bold' }}",
        "tick={{ fontSize: 10, fill: '#888', fontWeight: 'bold' }}",
    ),
    Rule::new(
        "tick={{ fontSize: 10, fill: '#ffffff40' }}",
        "tick={{ fontSize: 10, fill: '#888' }}",
    ),
    Rule::new(
        "contentStyle={{ backgroundColor: '#09090b', borderRadius: '12px', border: '1px solid #ffffff10', color: '#fff' }}",
        "contentStyle={{ backgroundColor: 'rgba(9, 9, 11, 0.8)', borderRadius: '12px', border: '1px solid rgba(128,128,128,0.2)', backdropFilter: 'blur(8px)' }}",
    ),
    Rule::new(
        "cursor={{ fill: 'rgba(255,255,255,0.03)' }}",
        "cursor={{ fill: 'rgba(128,128,128,0.05)' }}",
    ),

    // Heatmap
    Rule::new(
        "hover:bg-white/5 p-2 rounded-lg",
        "hover:bg-black/5 dark:hover:bg-white/5 p-2 rounded-lg",
    ),
    Rule::new(
        "text-white/70 uppercase tracking-wider",
        "text-black/70 dark:text-white/70 uppercase tracking-wider",
    ),
    Rule::new(
        "bg-white/5 rounded-full overflow-hidden",
        "bg-black/5 dark:bg-white/5 rounded-full overflow-hidden",
    ),
    Rule::new("text-white/20 text-[10px]", "text-black/40 dark:text-white/20 text-[10px]"),
    Rule::new(
        "border border-dashed border-white/5",
        "border border-dashed border-black/10 dark:border-white/5",
    ),
    Rule::new("border-t border-white/5", "border-t border-black/5 dark:border-white/5"),

    // Crimes and nature breakdown
    Rule::new(
        "hover:bg-white/5 transition-colors",
        "hover:bg-black/5 dark:hover:bg-white/5 transition-colors",
    ),
    Rule::new("text-2xl font-black text-white", "text-2xl font-black text-black dark:text-white"),
    Rule::new(
        "text-[8px] text-white/40 uppercase",
        "text-[8px] text-black/50 dark:text-white/40 uppercase",
    ),
    Rule::new(
        "bg-white/5 rounded-xl border border-white/5",
        "bg-black/5 dark:bg-white/5 rounded-xl border border-black/5 dark:border-white/5",
    ),
    Rule::new(
        "text-white/70 group-hover/item:text-white",
        "text-black/70 dark:text-white/70 group-hover/item:text-black dark:group-hover/item:text-white",
    ),

    // Tactics
    Rule::new(
        "bg-zinc-900/40 backdrop-blur-xl p-5",
        "bg-white/60 dark:bg-zinc-900/40 backdrop-blur-xl p-5",
    ),
    Rule::new("text-white text-lg", "text-black dark:text-white text-lg"),
    Rule::new(
        "text-white/30 uppercase tracking-widest",
        "text-black/40 dark:text-white/30 uppercase tracking-widest",
    ),
    Rule::new(
        "text-[9px] font-black text-white/20",
        "text-[9px] font-black text-black/50 dark:text-white/20",
    ),

    // Stat cards
    Rule::new(
        "bg-zinc-900/40 border-white/5 hover:bg-white/5",
        "bg-white/60 dark:bg-zinc-900/40 border-black/5 dark:border-white/5 hover:bg-black/5 dark:hover:bg-white/5",
    ),
    Rule::new("text-white/10", "text-black/20 dark:text-white/10"),
    Rule::new(
        "text-white/20'}`}>{stats.urgent}",
        "text-black/50 dark:text-white/20'}`}>{stats.urgent}",
    ),
    Rule::new(
        "text-white/20'}`}>{stats.expired}",
        "text-black/50 dark:text-white/20'}`}>{stats.expired}",
    ),
    Rule::new(
        "text-[9px] font-black uppercase tracking-[0.2em] text-white/40",
        "text-[9px] font-black uppercase tracking-[0.2em] text-black/50 dark:text-white/40",
    ),

    // Stat card value tones
    Rule::new("text-blue-400", "text-blue-600 dark:text-blue-400"),
    Rule::new("text-red-400", "text-red-600 dark:text-red-400"),
    Rule::new("text-emerald-400", "text-emerald-600 dark:text-emerald-400"),
    Rule::new("text-indigo-400", "text-indigo-600 dark:text-indigo-400"),
];

pub static STATS_THEME: RuleSet = RuleSet::new("stats-theme", STATS_THEME_RULES);
