
pub(crate) const STATS_DARK: &str = include_str!("fixtures/stats_dark.tsx");
pub(crate) const STATS_ADAPTIVE: &str = include_str!("fixtures/stats_adaptive.tsx");
