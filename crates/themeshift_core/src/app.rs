//! Application metadata constants

/// Page rewritten when no path is given
pub const DEFAULT_TARGET: &str = "src/pages/Stats.tsx";
/// Environment variable overriding the target page
pub const TARGET_ENV: &str = "THEMESHIFT_TARGET";
/// Printed once after a successful write
pub const COMPLETION_MESSAGE: &str = "Stats.tsx Updated!";
