//! Utility functions for tracing

/// Create a span for one CLI command run against a target page
///
/// Declares empty `duration_ms`, `error` and `error.message` fields so
/// [`record_duration`] and [`record_error`] can fill them in later.
///
/// # Example
///
/// ```rust
/// use themeshift_observability::command_span;
///
/// let span = command_span!("apply", "src/pages/Stats.tsx");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! command_span {
    ($command:expr, $target:expr) => {
        tracing::info_span!(
            "command",
            command = $command,
            page.path = %$target,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span
///
/// Logged at debug level only; the caller reports the error to the user.
pub fn record_error(error: &dyn std::error::Error) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::debug!(error = %error, "Operation failed");
}

/// Record latency/duration on the current span
///
/// # Example
///
/// ```rust
/// use themeshift_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// record_duration("duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
