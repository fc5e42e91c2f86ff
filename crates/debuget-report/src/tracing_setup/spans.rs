//! Span definitions per report stage.

/// Span wrapping one report, from classification to rendering.
#[macro_export]
macro_rules! report_span {
    ($category:expr) => {
        tracing::debug_span!("debuget.report", category = %$category)
    };
}

/// Span wrapping stack resolution.
#[macro_export]
macro_rules! resolve_span {
    ($depth:expr) => {
        tracing::debug_span!("debuget.resolve", stack_depth = $depth)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const REPORT: &str = "debuget.report";
    pub const RESOLVE: &str = "debuget.resolve";
}
