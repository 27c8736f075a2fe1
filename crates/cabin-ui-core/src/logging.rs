//! Logging and tracing facilities for Cabin UI.
//!
//! Cabin UI uses the `tracing` crate for instrumentation. Install a
//! subscriber in the host application to see the output:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("cabin_ui::layout=trace")
//!     .init();
//! ```
//!
//! Layout passes log each measured slot at `trace` level and the resolved
//! toolbar size at `debug` level under [`targets::LAYOUT`].

/// Span names used throughout Cabin UI for tracing.
pub mod span_names {
    /// Toolbar measure pass.
    pub const MEASURE: &str = "cabin_ui::measure";
    /// Toolbar layout pass.
    pub const LAYOUT: &str = "cabin_ui::layout";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal system target.
    pub const SIGNAL: &str = "cabin_ui_core::signal";
    /// Measure and layout passes.
    pub const LAYOUT: &str = "cabin_ui::layout";
    /// Widget state changes (setters, invalidation).
    pub const WIDGET: &str = "cabin_ui::widget";
    /// Resource resolution.
    pub const RESOURCE: &str = "cabin_ui::resource";
    /// Configuration loading.
    pub const CONFIG: &str = "cabin_ui::config";
    /// Performance spans.
    pub const PERF: &str = "cabin_ui::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time measure and layout passes.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
