//! Logging facilities for dotpager.
//!
//! dotpager uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("dotpager=debug,dotpager_core=debug")
//!     .init();
//! ```
//!
//! The constants in [`targets`] name each subsystem so filters can pick
//! them individually.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "dotpager_core";
    /// Animated values and timing curves.
    pub const ANIMATION: &str = "dotpager_core::animation";
    /// Signal emission.
    pub const SIGNAL: &str = "dotpager_core::signal";
    /// Pixel rounding and clamping.
    pub const NUMERIC: &str = "dotpager_core::numeric";
    /// The composite indicator.
    pub const INDICATOR: &str = "dotpager::indicator";
    /// Layout and measurement.
    pub const LAYOUT: &str = "dotpager::layout";
    /// Configuration loading.
    pub const CONFIG: &str = "dotpager::config";
    /// Scroll-driven progress.
    pub const SCROLL: &str = "dotpager::scroll";
    /// Performance spans.
    pub const PERF: &str = "dotpager::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for timing paint passes:
///
/// ```
/// use dotpager_core::logging::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("paint");
///     // ... work ...
/// }
/// ```
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "dotpager::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
