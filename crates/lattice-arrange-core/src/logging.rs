//! Logging facilities for lattice-arrange.
//!
//! lattice-arrange uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("lattice_arrange=debug")
//!         .init();
//! }
//! ```
//!
//! Rebuilds log at `debug`, per-element deltas and signal emission at
//! `trace`.

/// Span names used throughout lattice-arrange for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Full rearrangement of the arranged items.
    pub const REBUILD: &str = "lattice_arrange::rebuild";
    /// Incremental content delta.
    pub const DELTA: &str = "lattice_arrange::delta";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "lattice_arrange_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_arrange_core::signal";
    /// Content sequence target.
    pub const CONTENT: &str = "lattice_arrange_core::content";
    /// Arrangement engine target.
    pub const ARRANGEMENT: &str = "lattice_arrange::arrangement";
    /// Selection tracker target.
    pub const SELECTION: &str = "lattice_arrange::selection";
    /// Array controller target.
    pub const CONTROLLER: &str = "lattice_arrange::controller";
    /// Performance spans.
    pub const PERF: &str = "lattice_arrange::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations such as a full
/// rearrangement.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
