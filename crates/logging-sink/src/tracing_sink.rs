//! crates/logging-sink/src/tracing_sink.rs
//! Forwarding of composed lines into the `tracing` ecosystem.

use logging::Sink;
use tags::Severity;

use crate::markup::strip_markup;

/// Target under which forwarded lines are recorded.
pub const TRACING_TARGET: &str = "taglog";

/// A [`Sink`] that records each line as a `tracing` event.
///
/// [`Severity::Info`], [`Severity::Warning`] and [`Severity::Error`] map to
/// the `INFO`, `WARN` and `ERROR` levels. Markup is stripped since tracing
/// subscribers do not interpret it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn emit(&self, severity: Severity, text: String) {
        let line = strip_markup(&text);
        match severity {
            Severity::Info => tracing::info!(target: TRACING_TARGET, "{line}"),
            Severity::Warning => tracing::warn!(target: TRACING_TARGET, "{line}"),
            Severity::Error => tracing::error!(target: TRACING_TARGET, "{line}"),
        }
    }
}
