//! crates/logging-sink/src/diagnostics.rs
//!
//! Reports failures that sinks swallow so that logging never interrupts the
//! caller. Compiles to no-ops without the `tracing` feature.

use std::io;

/// Target name for sink events.
#[cfg(feature = "tracing")]
const SINK_TARGET: &str = "taglog::sink";

/// Reports a write that failed and was dropped.
#[cfg(feature = "tracing")]
#[inline]
pub fn write_failed(error: &io::Error) {
    tracing::warn!(
        target: SINK_TARGET,
        error = %error,
        kind = ?error.kind(),
        "sink: dropping line after write failure"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn write_failed(_error: &io::Error) {}
