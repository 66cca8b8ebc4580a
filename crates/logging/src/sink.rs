//! crates/logging/src/sink.rs
//!
//! The [`Sink`] seam between a [`Composer`](crate::Composer) and the host
//! environment, plus the in-process sinks shipped with this crate.
//!
//! A sink receives each composed line exactly once together with its
//! aggregated [`Severity`]. Sinks that write to an external destination live
//! in the `logging-sink` crate.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tags::Severity;

use crate::composer::Composition;

/// Destination for composed log lines.
///
/// `emit` is called at most once per [`Composer::log`](crate::Composer::log)
/// call and may be called concurrently from several threads.
pub trait Sink: Send + Sync {
    /// Delivers one composed line.
    fn emit(&self, severity: Severity, text: String);
}

impl<S: Sink + ?Sized> Sink for &S {
    fn emit(&self, severity: Severity, text: String) {
        (**self).emit(severity, text);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&self, severity: Severity, text: String) {
        (**self).emit(severity, text);
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn emit(&self, severity: Severity, text: String) {
        (**self).emit(severity, text);
    }
}

/// Host logging facilities with one entry point per severity.
///
/// Wrap an implementation in [`ChannelSink`] to use it as a [`Sink`].
pub trait SeverityChannels: Send + Sync {
    /// Receives informational lines.
    fn info(&self, text: String);
    /// Receives warnings.
    fn warning(&self, text: String);
    /// Receives errors.
    fn error(&self, text: String);
}

/// Adapts a [`SeverityChannels`] implementation into a [`Sink`].
///
/// Each line is routed to exactly one channel according to its severity.
#[derive(Clone, Debug, Default)]
pub struct ChannelSink<C>(C);

impl<C> ChannelSink<C> {
    /// Wraps `channels`.
    pub const fn new(channels: C) -> Self {
        Self(channels)
    }

    /// Returns the wrapped channels.
    pub const fn get_ref(&self) -> &C {
        &self.0
    }

    /// Unwraps the channels.
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C: SeverityChannels> Sink for ChannelSink<C> {
    fn emit(&self, severity: Severity, text: String) {
        match severity {
            Severity::Info => self.0.info(text),
            Severity::Warning => self.0.warning(text),
            Severity::Error => self.0.error(text),
        }
    }
}

/// Adapts a closure into a [`Sink`].
///
/// ```
/// use logging::{FnSink, Sink};
/// use tags::Severity;
///
/// let sink = FnSink::new(|severity: Severity, text: String| {
///     assert_eq!(severity, Severity::Info);
///     assert_eq!(text, "ready");
/// });
/// sink.emit(Severity::Info, "ready".to_owned());
/// ```
#[derive(Clone, Copy)]
pub struct FnSink<F>(F);

impl<F> FnSink<F>
where
    F: Fn(Severity, String) + Send + Sync,
{
    /// Wraps `emit`.
    pub const fn new(emit: F) -> Self {
        Self(emit)
    }
}

impl<F> Sink for FnSink<F>
where
    F: Fn(Severity, String) + Send + Sync,
{
    fn emit(&self, severity: Severity, text: String) {
        (self.0)(severity, text);
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}

/// A sink that discards every line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullSink;

impl Sink for NullSink {
    fn emit(&self, _severity: Severity, _text: String) {}
}

/// A sink that records every line in memory.
///
/// Useful for tests and for hosts that batch output themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Composition>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded lines, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<Composition> {
        self.lock().clone()
    }

    /// Removes and returns the recorded lines, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Composition> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns the most recent line.
    #[must_use]
    pub fn last(&self) -> Option<Composition> {
        self.lock().last().cloned()
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Composition>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn emit(&self, severity: Severity, text: String) {
        self.lock().push(Composition { severity, text });
    }
}
