//! crates/logging-sink/src/writer.rs
//!
//! [`WriterSink`]: a [`Sink`] that writes each composed line to an
//! [`io::Write`] implementor.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use logging::Sink;
use tags::Severity;

use crate::diagnostics;
use crate::line_mode::LineMode;
use crate::markup::Markup;

/// Writes composed lines to a writer.
///
/// The writer sits behind a mutex so a line from one thread is written in full
/// before a line from another starts. Each line may be preceded by its
/// severity label (`warning: `), have its markup stripped, and be terminated
/// according to the [`LineMode`].
///
/// Write failures are reported through the crate's diagnostics and otherwise
/// ignored when the sink is driven through [`Sink::emit`]. Call
/// [`write_line`](Self::write_line) directly to observe them.
///
/// # Examples
///
/// ```
/// use logging::{Composer, Settings, presets};
/// use logging_sink::{Markup, WriterSink};
///
/// let sink = WriterSink::new(Vec::new())
///     .with_markup(Markup::Strip)
///     .with_severity_labels(true);
/// let composer = Composer::new(Settings::default(), sink);
///
/// composer.log([&presets::warning()]);
///
/// let output = composer.into_sink().into_inner();
/// assert_eq!(output, b"warning: [DEBUG][WARNING]\n");
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
    markup: Markup,
    severity_labels: bool,
}

impl<W> WriterSink<W> {
    /// Wraps `writer` with newline-terminated lines, markup kept and no
    /// severity labels.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode: LineMode::WithNewline,
            markup: Markup::Keep,
            severity_labels: false,
        }
    }

    /// Returns the sink with `line_mode` replaced.
    #[must_use]
    pub const fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Returns the sink with `markup` replaced.
    #[must_use]
    pub const fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    /// Returns the sink with severity labels switched on or off.
    #[must_use]
    pub const fn with_severity_labels(mut self, enabled: bool) -> Self {
        self.severity_labels = enabled;
        self
    }

    /// The configured line mode.
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// The configured markup handling.
    #[must_use]
    pub const fn markup(&self) -> Markup {
        self.markup
    }

    /// Whether lines are prefixed with their severity label.
    #[must_use]
    pub const fn severity_labels(&self) -> bool {
        self.severity_labels
    }

    /// Unwraps the writer.
    ///
    /// Buffered data inside the writer is not flushed.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> WriterSink<W> {
    /// Writes one line and reports any I/O error.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the underlying writer.
    pub fn write_line(&self, severity: Severity, text: &str) -> io::Result<()> {
        let text = self.markup.apply(text);
        let mut writer = self.lock();

        if self.severity_labels {
            writer.write_all(severity.label().as_bytes())?;
            writer.write_all(b": ")?;
        }
        writer.write_all(text.as_bytes())?;
        writer.write_all(self.line_mode.terminator())
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl WriterSink<io::Stdout> {
    /// A sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<io::Stderr> {
    /// A sink writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn emit(&self, severity: Severity, text: String) {
        if let Err(error) = self.write_line(severity, &text) {
            diagnostics::write_failed(&error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    const LINE: &str = "<b><color=#FF0000FF>[ERROR]</color></b>";

    #[test]
    fn defaults() {
        let sink = WriterSink::new(Vec::<u8>::new());
        assert_eq!(sink.line_mode(), LineMode::WithNewline);
        assert_eq!(sink.markup(), Markup::Keep);
        assert!(!sink.severity_labels());
    }

    #[test]
    fn writes_line_with_newline() {
        let sink = WriterSink::new(Vec::new());
        sink.emit(Severity::Error, LINE.to_owned());
        assert_eq!(sink.into_inner(), format!("{LINE}\n").into_bytes());
    }

    #[test]
    fn without_newline_concatenates() {
        let sink = WriterSink::new(Vec::new()).with_line_mode(LineMode::WithoutNewline);
        sink.emit(Severity::Info, "a".to_owned());
        sink.emit(Severity::Info, "b".to_owned());
        assert_eq!(sink.into_inner(), b"ab");
    }

    #[test]
    fn labels_and_stripping() {
        let sink = WriterSink::new(Vec::new())
            .with_severity_labels(true)
            .with_markup(Markup::Strip);
        sink.emit(Severity::Error, LINE.to_owned());
        sink.emit(Severity::Info, "<i>done</i>".to_owned());
        assert_eq!(sink.into_inner(), b"error: [ERROR]\ninfo: done\n");
    }

    #[test]
    fn write_line_reports_errors() {
        let sink = WriterSink::new(FailingWriter);
        let error = sink
            .write_line(Severity::Info, "x")
            .expect_err("writer always fails");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        assert!(sink.flush().is_err());
    }

    #[test]
    fn emit_swallows_errors() {
        let sink = WriterSink::new(FailingWriter);
        sink.emit(Severity::Warning, "x".to_owned());
    }

    #[test]
    fn std_stream_constructors() {
        let _ = WriterSink::stdout().line_mode();
        let _ = WriterSink::stderr().markup();
    }
}
