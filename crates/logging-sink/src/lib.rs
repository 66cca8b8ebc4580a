#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides [`Sink`](logging::Sink) implementations that carry
//! composed tag lines out of the process: [`WriterSink`] streams them to any
//! [`std::io::Write`] implementor and, with the `tracing` feature,
//! `TracingSink` records them as `tracing` events.
//!
//! # Design
//!
//! [`WriterSink`] keeps its writer behind a mutex and writes each line in one
//! critical section. Callers choose whether lines end with a newline by
//! selecting a [`LineMode`], whether the severity label is written first, and
//! whether the rich-text markup is kept or stripped ([`Markup`]).
//!
//! # Invariants
//!
//! - Lines from concurrent `emit` calls are never interleaved.
//! - [`strip_markup`] removes only the tags produced by tag rendering; other
//!   angle brackets survive.
//! - `LineMode::WithNewline` writes exactly one `\n` per line.
//!
//! # Errors
//!
//! [`WriterSink::write_line`] and [`WriterSink::flush`] surface
//! [`std::io::Error`] values from the underlying writer. Through
//! [`Sink::emit`](logging::Sink::emit) the same failures are reported as
//! diagnostics and dropped, since logging never fails its caller.
//!
//! # Examples
//!
//! ```
//! use logging::{Composer, Settings, presets};
//! use logging_sink::{LineMode, Markup, WriterSink};
//!
//! let sink = WriterSink::new(Vec::new())
//!     .with_line_mode(LineMode::WithoutNewline)
//!     .with_markup(Markup::Strip);
//! let settings = Settings::default().with_prefix_default_tag(false);
//! let composer = Composer::new(settings.clone(), sink);
//!
//! composer.log([&presets::ok(), &settings.text(" synced")]);
//!
//! let output = String::from_utf8(composer.into_sink().into_inner()).expect("utf-8");
//! assert_eq!(output, "[OK] synced");
//! ```

mod diagnostics;
mod line_mode;
mod markup;
#[cfg(feature = "tracing")]
mod tracing_sink;
mod writer;

pub use line_mode::LineMode;
pub use markup::{Markup, strip_markup};
#[cfg(feature = "tracing")]
pub use tracing_sink::{TRACING_TARGET, TracingSink};
pub use writer::WriterSink;
