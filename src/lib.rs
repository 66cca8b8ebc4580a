#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `taglog` composes styled, tagged diagnostic lines and routes them to a
//! sink. It re-exports the three workspace crates:
//!
//! - [`tags`]: the [`Tag`] value, its rich-text rendering and parsing of
//!   configuration values.
//! - [`logging`]: the [`Composer`], its [`Settings`], the buffer pool, the tag
//!   registry and the optional process-wide composer.
//! - [`logging_sink`]: [`WriterSink`] and, with the `tracing` feature,
//!   `TracingSink`.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for tags, colours and settings.
//! - `tracing`: internal diagnostics and the tracing-backed sink.
//!
//! # Examples
//!
//! ```
//! use taglog::prelude::*;
//!
//! let settings = Settings::default();
//! let sink = WriterSink::new(Vec::new()).with_markup(Markup::Strip);
//! let composer = Composer::new(settings.clone(), sink);
//!
//! let stage = settings.end_tag("BUILD");
//! composer.log([&stage, &presets::ok()]);
//!
//! let output = composer.into_sink().into_inner();
//! assert_eq!(output, b"[DEBUG][BUILD]: [OK]\n");
//! ```

pub use logging;
pub use logging_sink;
pub use tags;

pub use logging::{
    BufferPool, Composer, Composition, LegacyTag, MemorySink, Settings, Sink, TagRegistry,
    install, log, presets, taglog,
};
pub use logging_sink::{LineMode, Markup, WriterSink};
#[cfg(feature = "tracing")]
pub use logging_sink::TracingSink;
pub use tags::{Brackets, Rgba8, Severity, Spacer, Tag, TagBuilder, TextStyle};

/// The types most programs need, for glob import.
pub mod prelude {
    pub use logging::{Composer, MemorySink, Settings, Sink, presets};
    pub use logging_sink::{LineMode, Markup, WriterSink};
    pub use tags::{Brackets, Rgba8, Severity, Spacer, Tag, TextStyle};
}
