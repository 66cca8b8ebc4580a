#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` turns ordered sequences of [`Tag`]s into single rich-text log
//! lines. A [`Composer`] filters the tags according to its [`Settings`],
//! concatenates their memoized renderings into a pooled buffer, computes the
//! highest [`Severity`] among them and hands the line to a [`Sink`].
//!
//! # Design
//!
//! - [`Composer`] owns an immutable [`Settings`] value injected at
//!   construction. There is no mutable global configuration.
//! - Buffers come from a [`BufferPool`]; a [`BufferGuard`] releases them on
//!   every exit path, so an aborted composition never leaks partial text into
//!   the next one.
//! - [`Sink`] is the only seam to the host. In-process sinks ([`MemorySink`],
//!   [`FnSink`], [`NullSink`], [`ChannelSink`]) live here; writer-backed and
//!   `tracing`-backed sinks live in `logging-sink`.
//! - [`TagRegistry`] resolves keyed tags with a fallback for unknown keys.
//! - [`install`] and [`taglog!`] provide an optional process-wide composer.
//!
//! # Invariants
//!
//! - `Sink::emit` runs at most once per [`Composer::log`] call.
//! - A composed line contains the enabled tags in input order.
//! - The prefix tag never contributes to the line severity.
//! - Severity aggregation stops comparing once [`Severity::Error`] is reached.
//!
//! # Errors
//!
//! Logging itself never fails. The only fallible operation is [`install`],
//! which reports [`AlreadyInstalled`].
//!
//! # Examples
//!
//! ```
//! use logging::{Composer, MemorySink, Settings, presets};
//! use tags::Severity;
//!
//! let settings = Settings::default().with_prefix_default_tag(false);
//! let composer = Composer::new(settings.clone(), MemorySink::new());
//!
//! let failed = presets::error();
//! let detail = settings.text(" connection reset");
//! composer.log([&failed, &detail]);
//!
//! let line = composer.sink().last().expect("one line");
//! assert_eq!(line.severity, Severity::Error);
//! assert_eq!(
//!     line.text,
//!     "<b><color=#FF0000FF>[ERROR]</color></b><color=#C8C8C8FF> connection reset</color>"
//! );
//! ```

mod composer;
mod diagnostics;
mod global;
pub mod pool;
pub mod presets;
mod registry;
mod settings;
mod sink;

pub use composer::{Composer, Composition};
pub use global::{AlreadyInstalled, GlobalComposer, install, installed, log, log_slice};
pub use pool::{BufferGuard, BufferPool};
pub use registry::{LegacyTag, TagRegistry};
pub use settings::Settings;
pub use sink::{ChannelSink, FnSink, MemorySink, NullSink, SeverityChannels, Sink};
pub use tags::{Brackets, Rgba8, Severity, Spacer, Tag, TagBuilder, TextStyle};
