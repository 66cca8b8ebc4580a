#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/tags/src/lib.rs
//!
//! # Overview
//!
//! `tags` defines the value model for composed log lines: a [`Tag`] is one
//! styled fragment (text, [`Rgba8`] colour, [`TextStyle`], [`Brackets`],
//! [`Spacer`]) together with the [`Severity`] it contributes and an enabled
//! flag.
//!
//! # Design
//!
//! Rendering is a pure function ([`render`]) of the five visible fields. A
//! [`Tag`] memoizes its rendering in a once-initialized cell so repeated
//! composition of a long-lived tag costs a pointer read. Only the setters that
//! touch visible fields reset the memo.
//!
//! Tags are built either with [`TagBuilder`] or with the consuming `with_*`
//! functions, both of which produce new values instead of mutating a shared
//! instance.
//!
//! # Invariants
//!
//! - A memoized rendering always equals `render(text, color, style, brackets, spacer)`.
//! - Equality and hashing cover the visible fields only.
//! - Cloning copies the memo; the clone's memo is independent afterwards.
//!
//! # Errors
//!
//! Parsing configuration strings yields [`ParseColorError`] or
//! [`ParseStyleError`]; converting a raw discriminant into a [`Severity`]
//! yields [`InvalidSeverity`].
//!
//! # Examples
//!
//! ```
//! use tags::{Brackets, Rgba8, Spacer, Tag, TextStyle};
//!
//! let tag = Tag::new("DATA")
//!     .with_color(Rgba8::new(10, 20, 30, 255))
//!     .with_text_style(TextStyle::BoldItalic)
//!     .with_brackets(Brackets::Round)
//!     .with_spacer(Spacer::Colon);
//!
//! assert_eq!(tag.rendered(), "<i><b><color=#0A141EFF>(DATA)</color></b></i>: ");
//! ```

mod builder;
mod color;
mod render;
mod severity;
mod style;
mod tag;

pub use builder::TagBuilder;
pub use color::{ParseColorError, Rgba8};
pub use render::{render, render_into, rendered_len};
pub use severity::{InvalidSeverity, Severity};
pub use style::{Brackets, ParseStyleError, Spacer, TextStyle};
pub use tag::Tag;
