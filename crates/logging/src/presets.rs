//! crates/logging/src/presets.rs
//! Stock tags used by [`Settings::default`](crate::Settings) and the built-in registry.

use tags::{Brackets, Rgba8, Severity, Spacer, Tag, TextStyle};

/// Text of the stock line prefix.
pub const PREFIX_TEXT: &str = "DEBUG";

/// Text of the stock body fragment.
pub const BODY_TEXT: &str = "Debug";

/// Text of the fallback tag for unknown registry keys.
pub const UNKNOWN_TEXT: &str = "UNKNOWN";

/// The stock line prefix: `[DEBUG]` in light grey.
#[must_use]
pub fn prefix() -> Tag {
    Tag::new(PREFIX_TEXT)
        .with_color(Rgba8::LIGHT_GRAY)
        .with_brackets(Brackets::Square)
}

/// The stock body fragment: bare light grey text.
#[must_use]
pub fn text() -> Tag {
    Tag::new(BODY_TEXT).with_color(Rgba8::LIGHT_GRAY)
}

/// The stock separator fragment: empty text followed by `": "`.
#[must_use]
pub fn space() -> Tag {
    Tag::empty()
        .with_color(Rgba8::LIGHT_GRAY)
        .with_spacer(Spacer::Colon)
}

/// `[OK]` in dark green.
#[must_use]
pub fn ok() -> Tag {
    prefix().with_text("OK").with_color(Rgba8::DARK_GREEN)
}

/// `[WARNING]` in bold yellow, raising the line to [`Severity::Warning`].
#[must_use]
pub fn warning() -> Tag {
    prefix()
        .with_text("WARNING")
        .with_color(Rgba8::YELLOW)
        .with_text_style(TextStyle::Bold)
        .with_severity(Severity::Warning)
}

/// `[ERROR]` in bold red, raising the line to [`Severity::Error`].
#[must_use]
pub fn error() -> Tag {
    prefix()
        .with_text("ERROR")
        .with_color(Rgba8::RED)
        .with_text_style(TextStyle::Bold)
        .with_severity(Severity::Error)
}

/// `[UNKNOWN]` in orange, used when a registry lookup misses.
#[must_use]
pub fn unknown() -> Tag {
    prefix().with_text(UNKNOWN_TEXT).with_color(Rgba8::ORANGE)
}
