//! crates/logging/src/settings.rs
//!
//! Composition settings and the tag factories derived from them.
//!
//! A [`Settings`] value is handed to a [`Composer`](crate::Composer) when it is
//! built and is read-only afterwards. Reconfiguring means building a new
//! composer. The factories ([`Settings::text`], [`Settings::tag`], ...) start
//! from copies of the configured default tags, so the defaults themselves are
//! never modified.

use std::any;

use tags::{Brackets, Tag, TextStyle};

use crate::presets;

/// Composition policy and default tags.
///
/// # Defaults
///
/// | field | default |
/// |---|---|
/// | `debug_enabled` | `true` |
/// | `prefix_default_tag` | `true` |
/// | `suppress_on_disabled_tag` | `false` |
/// | `default_tag` | [`presets::prefix`] |
/// | `default_text` | [`presets::text`] |
/// | `default_space` | [`presets::space`] |
///
/// # Examples
///
/// ```
/// use logging::Settings;
///
/// let settings = Settings::default().with_prefix_default_tag(false);
/// let label = settings.label("Loaded");
/// assert_eq!(label.rendered(), "<color=#C8C8C8FF>Loaded</color>: ");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// When `false`, logging is a no-op.
    pub debug_enabled: bool,
    /// Prepend [`default_tag`](Self::default_tag) to every line.
    pub prefix_default_tag: bool,
    /// Drop the whole line when it contains an absent or disabled tag,
    /// instead of skipping that tag.
    pub suppress_on_disabled_tag: bool,
    /// Line prefix and template for [`tag`](Self::tag).
    pub default_tag: Option<Tag>,
    /// Template for [`text`](Self::text).
    pub default_text: Tag,
    /// Supplies the spacer used by [`label`](Self::label) and [`end_tag`](Self::end_tag).
    pub default_space: Tag,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_enabled: true,
            prefix_default_tag: true,
            suppress_on_disabled_tag: false,
            default_tag: Some(presets::prefix()),
            default_text: presets::text(),
            default_space: presets::space(),
        }
    }
}

impl Settings {
    /// Returns the settings with `debug_enabled` replaced.
    #[must_use]
    pub const fn with_debug_enabled(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Returns the settings with `prefix_default_tag` replaced.
    #[must_use]
    pub const fn with_prefix_default_tag(mut self, prefix: bool) -> Self {
        self.prefix_default_tag = prefix;
        self
    }

    /// Returns the settings with `suppress_on_disabled_tag` replaced.
    #[must_use]
    pub const fn with_suppress_on_disabled_tag(mut self, suppress: bool) -> Self {
        self.suppress_on_disabled_tag = suppress;
        self
    }

    /// Returns the settings with `default_tag` replaced.
    #[must_use]
    pub fn with_default_tag(mut self, tag: Option<Tag>) -> Self {
        self.default_tag = tag;
        self
    }

    /// Returns the settings with `default_text` replaced.
    #[must_use]
    pub fn with_default_text(mut self, tag: Tag) -> Self {
        self.default_text = tag;
        self
    }

    /// Returns the settings with `default_space` replaced.
    #[must_use]
    pub fn with_default_space(mut self, tag: Tag) -> Self {
        self.default_space = tag;
        self
    }

    /// A copy of `default_text` holding `text`.
    #[must_use]
    pub fn text(&self, text: impl Into<String>) -> Tag {
        self.default_text.clone().with_text(text)
    }

    /// A copy of `default_tag` holding `text`.
    ///
    /// Falls back to [`Tag::default`] when no default tag is configured.
    #[must_use]
    pub fn tag(&self, text: impl Into<String>) -> Tag {
        self.default_tag
            .clone()
            .unwrap_or_default()
            .with_text(text)
    }

    /// A [`tag`](Self::tag) naming the type `T`.
    ///
    /// The module path is dropped and generic arguments are kept, so
    /// `Vec<String>` renders as `[Vec<String>]` rather than the fully
    /// qualified path.
    #[must_use]
    pub fn type_name_tag<T: ?Sized>(&self) -> Tag {
        self.tag(short_type_name(any::type_name::<T>()))
    }

    /// A [`text`](Self::text) followed by the `default_space` spacer.
    #[must_use]
    pub fn label(&self, text: impl Into<String>) -> Tag {
        self.text(text).with_spacer(self.default_space.spacer())
    }

    /// A [`tag`](Self::tag) followed by the `default_space` spacer.
    #[must_use]
    pub fn end_tag(&self, text: impl Into<String>) -> Tag {
        self.tag(text).with_spacer(self.default_space.spacer())
    }

    /// Bold [`text`](Self::text).
    #[must_use]
    pub fn bold_text(&self, text: impl Into<String>) -> Tag {
        self.text(text).with_text_style(TextStyle::Bold)
    }

    /// Italic [`text`](Self::text).
    #[must_use]
    pub fn italic_text(&self, text: impl Into<String>) -> Tag {
        self.text(text).with_text_style(TextStyle::Italic)
    }

    /// Bold italic [`text`](Self::text).
    #[must_use]
    pub fn bold_italic_text(&self, text: impl Into<String>) -> Tag {
        self.text(text).with_text_style(TextStyle::BoldItalic)
    }

    /// A [`tag`](Self::tag) in square brackets.
    #[must_use]
    pub fn square_tag(&self, text: impl Into<String>) -> Tag {
        self.tag(text).with_brackets(Brackets::Square)
    }

    /// A [`tag`](Self::tag) in round brackets.
    #[must_use]
    pub fn round_tag(&self, text: impl Into<String>) -> Tag {
        self.tag(text).with_brackets(Brackets::Round)
    }

    /// A [`tag`](Self::tag) in curly brackets.
    #[must_use]
    pub fn curly_tag(&self, text: impl Into<String>) -> Tag {
        self.tag(text).with_brackets(Brackets::Curly)
    }
}

/// Strips module paths from every path segment of a type name.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut start = 0;

    for (index, ch) in full.char_indices() {
        if matches!(
            ch,
            '<' | '>' | ',' | '(' | ')' | '[' | ']' | ';' | '&' | '*' | ' '
        ) {
            push_last_segment(&mut out, &full[start..index]);
            out.push(ch);
            start = index + ch.len_utf8();
        }
    }
    push_last_segment(&mut out, &full[start..]);

    out
}

fn push_last_segment(out: &mut String, path: &str) {
    out.push_str(path.rsplit("::").next().unwrap_or(path));
}
