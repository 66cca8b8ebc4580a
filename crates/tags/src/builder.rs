//! crates/tags/src/builder.rs
//! Builder producing [`Tag`] values.

use crate::color::Rgba8;
use crate::severity::Severity;
use crate::style::{Brackets, Spacer, TextStyle};
use crate::tag::Tag;

/// Accumulates tag fields and produces a new [`Tag`] on [`build`](Self::build).
///
/// Starting a builder from an existing tag ([`Tag::to_builder`]) copies it, so
/// shared defaults are never modified through the builder.
#[derive(Clone, Debug, Default)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct TagBuilder {
    tag: Tag,
}

impl TagBuilder {
    /// Creates a builder holding [`Tag::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.tag.set_text(text);
        self
    }

    /// Sets the colour.
    pub fn color(mut self, color: Rgba8) -> Self {
        self.tag.set_color(color);
        self
    }

    /// Sets the emphasis style.
    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.tag.set_text_style(text_style);
        self
    }

    /// Sets the bracket style.
    pub fn brackets(mut self, brackets: Brackets) -> Self {
        self.tag.set_brackets(brackets);
        self
    }

    /// Sets the trailing spacer.
    pub fn spacer(mut self, spacer: Spacer) -> Self {
        self.tag.set_spacer(spacer);
        self
    }

    /// Sets the severity.
    pub fn severity(mut self, severity: Severity) -> Self {
        self.tag.set_severity(severity);
        self
    }

    /// Sets the enabled flag.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.tag.set_enabled(enabled);
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> Tag {
        self.tag
    }
}

impl From<Tag> for TagBuilder {
    fn from(tag: Tag) -> Self {
        Self { tag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_every_field() {
        let tag = TagBuilder::new()
            .text("DB")
            .color(Rgba8::BLUE)
            .text_style(TextStyle::Italic)
            .brackets(Brackets::Curly)
            .spacer(Spacer::Comma)
            .severity(Severity::Warning)
            .enabled(false)
            .build();

        assert_eq!(tag.text(), "DB");
        assert_eq!(tag.color(), Rgba8::BLUE);
        assert_eq!(tag.text_style(), TextStyle::Italic);
        assert_eq!(tag.brackets(), Brackets::Curly);
        assert_eq!(tag.spacer(), Spacer::Comma);
        assert_eq!(tag.severity(), Severity::Warning);
        assert!(!tag.is_enabled());
    }

    #[test]
    fn to_builder_leaves_source_untouched() {
        let base = Tag::new("BASE").with_brackets(Brackets::Square);
        let expected = base.rendered().to_owned();

        let derived = base.to_builder().text("DERIVED").build();

        assert_eq!(base.rendered(), expected);
        assert_eq!(derived.rendered(), "<color=#FFFFFFFF>[DERIVED]</color>");
    }

    #[test]
    fn default_builder_builds_default_tag() {
        let tag = TagBuilder::new().build();
        assert_eq!(tag, Tag::default());
        assert!(tag.is_enabled());
    }
}
