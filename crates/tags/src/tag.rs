//! crates/tags/src/tag.rs
//! The [`Tag`] value and its memoized rendering.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::builder::TagBuilder;
use crate::color::Rgba8;
use crate::render::render;
use crate::severity::Severity;
use crate::style::{Brackets, Spacer, TextStyle};

/// One styled fragment of a composed log line.
///
/// A tag carries five *visible* fields (text, colour, text style, brackets and
/// spacer), which fully determine its [rendering](Self::rendered), plus two
/// *policy* fields: the [`Severity`] it contributes and whether it is enabled.
///
/// # Caching
///
/// The rendering is computed on first use and memoized. Only the setters for
/// visible fields reset the memo; changing the severity or the enabled flag
/// keeps it. Readers on several threads may call [`rendered`](Self::rendered)
/// on a shared tag at once because the memo lives in a [`OnceLock`].
///
/// # Equality
///
/// Equality and hashing consider the visible fields only. Two tags that render
/// identically are equal even if their severity or enabled state differ.
///
/// # Examples
///
/// ```
/// use tags::{Brackets, Rgba8, Severity, Tag};
///
/// let tag = Tag::builder()
///     .text("NET")
///     .color(Rgba8::ORANGE)
///     .brackets(Brackets::Square)
///     .severity(Severity::Warning)
///     .build();
///
/// assert_eq!(tag.rendered(), "<color=#FF8000FF>[NET]</color>");
/// assert_eq!(tag.severity(), Severity::Warning);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tag {
    text: String,
    color: Rgba8,
    text_style: TextStyle,
    brackets: Brackets,
    spacer: Spacer,
    severity: Severity,
    enabled: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    rendered: OnceLock<String>,
}

impl Tag {
    /// Creates an enabled, white, unstyled tag holding `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::empty()
        }
    }

    /// Creates an enabled tag with empty text and default formatting.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            color: Rgba8::WHITE,
            text_style: TextStyle::Regular,
            brackets: Brackets::None,
            spacer: Spacer::None,
            severity: Severity::Info,
            enabled: true,
            rendered: OnceLock::new(),
        }
    }

    /// Starts a [`TagBuilder`] from the defaults.
    pub fn builder() -> TagBuilder {
        TagBuilder::new()
    }

    /// Starts a [`TagBuilder`] from a copy of this tag.
    pub fn to_builder(&self) -> TagBuilder {
        TagBuilder::from(self.clone())
    }

    /// The raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The colour.
    #[must_use]
    pub const fn color(&self) -> Rgba8 {
        self.color
    }

    /// The emphasis style.
    #[must_use]
    pub const fn text_style(&self) -> TextStyle {
        self.text_style
    }

    /// The bracket style.
    #[must_use]
    pub const fn brackets(&self) -> Brackets {
        self.brackets
    }

    /// The trailing spacer.
    #[must_use]
    pub const fn spacer(&self) -> Spacer {
        self.spacer
    }

    /// The severity this tag contributes to a composed line.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether the tag takes part in composition.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the rich-text rendering, computing it on first use.
    #[must_use]
    pub fn rendered(&self) -> &str {
        self.rendered.get_or_init(|| {
            render(
                &self.text,
                self.color,
                self.text_style,
                self.brackets,
                self.spacer,
            )
        })
    }

    /// Reports whether a memoized rendering is currently held.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.rendered.get().is_some()
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalidate();
    }

    /// Replaces the colour.
    pub fn set_color(&mut self, color: Rgba8) {
        self.color = color;
        self.invalidate();
    }

    /// Replaces the emphasis style.
    pub fn set_text_style(&mut self, text_style: TextStyle) {
        self.text_style = text_style;
        self.invalidate();
    }

    /// Replaces the bracket style.
    pub fn set_brackets(&mut self, brackets: Brackets) {
        self.brackets = brackets;
        self.invalidate();
    }

    /// Replaces the trailing spacer.
    pub fn set_spacer(&mut self, spacer: Spacer) {
        self.spacer = spacer;
        self.invalidate();
    }

    /// Replaces the severity. The memoized rendering is kept.
    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    /// Enables or disables the tag. The memoized rendering is kept.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns the tag with `text` replaced.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Returns the tag with `color` replaced.
    #[must_use]
    pub fn with_color(mut self, color: Rgba8) -> Self {
        self.set_color(color);
        self
    }

    /// Returns the tag with `text_style` replaced.
    #[must_use]
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.set_text_style(text_style);
        self
    }

    /// Returns the tag with `brackets` replaced.
    #[must_use]
    pub fn with_brackets(mut self, brackets: Brackets) -> Self {
        self.set_brackets(brackets);
        self
    }

    /// Returns the tag with `spacer` replaced.
    #[must_use]
    pub fn with_spacer(mut self, spacer: Spacer) -> Self {
        self.set_spacer(spacer);
        self
    }

    /// Returns the tag with `severity` replaced.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.set_severity(severity);
        self
    }

    /// Returns the tag with the enabled flag replaced.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    fn invalidate(&mut self) {
        self.rendered.take();
    }

    const fn visible_fields(&self) -> (&String, Rgba8, TextStyle, Brackets, Spacer) {
        (
            &self.text,
            self.color,
            self.text_style,
            self.brackets,
            self.spacer,
        )
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.visible_fields() == other.visible_fields()
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.visible_fields().hash(state);
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("text", &self.text)
            .field("color", &self.color)
            .field("text_style", &self.text_style)
            .field("brackets", &self.brackets)
            .field("spacer", &self.spacer)
            .field("severity", &self.severity)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rendered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(tag: &Tag) -> u64 {
        let mut hasher = DefaultHasher::new();
        tag.hash(&mut hasher);
        hasher.finish()
    }

    fn data_tag() -> Tag {
        Tag::new("DATA")
            .with_color(Rgba8::new(10, 20, 30, 255))
            .with_text_style(TextStyle::BoldItalic)
            .with_brackets(Brackets::Round)
            .with_spacer(Spacer::Colon)
    }

    #[test]
    fn empty_matches_default() {
        let tag = Tag::default();
        assert_eq!(tag, Tag::empty());
        assert!(tag.is_enabled());
        assert_eq!(tag.severity(), Severity::Info);
        assert_eq!(tag.color(), Rgba8::WHITE);
    }

    #[test]
    fn rendered_is_memoized() {
        let tag = data_tag();
        assert!(!tag.is_rendered());
        let first = tag.rendered().as_ptr();
        assert!(tag.is_rendered());
        assert_eq!(tag.rendered().as_ptr(), first);
        assert_eq!(tag.rendered(), "<i><b><color=#0A141EFF>(DATA)</color></b></i>: ");
    }

    #[test]
    fn visible_setters_invalidate() {
        let mut tag = data_tag();
        let _ = tag.rendered();

        tag.set_text("OTHER");
        assert!(!tag.is_rendered());
        assert_eq!(tag.rendered(), "<i><b><color=#0A141EFF>(OTHER)</color></b></i>: ");

        tag.set_color(Rgba8::RED);
        assert!(!tag.is_rendered());
        let _ = tag.rendered();
        tag.set_text_style(TextStyle::Regular);
        assert!(!tag.is_rendered());
        let _ = tag.rendered();
        tag.set_brackets(Brackets::None);
        assert!(!tag.is_rendered());
        let _ = tag.rendered();
        tag.set_spacer(Spacer::None);
        assert!(!tag.is_rendered());
        assert_eq!(tag.rendered(), "<color=#FF0000FF>OTHER</color>");
    }

    #[test]
    fn policy_setters_keep_memo() {
        let mut tag = data_tag();
        let before = tag.rendered().to_owned();

        tag.set_severity(Severity::Error);
        tag.set_enabled(false);

        assert!(tag.is_rendered());
        assert_eq!(tag.rendered(), before);
    }

    #[test]
    fn clone_copies_memo_and_is_independent() {
        let original = data_tag();
        let expected = original.rendered().to_owned();

        let mut clone = original.clone();
        assert!(clone.is_rendered());
        assert_eq!(clone.rendered(), expected);

        clone.set_text("NEW");
        assert_ne!(clone.rendered(), expected);
        assert_eq!(original.rendered(), expected);
    }

    #[test]
    fn equality_ignores_severity_and_enabled() {
        let visible = data_tag();
        let hidden_changes = data_tag()
            .with_severity(Severity::Error)
            .with_enabled(false);

        assert_eq!(visible, hidden_changes);
        assert_eq!(hash_of(&visible), hash_of(&hidden_changes));
    }

    #[test]
    fn equality_sees_visible_fields() {
        assert_ne!(data_tag(), data_tag().with_spacer(Spacer::Dot));
        assert_ne!(data_tag(), data_tag().with_color(Rgba8::BLUE));
    }

    #[test]
    fn equality_ignores_memo_state() {
        let rendered = data_tag();
        let _ = rendered.rendered();
        assert_eq!(rendered, data_tag());
    }

    #[test]
    fn display_writes_rendering() {
        assert_eq!(data_tag().to_string(), data_tag().rendered());
    }

    #[test]
    fn debug_omits_memo() {
        let text = format!("{:?}", data_tag());
        assert!(text.starts_with("Tag {"));
        assert!(!text.contains("rendered"));
    }
}
