//! crates/logging-sink/src/markup.rs
//! Removal of the rich-text markup produced by tag rendering.

use std::borrow::Cow;

const COLOR_OPEN: &str = "<color=#";
const FIXED_TAGS: [&str; 5] = ["<b>", "</b>", "<i>", "</i>", "</color>"];

/// What a sink does with the markup in a composed line.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Markup {
    /// Write the line as composed.
    #[default]
    Keep,
    /// Remove style and colour tags, keeping brackets, text and spacers.
    Strip,
}

impl Markup {
    /// Applies the mode to `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Keep => Cow::Borrowed(text),
            Self::Strip => strip_markup(text),
        }
    }
}

/// Removes `<b>`, `<i>`, `<color=#RRGGBB[AA]>` and their closing tags.
///
/// Angle brackets that are not part of such a tag (for example in a generic
/// type name) are kept. Text without markup is returned borrowed.
///
/// # Examples
///
/// ```
/// use logging_sink::strip_markup;
///
/// assert_eq!(
///     strip_markup("<i><b><color=#0A141EFF>(DATA)</color></b></i>: "),
///     "(DATA): "
/// );
/// assert_eq!(strip_markup("<color=#FFFFFFFF>Vec<u8></color>"), "Vec<u8>");
/// ```
#[must_use]
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    if !text.contains('<') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(index) = rest.find('<') {
        out.push_str(&rest[..index]);
        let candidate = &rest[index..];
        if let Some(len) = markup_len(candidate) {
            rest = &candidate[len..];
        } else {
            out.push('<');
            rest = &candidate[1..];
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Length of the markup tag at the start of `candidate`, if there is one.
fn markup_len(candidate: &str) -> Option<usize> {
    if let Some(tag) = FIXED_TAGS.iter().find(|tag| candidate.starts_with(**tag)) {
        return Some(tag.len());
    }

    let digits = candidate.strip_prefix(COLOR_OPEN)?;
    let end = digits.find('>')?;
    let hex = &digits[..end];
    (matches!(hex.len(), 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit()))
        .then_some(COLOR_OPEN.len() + end + 1)
}
