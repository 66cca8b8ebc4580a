//! crates/tags/src/render.rs
//! Pure rich-text rendering of a tag's five visible fields.

use crate::color::Rgba8;
use crate::style::{Brackets, Spacer, TextStyle};

const COLOR_OPEN: &str = "<color=#";
const COLOR_CLOSE: &str = "</color>";

/// Renders a fragment into a freshly allocated string.
///
/// Layout, left to right: style open, `<color=#RRGGBBAA>`, bracket open, text,
/// bracket close, `</color>`, style close, spacer.
///
/// # Examples
///
/// ```
/// use tags::{Brackets, Rgba8, Spacer, TextStyle, render};
///
/// let line = render(
///     "DATA",
///     Rgba8::new(10, 20, 30, 255),
///     TextStyle::BoldItalic,
///     Brackets::Round,
///     Spacer::Colon,
/// );
/// assert_eq!(line, "<i><b><color=#0A141EFF>(DATA)</color></b></i>: ");
/// ```
#[must_use]
pub fn render(
    text: &str,
    color: Rgba8,
    style: TextStyle,
    brackets: Brackets,
    spacer: Spacer,
) -> String {
    let mut out = String::with_capacity(rendered_len(text, style, brackets, spacer));
    render_into(&mut out, text, color, style, brackets, spacer);
    out
}

/// Appends the rendering to `out` without clearing it.
pub fn render_into(
    out: &mut String,
    text: &str,
    color: Rgba8,
    style: TextStyle,
    brackets: Brackets,
    spacer: Spacer,
) {
    out.push_str(style.open());
    out.push_str(COLOR_OPEN);
    color.push_hex(out);
    out.push('>');
    out.push_str(brackets.open());
    out.push_str(text);
    out.push_str(brackets.close());
    out.push_str(COLOR_CLOSE);
    out.push_str(style.close());
    out.push_str(spacer.as_str());
}

/// Exact byte length of the rendering.
#[must_use]
pub fn rendered_len(text: &str, style: TextStyle, brackets: Brackets, spacer: Spacer) -> usize {
    style.open().len()
        + COLOR_OPEN.len()
        + 8
        + 1
        + brackets.open().len()
        + text.len()
        + brackets.close().len()
        + COLOR_CLOSE.len()
        + style.close().len()
        + spacer.as_str().len()
}
