//! crates/tags/src/style.rs
//! Text style, bracket and spacer presets together with their markup fragments.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Emphasis wrapped around the coloured fragment.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextStyle {
    /// No emphasis.
    #[default]
    Regular,
    /// `<b>…</b>`.
    Bold,
    /// `<i>…</i>`.
    Italic,
    /// `<i><b>…</b></i>`.
    BoldItalic,
}

impl TextStyle {
    /// Markup emitted before the colour wrapper.
    #[must_use]
    pub const fn open(self) -> &'static str {
        match self {
            Self::Regular => "",
            Self::Bold => "<b>",
            Self::Italic => "<i>",
            Self::BoldItalic => "<i><b>",
        }
    }

    /// Markup emitted after the colour wrapper.
    #[must_use]
    pub const fn close(self) -> &'static str {
        match self {
            Self::Regular => "",
            Self::Bold => "</b>",
            Self::Italic => "</i>",
            Self::BoldItalic => "</b></i>",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold_italic",
        }
    }
}

/// Bracket characters placed inside the colour wrapper around the text.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Brackets {
    /// `[text]`
    Square,
    /// `(text)`
    Round,
    /// `{text}`
    Curly,
    /// ` text ` (a single space on each side)
    Space,
    /// Bare text.
    #[default]
    None,
}

impl Brackets {
    /// Opening fragment.
    #[must_use]
    pub const fn open(self) -> &'static str {
        match self {
            Self::Square => "[",
            Self::Round => "(",
            Self::Curly => "{",
            Self::Space => " ",
            Self::None => "",
        }
    }

    /// Closing fragment.
    #[must_use]
    pub const fn close(self) -> &'static str {
        match self {
            Self::Square => "]",
            Self::Round => ")",
            Self::Curly => "}",
            Self::Space => " ",
            Self::None => "",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Round => "round",
            Self::Curly => "curly",
            Self::Space => "space",
            Self::None => "none",
        }
    }
}

/// Separator appended after a tag's closing markup.
///
/// Spacers sit outside every wrapper so they are never coloured or
/// emphasised; this keeps punctuation between fragments visually neutral.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Spacer {
    /// `" "`
    Space,
    /// `". "`
    Dot,
    /// `", "`
    Comma,
    /// `": "`
    Colon,
    /// `"... "`
    Ellipsis,
    /// `"- "`
    Dash,
    /// Nothing.
    #[default]
    None,
}

impl Spacer {
    /// Text appended after the tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Dot => ". ",
            Self::Comma => ", ",
            Self::Colon => ": ",
            Self::Ellipsis => "... ",
            Self::Dash => "- ",
            Self::None => "",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Dot => "dot",
            Self::Comma => "comma",
            Self::Colon => "colon",
            Self::Ellipsis => "ellipsis",
            Self::Dash => "dash",
            Self::None => "none",
        }
    }
}

/// Error returned when a formatting preset name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised {kind} {value:?}")]
pub struct ParseStyleError {
    kind: &'static str,
    value: String,
}

impl ParseStyleError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }

    /// Which preset family was being parsed (`"text style"`, `"brackets"`, ...).
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Lowercases and drops `_`, `-` and spaces so `Bold-Italic`, `bold_italic`
/// and `BoldItalic` compare equal.
pub fn normalise(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for TextStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "regular" | "plain" => Ok(Self::Regular),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "bolditalic" | "italicbold" => Ok(Self::BoldItalic),
            _ => Err(ParseStyleError::new("text style", s)),
        }
    }
}

impl FromStr for Brackets {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "square" => Ok(Self::Square),
            "round" => Ok(Self::Round),
            "curly" => Ok(Self::Curly),
            "space" => Ok(Self::Space),
            "none" => Ok(Self::None),
            _ => Err(ParseStyleError::new("brackets", s)),
        }
    }
}

impl FromStr for Spacer {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "space" => Ok(Self::Space),
            "dot" => Ok(Self::Dot),
            "comma" => Ok(Self::Comma),
            "colon" => Ok(Self::Colon),
            "ellipsis" => Ok(Self::Ellipsis),
            "dash" => Ok(Self::Dash),
            "none" => Ok(Self::None),
            _ => Err(ParseStyleError::new("spacer", s)),
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Brackets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Spacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
