//! crates/tags/src/color.rs
//! RGBA colour carried by every tag and emitted as `<color=#RRGGBBAA>`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Four-byte colour in red, green, blue, alpha order.
///
/// The rendered form is always `#` followed by eight uppercase hexadecimal
/// digits, which is what [`Display`](fmt::Display) produces and what the
/// renderer writes inside the `<color=…>` wrapper. Parsing accepts both the
/// six-digit (`#RRGGBB`, opaque) and eight-digit forms so configuration files
/// can use whichever is more convenient.
///
/// # Examples
///
/// ```
/// use tags::Rgba8;
///
/// let teal: Rgba8 = "#0a141e".parse()?;
/// assert_eq!(teal, Rgba8::new(10, 20, 30, 255));
/// assert_eq!(teal.to_string(), "#0A141EFF");
/// # Ok::<(), tags::ParseColorError>(())
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white, the colour of a freshly constructed tag.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Light gray used by the stock prefix, text and spacer tags.
    pub const LIGHT_GRAY: Self = Self::new(200, 200, 200, 255);
    /// Orange.
    pub const ORANGE: Self = Self::new(255, 128, 0, 255);
    /// Light green.
    pub const LIGHT_GREEN: Self = Self::new(124, 248, 124, 255);
    /// Dark green used by the `OK` preset.
    pub const DARK_GREEN: Self = Self::new(0, 90, 0, 255);
    /// Pink.
    pub const PINK: Self = Self::new(255, 105, 180, 255);
    /// Yellow used by the `WARNING` preset.
    pub const YELLOW: Self = Self::new(255, 235, 4, 255);
    /// Red used by the `ERROR` preset.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Creates a colour from its four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque colour.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Appends the eight uppercase hex digits (no `#`) to `out`.
    pub fn push_hex(self, out: &mut String) {
        for byte in [self.r, self.g, self.b, self.a] {
            out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Error returned when a colour string is not `#RRGGBB` or `#RRGGBBAA`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseColorError {
    /// The string did not contain six or eight digits after the optional `#`.
    #[error("colour must have 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    /// A character outside `0-9a-fA-F` was found.
    #[error("invalid hex digit in colour {0:?}")]
    InvalidDigit(String),
}

impl FromStr for Rgba8 {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(trimmed.to_owned()));
        }
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }

        let channel = |index: usize| {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map_err(|_| ParseColorError::InvalidDigit(trimmed.to_owned()))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba8> for String {
    fn from(color: Rgba8) -> Self {
        color.to_string()
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}
