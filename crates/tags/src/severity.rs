//! crates/tags/src/severity.rs
//! Ordered severity a tag contributes to the composed line.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::style::{ParseStyleError, normalise};

/// Severity selecting which sink channel a composed line is reported through.
///
/// Variants are totally ordered `Info < Warning < Error`; a composed line takes
/// the maximum over its enabled fragments.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Severity {
    /// Informational output.
    #[default]
    Info = 0,
    /// Something worth attention.
    Warning = 1,
    /// A failure.
    Error = 2,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Self; 3] = [Self::Info, Self::Warning, Self::Error];

    /// Lowercase label used by sinks that prefix lines with the severity.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Returns `true` for [`Severity::Error`], the ceiling of the order.
    #[must_use]
    pub const fn is_max(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a raw discriminant does not name a [`Severity`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("invalid severity discriminant {0}; expected 0 (info), 1 (warning) or 2 (error)")]
pub struct InvalidSeverity(pub u8);

impl TryFrom<u8> for Severity {
    type Error = InvalidSeverity;

    fn try_from(value: u8) -> Result<Self, InvalidSeverity> {
        match value {
            0 => Ok(Self::Info),
            1 => Ok(Self::Warning),
            2 => Ok(Self::Error),
            other => Err(InvalidSeverity(other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity as Self
    }
}

impl FromStr for Severity {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "info" | "log" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ParseStyleError::new("severity", s)),
        }
    }
}
