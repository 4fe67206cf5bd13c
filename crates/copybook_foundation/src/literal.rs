//! Literal values appearing in clause positions.
//!
//! Value clauses, condition values, and occurs bounds carry literals.
//! The graph stores them verbatim; no type inference happens here.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A figurative constant.
///
/// These stand for well-known values without spelling them out
/// (`ZERO`, `SPACE`, `HIGH-VALUE`, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Figurative {
    /// `ZERO`, `ZEROS`, `ZEROES`
    Zero,
    /// `SPACE`, `SPACES`
    Space,
    /// `HIGH-VALUE`, `HIGH-VALUES`
    HighValue,
    /// `LOW-VALUE`, `LOW-VALUES`
    LowValue,
    /// `QUOTE`, `QUOTES`
    Quote,
    /// `NULL`, `NULLS`
    Null,
}

impl fmt::Display for Figurative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Zero => "ZERO",
            Self::Space => "SPACE",
            Self::HighValue => "HIGH-VALUE",
            Self::LowValue => "LOW-VALUE",
            Self::Quote => "QUOTE",
            Self::Null => "NULL",
        };
        write!(f, "{text}")
    }
}

/// A literal value extracted from a clause syntax node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// Integer literal like `42`
    Integer(i64),
    /// Decimal literal like `3.14`
    Decimal(f64),
    /// Quoted string literal like `"ABC"`
    String(String),
    /// Boolean literal (`B"1"` forms)
    Boolean(bool),
    /// A figurative constant like `SPACES`
    Figurative(Figurative),
    /// An `ALL` literal, repeating the inner literal to fit
    All(Box<Literal>),
}

impl Literal {
    /// Returns the integer value, or None for other forms.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string value, or None for other forms.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this is a figurative constant.
    #[must_use]
    pub const fn is_figurative(&self) -> bool {
        matches!(self, Self::Figurative(_))
    }

    /// A human-readable name for this literal's form.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Figurative(_) => "figurative",
            Self::All(_) => "all",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Figurative(fig) => write!(f, "{fig}"),
            Self::All(inner) => write!(f, "ALL {inner}"),
        }
    }
}

/// Tolerant integer-token parser.
///
/// Level tokens and numeric clause operands arrive as raw text. A token
/// that does not parse yields `None`; the caller treats the value as
/// absent rather than failing the build.
#[must_use]
pub fn parse_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    digits.parse().ok()
}
