//! Clause sub-node fragments.
//!
//! One struct per clause kind the grammar can attach to a data
//! description entry. Each fragment exposes the literal and flag values
//! the graph builder reads; the grammar rules that produced them are
//! not represented here.

use copybook_foundation::Literal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Flag-only clauses
// =============================================================================

/// `ALIGNED` clause fragment (presence only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignedClauseNode;

/// `BLANK WHEN ZERO` clause fragment (presence only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlankWhenZeroClauseNode;

/// `EXTERNAL` clause fragment (presence only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExternalClauseNode;

/// `GLOBAL` clause fragment (presence only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlobalClauseNode;

/// `RECORD AREA` clause fragment (presence only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordAreaClauseNode;

/// `THREAD-LOCAL` clause fragment (presence only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThreadLocalClauseNode;

/// `WITH LOWER BOUNDS` clause fragment (presence only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WithLowerBoundsClauseNode;

// =============================================================================
// Enumerated clauses
// =============================================================================

/// Which storage section keyword a `COMMON`/`OWN`/`LOCAL` clause named.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CommonOwnLocal {
    /// `COMMON`
    Common,
    /// `OWN`
    Own,
    /// `LOCAL`
    Local,
}

/// `COMMON`/`OWN`/`LOCAL` clause fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommonOwnLocalClauseNode {
    /// The keyword that appeared.
    pub kind: CommonOwnLocal,
}

/// Whether an integer-string clause named `INTEGER` or `STRING`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntegerStringKind {
    /// `INTEGER`
    Integer,
    /// `STRING`
    String,
}

/// `INTEGER`/`STRING` clause fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntegerStringClauseNode {
    /// The keyword that appeared.
    pub kind: IntegerStringKind,
}

/// How a parameter is received.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReceivedByMode {
    /// `RECEIVED BY CONTENT`
    Content,
    /// `RECEIVED BY REFERENCE`
    Reference,
}

/// `RECEIVED BY` clause fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReceivedByClauseNode {
    /// The receiving mode that appeared.
    pub mode: ReceivedByMode,
}

/// Alignment keyword of a `SYNCHRONIZED` clause.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SynchronizedAlignment {
    /// `SYNCHRONIZED LEFT`
    Left,
    /// `SYNCHRONIZED RIGHT`
    Right,
}

/// `SYNCHRONIZED` clause fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SynchronizedClauseNode {
    /// Optional alignment keyword; `None` for bare `SYNCHRONIZED`.
    pub alignment: Option<SynchronizedAlignment>,
}

/// Storage format named by a `USAGE` clause.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UsageKind {
    /// `BINARY`
    Binary,
    /// `COMP` / `COMPUTATIONAL`
    Comp,
    /// `COMP-1`
    Comp1,
    /// `COMP-2`
    Comp2,
    /// `COMP-3` / `PACKED-DECIMAL`
    Comp3,
    /// `COMP-4`
    Comp4,
    /// `COMP-5`
    Comp5,
    /// `DISPLAY`
    Display,
    /// `DISPLAY-1`
    Display1,
    /// `INDEX`
    Index,
    /// `NATIONAL`
    National,
    /// `POINTER`
    Pointer,
}

/// `USAGE` clause fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UsageClauseNode {
    /// The storage format that appeared.
    pub usage: UsageKind,
}

// =============================================================================
// Valued clauses
// =============================================================================

/// `JUSTIFIED` clause fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JustifiedClauseNode {
    /// True when the `RIGHT` keyword appeared.
    pub right: bool,
}

/// `OCCURS` clause fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OccursClauseNode {
    /// Fixed count, or the lower bound of a variable range.
    pub from: u32,
    /// Upper bound of an `OCCURS n TO m` range.
    pub to: Option<u32>,
    /// Name in a `DEPENDING ON` phrase.
    pub depending_on: Option<String>,
    /// Index names from `INDEXED BY` phrases.
    pub indexed_by: Vec<String>,
}

impl OccursClauseNode {
    /// Creates a fixed-count occurs fragment.
    #[must_use]
    pub fn fixed(from: u32) -> Self {
        Self {
            from,
            to: None,
            depending_on: None,
            indexed_by: Vec::new(),
        }
    }

    /// Sets the upper bound of the range.
    #[must_use]
    pub fn with_to(mut self, to: u32) -> Self {
        self.to = Some(to);
        self
    }

    /// Sets the `DEPENDING ON` name.
    #[must_use]
    pub fn with_depending_on(mut self, name: impl Into<String>) -> Self {
        self.depending_on = Some(name.into());
        self
    }

    /// Adds an `INDEXED BY` name.
    #[must_use]
    pub fn with_index(mut self, name: impl Into<String>) -> Self {
        self.indexed_by.push(name.into());
        self
    }
}

/// `PICTURE` clause fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PictureClauseNode {
    /// The raw picture string, e.g. `9(4)V99`.
    pub picture: String,
}

impl PictureClauseNode {
    /// Creates a picture fragment from a picture string.
    #[must_use]
    pub fn new(picture: impl Into<String>) -> Self {
        Self {
            picture: picture.into(),
        }
    }
}

/// `REDEFINES` clause fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RedefinesClauseNode {
    /// Name of the declaration being redefined.
    pub target: String,
}

impl RedefinesClauseNode {
    /// Creates a redefines fragment naming its target.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// `RENAMES` clause fragment.
///
/// Mandatory on rename entries: names the source range being renamed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenamesClauseNode {
    /// First name of the renamed range.
    pub from: String,
    /// Last name of a `RENAMES a THRU b` range.
    pub through: Option<String>,
}

impl RenamesClauseNode {
    /// Creates a single-name renames fragment.
    #[must_use]
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            through: None,
        }
    }

    /// Sets the end of the renamed range.
    #[must_use]
    pub fn with_through(mut self, through: impl Into<String>) -> Self {
        self.through = Some(through.into());
        self
    }
}

/// `SIGN` clause fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignClauseNode {
    /// True for `SIGN LEADING`, false for `SIGN TRAILING`.
    pub leading: bool,
    /// True when `SEPARATE CHARACTER` appeared.
    pub separate: bool,
}

/// `TYPE` clause fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeClauseNode {
    /// Name of the referenced type definition.
    pub type_name: String,
}

/// `TYPEDEF` clause fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeDefClauseNode {
    /// True when the `STRONG` keyword appeared.
    pub strong: bool,
}

/// `USING` clause fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UsingClauseNode {
    /// The operand name that appeared.
    pub operand: String,
}

/// One literal or literal range inside a `VALUE` clause.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueIntervalNode {
    /// The literal, or the start of a `THRU` range.
    pub from: Literal,
    /// End of a `VALUE a THRU b` range.
    pub through: Option<Literal>,
}

impl ValueIntervalNode {
    /// Creates a single-literal interval.
    #[must_use]
    pub const fn single(from: Literal) -> Self {
        Self {
            from,
            through: None,
        }
    }

    /// Creates a `THRU` range interval.
    #[must_use]
    pub const fn range(from: Literal, through: Literal) -> Self {
        Self {
            from,
            through: Some(through),
        }
    }
}

/// `VALUE` clause fragment.
///
/// Mandatory on condition entries; optional on group entries.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueClauseNode {
    /// The literal intervals, in source order.
    pub intervals: Vec<ValueIntervalNode>,
}

impl ValueClauseNode {
    /// Creates a value fragment holding one literal.
    #[must_use]
    pub fn single(literal: Literal) -> Self {
        Self {
            intervals: vec![ValueIntervalNode::single(literal)],
        }
    }

    /// Adds an interval to the fragment.
    #[must_use]
    pub fn with_interval(mut self, interval: ValueIntervalNode) -> Self {
        self.intervals.push(interval);
        self
    }
}
