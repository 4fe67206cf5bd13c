//! Clause data attached to group declarations.
//!
//! Each adapter translates one clause syntax fragment into the record
//! stored on the owning group. Adapters are independent of one another
//! and order-insensitive. Kinds the grammar can repeat but the language
//! treats as single-valued keep the first occurrence and silently
//! ignore later ones; occurs clauses are genuinely repeatable and
//! accumulate in source order.

use std::fmt;

use copybook_foundation::Literal;
use copybook_syntax::{
    AlignedClauseNode, BlankWhenZeroClauseNode, CommonOwnLocal, CommonOwnLocalClauseNode,
    ExternalClauseNode, GlobalClauseNode, IntegerStringClauseNode, IntegerStringKind,
    JustifiedClauseNode, OccursClauseNode, PictureClauseNode, ReceivedByClauseNode, ReceivedByMode,
    RecordAreaClauseNode, RedefinesClauseNode, RenamesClauseNode, SignClauseNode,
    SynchronizedAlignment, SynchronizedClauseNode, ThreadLocalClauseNode, TypeClauseNode,
    TypeDefClauseNode, UsageClauseNode, UsageKind, UsingClauseNode, ValueClauseNode,
    ValueIntervalNode, WithLowerBoundsClauseNode,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The clause kinds a group can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClauseKind {
    /// `ALIGNED`
    Aligned,
    /// `BLANK WHEN ZERO`
    BlankWhenZero,
    /// `COMMON` / `OWN` / `LOCAL`
    CommonOwnLocal,
    /// `EXTERNAL`
    External,
    /// `GLOBAL`
    Global,
    /// `INTEGER` / `STRING`
    IntegerString,
    /// `JUSTIFIED`
    Justified,
    /// `OCCURS`
    Occurs,
    /// `PICTURE`
    Picture,
    /// `RECEIVED BY`
    ReceivedBy,
    /// `RECORD AREA`
    RecordArea,
    /// `REDEFINES`
    Redefines,
    /// `SIGN`
    Sign,
    /// `SYNCHRONIZED`
    Synchronized,
    /// `THREAD-LOCAL`
    ThreadLocal,
    /// `TYPE`
    Type,
    /// `TYPEDEF`
    TypeDef,
    /// `USAGE`
    Usage,
    /// `USING`
    Using,
    /// `VALUE`
    Value,
    /// `WITH LOWER BOUNDS`
    WithLowerBounds,
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Aligned => "aligned",
            Self::BlankWhenZero => "blank-when-zero",
            Self::CommonOwnLocal => "common-own-local",
            Self::External => "external",
            Self::Global => "global",
            Self::IntegerString => "integer-string",
            Self::Justified => "justified",
            Self::Occurs => "occurs",
            Self::Picture => "picture",
            Self::ReceivedBy => "received-by",
            Self::RecordArea => "record-area",
            Self::Redefines => "redefines",
            Self::Sign => "sign",
            Self::Synchronized => "synchronized",
            Self::ThreadLocal => "thread-local",
            Self::Type => "type",
            Self::TypeDef => "typedef",
            Self::Usage => "usage",
            Self::Using => "using",
            Self::Value => "value",
            Self::WithLowerBounds => "with-lower-bounds",
        };
        write!(f, "{text}")
    }
}

// =============================================================================
// Clause records
// =============================================================================

/// Stored `JUSTIFIED` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JustifiedClause {
    /// True when justification is to the right.
    pub right: bool,
}

/// Stored `OCCURS` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OccursClause {
    /// Fixed count, or the lower bound of a variable range.
    pub from: u32,
    /// Upper bound of an `OCCURS n TO m` range.
    pub to: Option<u32>,
    /// Name in a `DEPENDING ON` phrase.
    pub depending_on: Option<String>,
    /// Index names from `INDEXED BY` phrases.
    pub indexed_by: Vec<String>,
}

impl OccursClause {
    fn from_node(node: &OccursClauseNode) -> Self {
        Self {
            from: node.from,
            to: node.to,
            depending_on: node.depending_on.clone(),
            indexed_by: node.indexed_by.clone(),
        }
    }
}

/// Stored `PICTURE` attribute.
///
/// The picture string is kept raw; interpreting it is a type-checker
/// concern, not a graph concern.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PictureClause {
    /// The raw picture string, e.g. `S9(4)V99`.
    pub picture: String,
}

/// Stored `REDEFINES` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RedefinesClause {
    /// Name of the declaration being redefined.
    pub target: String,
}

/// Stored `RENAMES` attribute (rename entries only).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenamesClause {
    /// First name of the renamed range.
    pub from: String,
    /// Last name of a `RENAMES a THRU b` range.
    pub through: Option<String>,
}

impl RenamesClause {
    pub(crate) fn from_node(node: &RenamesClauseNode) -> Self {
        Self {
            from: node.from.clone(),
            through: node.through.clone(),
        }
    }
}

/// Stored `SIGN` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignClause {
    /// True for `LEADING`, false for `TRAILING`.
    pub leading: bool,
    /// True when the sign occupies a separate character.
    pub separate: bool,
}

/// Stored `SYNCHRONIZED` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SynchronizedClause {
    /// Optional alignment keyword.
    pub alignment: Option<SynchronizedAlignment>,
}

/// Stored `TYPE` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeClause {
    /// Name of the referenced type definition.
    pub type_name: String,
}

/// Stored `TYPEDEF` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeDefClause {
    /// True when the definition is strongly typed.
    pub strong: bool,
}

/// Stored `USING` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UsingClause {
    /// The operand name.
    pub operand: String,
}

/// One literal or literal range of a `VALUE` clause.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueInterval {
    /// The literal, or the start of a `THRU` range.
    pub from: Literal,
    /// End of a `VALUE a THRU b` range.
    pub through: Option<Literal>,
}

/// Stored `VALUE` attribute.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueClause {
    /// The literal intervals, in source order.
    pub intervals: Vec<ValueInterval>,
}

impl ValueClause {
    pub(crate) fn from_node(node: &ValueClauseNode) -> Self {
        Self {
            intervals: node.intervals.iter().map(ValueInterval::from_node).collect(),
        }
    }
}

impl ValueInterval {
    fn from_node(node: &ValueIntervalNode) -> Self {
        Self {
            from: node.from.clone(),
            through: node.through.clone(),
        }
    }
}

// =============================================================================
// The clause mapping held by every group
// =============================================================================

/// Clause-kind → clause-data mapping of one group declaration.
///
/// Flag-only kinds are stored as booleans, enumerated kinds as their
/// enum, valued kinds as a record. Attachment never removes or
/// replaces data of a different kind.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupClauses {
    aligned: bool,
    blank_when_zero: bool,
    common_own_local: Option<CommonOwnLocal>,
    external: bool,
    global: bool,
    integer_string: Option<IntegerStringKind>,
    justified: Option<JustifiedClause>,
    occurs: Vec<OccursClause>,
    picture: Option<PictureClause>,
    received_by: Option<ReceivedByMode>,
    record_area: bool,
    redefines: Option<RedefinesClause>,
    sign: Option<SignClause>,
    synchronized: Option<SynchronizedClause>,
    thread_local: bool,
    type_clause: Option<TypeClause>,
    type_def: Option<TypeDefClause>,
    usage: Option<UsageKind>,
    using: Option<UsingClause>,
    value: Option<ValueClause>,
    with_lower_bounds: bool,
}

impl GroupClauses {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the given clause kind is present.
    #[must_use]
    pub fn has(&self, kind: ClauseKind) -> bool {
        match kind {
            ClauseKind::Aligned => self.aligned,
            ClauseKind::BlankWhenZero => self.blank_when_zero,
            ClauseKind::CommonOwnLocal => self.common_own_local.is_some(),
            ClauseKind::External => self.external,
            ClauseKind::Global => self.global,
            ClauseKind::IntegerString => self.integer_string.is_some(),
            ClauseKind::Justified => self.justified.is_some(),
            ClauseKind::Occurs => !self.occurs.is_empty(),
            ClauseKind::Picture => self.picture.is_some(),
            ClauseKind::ReceivedBy => self.received_by.is_some(),
            ClauseKind::RecordArea => self.record_area,
            ClauseKind::Redefines => self.redefines.is_some(),
            ClauseKind::Sign => self.sign.is_some(),
            ClauseKind::Synchronized => self.synchronized.is_some(),
            ClauseKind::ThreadLocal => self.thread_local,
            ClauseKind::Type => self.type_clause.is_some(),
            ClauseKind::TypeDef => self.type_def.is_some(),
            ClauseKind::Usage => self.usage.is_some(),
            ClauseKind::Using => self.using.is_some(),
            ClauseKind::Value => self.value.is_some(),
            ClauseKind::WithLowerBounds => self.with_lower_bounds,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// True when an `ALIGNED` clause was attached.
    #[must_use]
    pub const fn aligned(&self) -> bool {
        self.aligned
    }

    /// True when a `BLANK WHEN ZERO` clause was attached.
    #[must_use]
    pub const fn blank_when_zero(&self) -> bool {
        self.blank_when_zero
    }

    /// The storage section keyword, when one was attached.
    #[must_use]
    pub const fn common_own_local(&self) -> Option<CommonOwnLocal> {
        self.common_own_local
    }

    /// True when an `EXTERNAL` clause was attached.
    #[must_use]
    pub const fn external(&self) -> bool {
        self.external
    }

    /// True when a `GLOBAL` clause was attached.
    #[must_use]
    pub const fn global(&self) -> bool {
        self.global
    }

    /// The `INTEGER`/`STRING` keyword, when one was attached.
    #[must_use]
    pub const fn integer_string(&self) -> Option<IntegerStringKind> {
        self.integer_string
    }

    /// The justified attribute, when one was attached.
    #[must_use]
    pub const fn justified(&self) -> Option<&JustifiedClause> {
        self.justified.as_ref()
    }

    /// All occurs attributes, in source order.
    #[must_use]
    pub fn occurs(&self) -> &[OccursClause] {
        &self.occurs
    }

    /// The picture attribute, when one was attached.
    #[must_use]
    pub const fn picture(&self) -> Option<&PictureClause> {
        self.picture.as_ref()
    }

    /// The receiving mode, when one was attached.
    #[must_use]
    pub const fn received_by(&self) -> Option<ReceivedByMode> {
        self.received_by
    }

    /// True when a `RECORD AREA` clause was attached.
    #[must_use]
    pub const fn record_area(&self) -> bool {
        self.record_area
    }

    /// The redefines attribute, when one was attached.
    #[must_use]
    pub const fn redefines(&self) -> Option<&RedefinesClause> {
        self.redefines.as_ref()
    }

    /// The sign attribute, when one was attached.
    #[must_use]
    pub const fn sign(&self) -> Option<&SignClause> {
        self.sign.as_ref()
    }

    /// The synchronized attribute, when one was attached.
    #[must_use]
    pub const fn synchronized(&self) -> Option<&SynchronizedClause> {
        self.synchronized.as_ref()
    }

    /// True when a `THREAD-LOCAL` clause was attached.
    #[must_use]
    pub const fn thread_local(&self) -> bool {
        self.thread_local
    }

    /// The type attribute, when one was attached.
    #[must_use]
    pub const fn type_clause(&self) -> Option<&TypeClause> {
        self.type_clause.as_ref()
    }

    /// The typedef attribute, when one was attached.
    #[must_use]
    pub const fn type_def(&self) -> Option<&TypeDefClause> {
        self.type_def.as_ref()
    }

    /// The usage attribute, when one was attached.
    #[must_use]
    pub const fn usage(&self) -> Option<UsageKind> {
        self.usage
    }

    /// The using attribute, when one was attached.
    #[must_use]
    pub const fn using(&self) -> Option<&UsingClause> {
        self.using.as_ref()
    }

    /// The value attribute, when one was attached.
    #[must_use]
    pub const fn value(&self) -> Option<&ValueClause> {
        self.value.as_ref()
    }

    /// True when a `WITH LOWER BOUNDS` clause was attached.
    #[must_use]
    pub const fn with_lower_bounds(&self) -> bool {
        self.with_lower_bounds
    }

    // =========================================================================
    // Attachment adapters
    // =========================================================================

    pub(crate) fn attach_aligned(&mut self, _node: &AlignedClauseNode) {
        self.aligned = true;
    }

    pub(crate) fn attach_blank_when_zero(&mut self, _node: &BlankWhenZeroClauseNode) {
        self.blank_when_zero = true;
    }

    pub(crate) fn attach_common_own_local(&mut self, node: &CommonOwnLocalClauseNode) {
        if self.common_own_local.is_none() {
            self.common_own_local = Some(node.kind);
        }
    }

    pub(crate) fn attach_external(&mut self, _node: &ExternalClauseNode) {
        self.external = true;
    }

    pub(crate) fn attach_global(&mut self, _node: &GlobalClauseNode) {
        self.global = true;
    }

    pub(crate) fn attach_integer_string(&mut self, node: &IntegerStringClauseNode) {
        if self.integer_string.is_none() {
            self.integer_string = Some(node.kind);
        }
    }

    pub(crate) fn attach_justified(&mut self, node: &JustifiedClauseNode) {
        if self.justified.is_none() {
            self.justified = Some(JustifiedClause { right: node.right });
        }
    }

    pub(crate) fn attach_occurs(&mut self, node: &OccursClauseNode) {
        self.occurs.push(OccursClause::from_node(node));
    }

    pub(crate) fn attach_picture(&mut self, node: &PictureClauseNode) {
        if self.picture.is_none() {
            self.picture = Some(PictureClause {
                picture: node.picture.clone(),
            });
        }
    }

    pub(crate) fn attach_received_by(&mut self, node: &ReceivedByClauseNode) {
        if self.received_by.is_none() {
            self.received_by = Some(node.mode);
        }
    }

    pub(crate) fn attach_record_area(&mut self, _node: &RecordAreaClauseNode) {
        self.record_area = true;
    }

    pub(crate) fn attach_redefines(&mut self, node: &RedefinesClauseNode) {
        if self.redefines.is_none() {
            self.redefines = Some(RedefinesClause {
                target: node.target.clone(),
            });
        }
    }

    pub(crate) fn attach_sign(&mut self, node: &SignClauseNode) {
        if self.sign.is_none() {
            self.sign = Some(SignClause {
                leading: node.leading,
                separate: node.separate,
            });
        }
    }

    pub(crate) fn attach_synchronized(&mut self, node: &SynchronizedClauseNode) {
        if self.synchronized.is_none() {
            self.synchronized = Some(SynchronizedClause {
                alignment: node.alignment,
            });
        }
    }

    pub(crate) fn attach_thread_local(&mut self, _node: &ThreadLocalClauseNode) {
        self.thread_local = true;
    }

    pub(crate) fn attach_type(&mut self, node: &TypeClauseNode) {
        if self.type_clause.is_none() {
            self.type_clause = Some(TypeClause {
                type_name: node.type_name.clone(),
            });
        }
    }

    pub(crate) fn attach_type_def(&mut self, node: &TypeDefClauseNode) {
        if self.type_def.is_none() {
            self.type_def = Some(TypeDefClause {
                strong: node.strong,
            });
        }
    }

    pub(crate) fn attach_usage(&mut self, node: &UsageClauseNode) {
        if self.usage.is_none() {
            self.usage = Some(node.usage);
        }
    }

    pub(crate) fn attach_using(&mut self, node: &UsingClauseNode) {
        if self.using.is_none() {
            self.using = Some(UsingClause {
                operand: node.operand.clone(),
            });
        }
    }

    pub(crate) fn attach_value(&mut self, node: &ValueClauseNode) {
        if self.value.is_none() {
            self.value = Some(ValueClause::from_node(node));
        }
    }

    pub(crate) fn attach_with_lower_bounds(&mut self, _node: &WithLowerBoundsClauseNode) {
        self.with_lower_bounds = true;
    }
}
