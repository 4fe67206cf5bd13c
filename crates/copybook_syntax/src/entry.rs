//! Declaration entry syntax nodes.
//!
//! The parser classifies every data description entry into one of four
//! grammatical shapes (group, rename, condition, embedded statement)
//! and materializes one node per entry. Shapes the grammar could not
//! classify arrive as [`EntryBody::Unrecognized`]; the graph builder
//! reports those and moves on.

use copybook_foundation::NodeId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clause::{
    AlignedClauseNode, BlankWhenZeroClauseNode, CommonOwnLocalClauseNode, ExternalClauseNode,
    GlobalClauseNode, IntegerStringClauseNode, JustifiedClauseNode, OccursClauseNode,
    PictureClauseNode, ReceivedByClauseNode, RecordAreaClauseNode, RedefinesClauseNode,
    RenamesClauseNode, SignClauseNode, SynchronizedClauseNode, ThreadLocalClauseNode,
    TypeClauseNode, TypeDefClauseNode, UsageClauseNode, UsingClauseNode, ValueClauseNode,
    WithLowerBoundsClauseNode,
};
use crate::span::Span;

/// Marker the preprocessor puts in front of embedded SQL lines.
pub const EXEC_SQL_TAG: &str = "*>EXECSQL";

/// Marker the preprocessor puts after embedded SQL lines.
pub const END_EXEC_TAG: &str = "*>END-EXEC";

/// One data description entry as the parser saw it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntryNode {
    /// Identity of the entry node itself.
    pub id: NodeId,
    /// Source location of the whole entry.
    pub span: Span,
    /// The grammatical shape the entry matched.
    pub body: EntryBody,
}

impl EntryNode {
    /// Creates an entry node.
    #[must_use]
    pub fn new(id: NodeId, span: Span, body: EntryBody) -> Self {
        Self { id, span, body }
    }
}

/// The four grammatical shapes, plus the unclassifiable fallback.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntryBody {
    /// A leveled record/field entry with optional clauses.
    Group(GroupNode),
    /// A level-66 rename entry.
    Rename(RenameNode),
    /// A level-88 condition-name entry.
    Condition(ConditionNode),
    /// A preprocessed embedded-statement entry.
    EmbeddedStatement(EmbeddedStatementNode),
    /// A shape the grammar could not classify.
    Unrecognized,
}

/// A group-shape entry: level number, name, and clause sub-nodes.
///
/// Slots where the grammar admits one occurrence are `Option`s; slots
/// where it admits repetition are `Vec`s. Whether repetition is
/// meaningful (occurs) or only the first occurrence counts (picture,
/// value, ...) is the graph builder's decision, not the grammar's.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupNode {
    /// Identity of this group node.
    pub id: NodeId,
    /// Raw level-number token text, when one appeared.
    pub level_token: Option<String>,
    /// True when the grammar matched the fixed non-leveled scalar form.
    pub scalar: bool,
    /// True when the entry is a filler (unnamed by construction).
    pub filler: bool,
    /// The declared name, absent for fillers.
    pub name: Option<String>,

    /// `ALIGNED` sub-node.
    pub aligned: Option<AlignedClauseNode>,
    /// `BLANK WHEN ZERO` sub-nodes.
    pub blank_when_zero: Vec<BlankWhenZeroClauseNode>,
    /// `COMMON`/`OWN`/`LOCAL` sub-nodes.
    pub common_own_local: Vec<CommonOwnLocalClauseNode>,
    /// `EXTERNAL` sub-node.
    pub external: Option<ExternalClauseNode>,
    /// `GLOBAL` sub-node.
    pub global: Option<GlobalClauseNode>,
    /// `INTEGER`/`STRING` sub-node.
    pub integer_string: Option<IntegerStringClauseNode>,
    /// `JUSTIFIED` sub-nodes.
    pub justified: Vec<JustifiedClauseNode>,
    /// `OCCURS` sub-nodes, in source order.
    pub occurs: Vec<OccursClauseNode>,
    /// `PICTURE` sub-nodes.
    pub picture: Vec<PictureClauseNode>,
    /// `RECEIVED BY` sub-nodes.
    pub received_by: Vec<ReceivedByClauseNode>,
    /// `RECORD AREA` sub-node.
    pub record_area: Option<RecordAreaClauseNode>,
    /// `REDEFINES` sub-node.
    pub redefines: Option<RedefinesClauseNode>,
    /// `SIGN` sub-nodes.
    pub sign: Vec<SignClauseNode>,
    /// `SYNCHRONIZED` sub-nodes.
    pub synchronized: Vec<SynchronizedClauseNode>,
    /// `THREAD-LOCAL` sub-node.
    pub thread_local: Option<ThreadLocalClauseNode>,
    /// `TYPE` sub-nodes.
    pub type_clause: Vec<TypeClauseNode>,
    /// `TYPEDEF` sub-node.
    pub type_def: Option<TypeDefClauseNode>,
    /// `USAGE` sub-nodes.
    pub usage: Vec<UsageClauseNode>,
    /// `USING` sub-nodes.
    pub using: Vec<UsingClauseNode>,
    /// `VALUE` sub-nodes.
    pub value: Vec<ValueClauseNode>,
    /// `WITH LOWER BOUNDS` sub-node.
    pub with_lower_bounds: Option<WithLowerBoundsClauseNode>,
}

impl GroupNode {
    /// Creates an empty group node with the given identity.
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Sets the raw level-number token.
    #[must_use]
    pub fn with_level(mut self, token: impl Into<String>) -> Self {
        self.level_token = Some(token.into());
        self
    }

    /// Sets the declared name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the non-leveled scalar form.
    #[must_use]
    pub fn scalar(mut self) -> Self {
        self.scalar = true;
        self
    }

    /// Marks the entry as a filler.
    #[must_use]
    pub fn filler(mut self) -> Self {
        self.filler = true;
        self
    }

    /// Adds a picture sub-node.
    #[must_use]
    pub fn with_picture(mut self, picture: PictureClauseNode) -> Self {
        self.picture.push(picture);
        self
    }

    /// Adds an occurs sub-node.
    #[must_use]
    pub fn with_occurs(mut self, occurs: OccursClauseNode) -> Self {
        self.occurs.push(occurs);
        self
    }

    /// Adds a value sub-node.
    #[must_use]
    pub fn with_value(mut self, value: ValueClauseNode) -> Self {
        self.value.push(value);
        self
    }

    /// Adds a usage sub-node.
    #[must_use]
    pub fn with_usage(mut self, usage: UsageClauseNode) -> Self {
        self.usage.push(usage);
        self
    }

    /// Sets the redefines sub-node.
    #[must_use]
    pub fn with_redefines(mut self, redefines: RedefinesClauseNode) -> Self {
        self.redefines = Some(redefines);
        self
    }
}

/// A rename-shape entry (level 66).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenameNode {
    /// Identity of this rename node.
    pub id: NodeId,
    /// The declared name.
    pub name: String,
    /// The mandatory renames clause.
    pub renames: RenamesClauseNode,
}

impl RenameNode {
    /// Creates a rename node.
    #[must_use]
    pub fn new(id: NodeId, name: impl Into<String>, renames: RenamesClauseNode) -> Self {
        Self {
            id,
            name: name.into(),
            renames,
        }
    }
}

/// A condition-name-shape entry (level 88).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionNode {
    /// Identity of this condition node.
    pub id: NodeId,
    /// The declared condition name.
    pub name: String,
    /// The mandatory value clause.
    pub value: ValueClauseNode,
}

impl ConditionNode {
    /// Creates a condition node.
    #[must_use]
    pub fn new(id: NodeId, name: impl Into<String>, value: ValueClauseNode) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }
}

/// An embedded-statement entry, as tagged by the preprocessor.
///
/// The preprocessor replaces embedded SQL with tagged comment lines;
/// the marker strings travel with the node so the graph builder can
/// strip them without knowing preprocessor configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmbeddedStatementNode {
    /// Identity of this embedded-statement node.
    pub id: NodeId,
    /// The tagged source lines, in order.
    pub lines: Vec<String>,
    /// Marker in front of the embedded text.
    pub begin_tag: String,
    /// Marker after the embedded text.
    pub end_tag: String,
}

impl EmbeddedStatementNode {
    /// Creates an embedded-statement node with the default SQL markers.
    #[must_use]
    pub fn new(id: NodeId, lines: Vec<String>) -> Self {
        Self {
            id,
            lines,
            begin_tag: EXEC_SQL_TAG.to_string(),
            end_tag: END_EXEC_TAG.to_string(),
        }
    }

    /// Overrides the marker strings.
    #[must_use]
    pub fn with_tags(mut self, begin_tag: impl Into<String>, end_tag: impl Into<String>) -> Self {
        self.begin_tag = begin_tag.into();
        self.end_tag = end_tag.into();
        self
    }
}
