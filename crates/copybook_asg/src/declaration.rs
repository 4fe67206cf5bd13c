//! Declaration graph nodes.
//!
//! One [`Declaration`] per source-level entry, with the common fields
//! (name, level, filler flag, parent reference) on the node itself and
//! a [`DeclarationBody`] payload per kind. The container owns every
//! node in an insertion-ordered arena; parent and child edges are
//! plain arena indices, so the structural graph has no ownership
//! cycles to manage.

use std::fmt;

use copybook_foundation::NodeId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clauses::{GroupClauses, RenamesClause, ValueClause};

/// Level number reserved for rename entries (level 66).
pub const LEVEL_NUMBER_RENAME: i32 = 66;

/// Level number reserved for non-nestable scalar entries (level 77).
pub const LEVEL_NUMBER_SCALAR: i32 = 77;

/// Level number reserved for condition-name entries (level 88).
pub const LEVEL_NUMBER_CONDITION: i32 = 88;

/// Returns true when a level number participates in nesting.
///
/// Missing levels and the three reserved sentinels never nest.
#[must_use]
pub fn is_groupable_level(level: Option<i32>) -> bool {
    level.is_some_and(|n| {
        n != LEVEL_NUMBER_SCALAR && n != LEVEL_NUMBER_RENAME && n != LEVEL_NUMBER_CONDITION
    })
}

/// Index of a declaration in its container's arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeclId(pub(crate) u32);

impl DeclId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclId({})", self.0)
    }
}

/// Which of the four declaration kinds a node is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeclarationKind {
    /// A leveled record/field entry.
    Group,
    /// A level-66 rename entry.
    Rename,
    /// A level-88 condition-name entry.
    Condition,
    /// An embedded-statement entry.
    EmbeddedStatement,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Group => "group",
            Self::Rename => "rename",
            Self::Condition => "condition",
            Self::EmbeddedStatement => "embedded-statement",
        };
        write!(f, "{text}")
    }
}

/// One node of the declaration graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Declaration {
    node: NodeId,
    name: Option<String>,
    level: Option<i32>,
    filler: bool,
    parent: Option<DeclId>,
    body: DeclarationBody,
}

impl Declaration {
    pub(crate) fn new(
        node: NodeId,
        name: Option<String>,
        level: Option<i32>,
        filler: bool,
        body: DeclarationBody,
    ) -> Self {
        Self {
            node,
            name,
            level,
            filler,
            parent: None,
            body,
        }
    }

    /// Identity of the syntax node this declaration was built from.
    #[must_use]
    pub const fn syntax_node(&self) -> NodeId {
        self.node
    }

    /// The declared name; `None` for fillers and embedded statements.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The level number, if one was present and parsable.
    #[must_use]
    pub const fn level(&self) -> Option<i32> {
        self.level
    }

    /// True when the entry has no name by grammar construction.
    #[must_use]
    pub const fn is_filler(&self) -> bool {
        self.filler
    }

    /// The owning group, set by the grouping pass; `None` for roots.
    #[must_use]
    pub const fn parent_group(&self) -> Option<DeclId> {
        self.parent
    }

    pub(crate) fn set_parent_group(&mut self, parent: DeclId) {
        self.parent = Some(parent);
    }

    /// Which declaration kind this node is.
    #[must_use]
    pub const fn kind(&self) -> DeclarationKind {
        match &self.body {
            DeclarationBody::Group(_) => DeclarationKind::Group,
            DeclarationBody::Rename(_) => DeclarationKind::Rename,
            DeclarationBody::Condition(_) => DeclarationKind::Condition,
            DeclarationBody::EmbeddedStatement(_) => DeclarationKind::EmbeddedStatement,
        }
    }

    /// The kind-specific payload.
    #[must_use]
    pub const fn body(&self) -> &DeclarationBody {
        &self.body
    }

    /// The group payload, or `None` for other kinds.
    #[must_use]
    pub const fn as_group(&self) -> Option<&GroupData> {
        match &self.body {
            DeclarationBody::Group(data) => Some(data),
            _ => None,
        }
    }

    pub(crate) fn as_group_mut(&mut self) -> Option<&mut GroupData> {
        match &mut self.body {
            DeclarationBody::Group(data) => Some(data),
            _ => None,
        }
    }

    /// The rename payload, or `None` for other kinds.
    #[must_use]
    pub const fn as_rename(&self) -> Option<&RenameData> {
        match &self.body {
            DeclarationBody::Rename(data) => Some(data),
            _ => None,
        }
    }

    /// The condition payload, or `None` for other kinds.
    #[must_use]
    pub const fn as_condition(&self) -> Option<&ConditionData> {
        match &self.body {
            DeclarationBody::Condition(data) => Some(data),
            _ => None,
        }
    }

    /// The embedded-statement payload, or `None` for other kinds.
    #[must_use]
    pub const fn as_embedded_statement(&self) -> Option<&EmbeddedStatementData> {
        match &self.body {
            DeclarationBody::EmbeddedStatement(data) => Some(data),
            _ => None,
        }
    }
}

/// Kind-specific payload of a declaration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeclarationBody {
    /// Payload of a group entry.
    Group(GroupData),
    /// Payload of a rename entry.
    Rename(RenameData),
    /// Payload of a condition entry.
    Condition(ConditionData),
    /// Payload of an embedded-statement entry.
    EmbeddedStatement(EmbeddedStatementData),
}

/// Payload of a group entry: child references plus attached clauses.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupData {
    children: Vec<DeclId>,
    clauses: GroupClauses,
}

impl GroupData {
    pub(crate) fn new(clauses: GroupClauses) -> Self {
        Self {
            children: Vec::new(),
            clauses,
        }
    }

    /// Child declarations, in source order.
    #[must_use]
    pub fn children(&self) -> &[DeclId] {
        &self.children
    }

    /// The clauses attached to this group.
    #[must_use]
    pub const fn clauses(&self) -> &GroupClauses {
        &self.clauses
    }

    pub(crate) fn push_child(&mut self, child: DeclId) {
        self.children.push(child);
    }
}

/// Payload of a rename entry: the source range being renamed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenameData {
    /// The renames clause, mandatory by grammar.
    pub renames: RenamesClause,
}

/// Payload of a condition entry: the satisfying values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionData {
    /// The value clause, mandatory by grammar.
    pub value: ValueClause,
}

/// Payload of an embedded-statement entry: verbatim statement text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmbeddedStatementData {
    /// The statement text with preprocessor markers stripped.
    pub text: String,
}
