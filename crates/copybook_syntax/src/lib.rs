//! Syntax-node types for data division declarations.
//!
//! This crate is the boundary to the (external) parser: it defines the
//! already-materialized node shapes the parser hands to the ASG builder.
//! Nothing here parses text; the types expose exactly the literal and
//! flag content the graph builder reads.
//!
//! The flow is: Source → Preprocessor → Parser → syntax nodes →
//! `EntryContainer` → declaration graph.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod clause;
mod entry;
mod span;

pub use clause::{
    AlignedClauseNode, BlankWhenZeroClauseNode, CommonOwnLocal, CommonOwnLocalClauseNode,
    ExternalClauseNode, GlobalClauseNode, IntegerStringClauseNode, IntegerStringKind,
    JustifiedClauseNode, OccursClauseNode, PictureClauseNode, ReceivedByClauseNode, ReceivedByMode,
    RecordAreaClauseNode, RedefinesClauseNode, RenamesClauseNode, SignClauseNode,
    SynchronizedAlignment, SynchronizedClauseNode, ThreadLocalClauseNode, TypeClauseNode,
    TypeDefClauseNode, UsageClauseNode, UsageKind, UsingClauseNode, ValueClauseNode,
    ValueIntervalNode, WithLowerBoundsClauseNode,
};
pub use entry::{
    ConditionNode, EmbeddedStatementNode, END_EXEC_TAG, EntryBody, EntryNode, EXEC_SQL_TAG,
    GroupNode, RenameNode,
};
pub use span::Span;
