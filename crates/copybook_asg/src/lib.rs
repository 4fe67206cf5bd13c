//! Declaration-graph builder for data division record layouts.
//!
//! This crate turns the flat sequence of declaration syntax nodes the
//! parser produces into a typed, hierarchical graph:
//!
//! - [`EntryContainer`] owns every declaration of one scope, dispatches
//!   each syntax node to the matching variant builder, and keeps the
//!   name-keyed symbol table.
//! - [`Declaration`] is one graph node; groups carry child references
//!   and attached [`GroupClauses`].
//! - [`NodeRegistry`] guarantees at most one graph node per syntax
//!   node, making every `add_*` operation safe to re-enter.
//!
//! Nesting is implied by relative level-number magnitude in the source
//! (larger levels nest under smaller ones); the container reconstructs
//! it by walking up the chain of open groups as the flat list is
//! consumed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod clauses;
mod container;
mod declaration;
pub mod pretty;
mod registry;
mod tag;

pub use clauses::{
    ClauseKind, GroupClauses, JustifiedClause, OccursClause, PictureClause, RedefinesClause,
    RenamesClause, SignClause, SynchronizedClause, TypeClause, TypeDefClause, UsingClause,
    ValueClause, ValueInterval,
};
pub use container::EntryContainer;
pub use declaration::{
    ConditionData, DeclId, Declaration, DeclarationBody, DeclarationKind, EmbeddedStatementData,
    GroupData, LEVEL_NUMBER_CONDITION, LEVEL_NUMBER_RENAME, LEVEL_NUMBER_SCALAR, RenameData,
    is_groupable_level,
};
pub use registry::NodeRegistry;
pub use tag::untagged_text;
