//! Copybook - Declaration-graph builder for data division record layouts
//!
//! This crate re-exports all layers of the Copybook system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: copybook_asg        — Declaration graph, container, grouping
//! Layer 1: copybook_syntax     — Syntax nodes the parser emits
//! Layer 0: copybook_foundation — Core types (NodeId, Literal, Diagnostics)
//! ```

pub use copybook_asg as asg;
pub use copybook_foundation as foundation;
pub use copybook_syntax as syntax;
