//! Syntax-node → graph-node identity registry.
//!
//! Scoped to one container, i.e. one build pass. Every `add_*`
//! operation consults the registry before constructing anything, so a
//! syntax node maps to at most one declaration no matter how often
//! construction is re-entered. Construction never bypasses it.

use std::collections::HashMap;

use copybook_foundation::NodeId;

use crate::declaration::DeclId;

/// Maps syntax-node identities to already-built declarations.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    map: HashMap<NodeId, DeclId>,
}

impl NodeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the declaration already built for a syntax node, if any.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<DeclId> {
        self.map.get(&node).copied()
    }

    /// Returns true if a declaration was already built for the node.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.map.contains_key(&node)
    }

    /// Records the declaration built for a syntax node.
    pub fn insert(&mut self, node: NodeId, decl: DeclId) {
        self.map.insert(node, decl);
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if nothing was registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
