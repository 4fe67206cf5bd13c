//! The declaration container and its construction pass.
//!
//! `EntryContainer` owns every declaration built from one scope of a
//! data division, in insertion order, plus the name-keyed symbol table
//! and the node-identity registry. The (external) tree walk feeds it
//! one entry syntax node at a time through [`EntryContainer::create_entry`];
//! nesting is reconstructed on the fly by walking up the chain of
//! already-open groups and comparing level numbers.

use std::collections::{HashMap, HashSet};

use copybook_foundation::{Diagnostic, Diagnostics, Error, Result, parse_integer};
use copybook_syntax::{
    ConditionNode, EmbeddedStatementNode, EntryBody, EntryNode, GroupNode, RenameNode,
};

use crate::clauses::{GroupClauses, RenamesClause, ValueClause};
use crate::declaration::{
    ConditionData, DeclId, Declaration, DeclarationBody, DeclarationKind, EmbeddedStatementData,
    GroupData, LEVEL_NUMBER_CONDITION, LEVEL_NUMBER_RENAME, LEVEL_NUMBER_SCALAR, RenameData,
    is_groupable_level,
};
use crate::registry::NodeRegistry;
use crate::tag;

/// Owns the declarations of one scope and builds the graph over them.
///
/// All `add_*` operations are idempotent: re-invoking one with a syntax
/// node that was already built returns the existing declaration and
/// changes nothing.
#[derive(Debug, Default)]
pub struct EntryContainer {
    entries: Vec<Declaration>,
    symbol_table: HashMap<String, DeclId>,
    registry: NodeRegistry,
    diagnostics: Diagnostics,
}

impl EntryContainer {
    /// Creates an empty container for one scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Variant builders
    // =========================================================================

    /// Builds a group declaration from a group syntax node.
    ///
    /// The level number comes from the raw token when one parses, or
    /// the scalar sentinel when the grammar matched the non-leveled
    /// scalar form; an unparsable token yields no level at all. Every
    /// present clause sub-node is attached through its adapter.
    pub fn add_group(&mut self, node: &GroupNode) -> DeclId {
        if let Some(existing) = self.registry.get(node.id) {
            return existing;
        }

        let level = if node.scalar {
            Some(LEVEL_NUMBER_SCALAR)
        } else {
            node.level_token
                .as_deref()
                .and_then(parse_integer)
                .and_then(|n| i32::try_from(n).ok())
        };

        let mut clauses = GroupClauses::new();

        if let Some(clause) = &node.aligned {
            clauses.attach_aligned(clause);
        }
        for clause in &node.blank_when_zero {
            clauses.attach_blank_when_zero(clause);
        }
        for clause in &node.common_own_local {
            clauses.attach_common_own_local(clause);
        }
        if let Some(clause) = &node.external {
            clauses.attach_external(clause);
        }
        if let Some(clause) = &node.global {
            clauses.attach_global(clause);
        }
        if let Some(clause) = &node.integer_string {
            clauses.attach_integer_string(clause);
        }
        for clause in &node.justified {
            clauses.attach_justified(clause);
        }
        for clause in &node.occurs {
            clauses.attach_occurs(clause);
        }
        for clause in &node.picture {
            clauses.attach_picture(clause);
        }
        for clause in &node.received_by {
            clauses.attach_received_by(clause);
        }
        if let Some(clause) = &node.record_area {
            clauses.attach_record_area(clause);
        }
        if let Some(clause) = &node.redefines {
            clauses.attach_redefines(clause);
        }
        for clause in &node.sign {
            clauses.attach_sign(clause);
        }
        for clause in &node.synchronized {
            clauses.attach_synchronized(clause);
        }
        if let Some(clause) = &node.thread_local {
            clauses.attach_thread_local(clause);
        }
        for clause in &node.type_clause {
            clauses.attach_type(clause);
        }
        if let Some(clause) = &node.type_def {
            clauses.attach_type_def(clause);
        }
        for clause in &node.usage {
            clauses.attach_usage(clause);
        }
        for clause in &node.using {
            clauses.attach_using(clause);
        }
        for clause in &node.value {
            clauses.attach_value(clause);
        }
        if let Some(clause) = &node.with_lower_bounds {
            clauses.attach_with_lower_bounds(clause);
        }

        let declaration = Declaration::new(
            node.id,
            node.name.clone(),
            level,
            node.filler,
            DeclarationBody::Group(GroupData::new(clauses)),
        );
        self.insert(declaration)
    }

    /// Builds a rename declaration (fixed rename sentinel level).
    pub fn add_rename(&mut self, node: &RenameNode) -> DeclId {
        if let Some(existing) = self.registry.get(node.id) {
            return existing;
        }

        let declaration = Declaration::new(
            node.id,
            Some(node.name.clone()),
            Some(LEVEL_NUMBER_RENAME),
            false,
            DeclarationBody::Rename(RenameData {
                renames: RenamesClause::from_node(&node.renames),
            }),
        );
        self.insert(declaration)
    }

    /// Builds a condition declaration (fixed condition sentinel level).
    pub fn add_condition(&mut self, node: &ConditionNode) -> DeclId {
        if let Some(existing) = self.registry.get(node.id) {
            return existing;
        }

        let declaration = Declaration::new(
            node.id,
            Some(node.name.clone()),
            Some(LEVEL_NUMBER_CONDITION),
            false,
            DeclarationBody::Condition(ConditionData {
                value: ValueClause::from_node(&node.value),
            }),
        );
        self.insert(declaration)
    }

    /// Builds an embedded-statement declaration.
    ///
    /// The preprocessor markers are stripped; the remaining text is
    /// stored verbatim. Embedded statements are unnamed and never
    /// enter the symbol table.
    pub fn add_embedded_statement(&mut self, node: &EmbeddedStatementNode) -> DeclId {
        if let Some(existing) = self.registry.get(node.id) {
            return existing;
        }

        let text = tag::untagged_text(&node.lines, &node.begin_tag, &node.end_tag);
        let declaration = Declaration::new(
            node.id,
            None,
            None,
            false,
            DeclarationBody::EmbeddedStatement(EmbeddedStatementData { text }),
        );
        self.insert(declaration)
    }

    fn insert(&mut self, declaration: Declaration) -> DeclId {
        let id = DeclId(u32::try_from(self.entries.len()).unwrap_or(u32::MAX));
        self.registry.insert(declaration.syntax_node(), id);
        if let Some(name) = declaration.name() {
            // Duplicate names overwrite; the shadowed declaration stays
            // reachable through the ordered sequence and the structure.
            self.symbol_table.insert(name.to_string(), id);
        }
        self.entries.push(declaration);
        id
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Builds the declaration for one entry and nests it if possible.
    ///
    /// `current_group` is the nearest group currently open in the
    /// top-to-bottom scan, or `None` at the top of a scope. An
    /// unrecognized entry shape produces a warning diagnostic and no
    /// declaration.
    pub fn create_entry(
        &mut self,
        current_group: Option<DeclId>,
        entry: &EntryNode,
    ) -> Option<DeclId> {
        let result = match &entry.body {
            EntryBody::Group(node) => Some(self.add_group(node)),
            EntryBody::Rename(node) => Some(self.add_rename(node)),
            EntryBody::Condition(node) => Some(self.add_condition(node)),
            EntryBody::EmbeddedStatement(node) => Some(self.add_embedded_statement(node)),
            EntryBody::Unrecognized => {
                self.diagnostics.push(Diagnostic::warning(
                    entry.id,
                    "unrecognized data description entry shape",
                ));
                None
            }
        };

        if let (Some(current), Some(id)) = (current_group, result) {
            self.group_declaration(current, id);
        }

        result
    }

    /// Runs one top-to-bottom pass over a sequence of entries.
    ///
    /// Tracks the most recently created group as the open group for
    /// subsequent entries, the way the surrounding division walk does.
    pub fn create_entries(&mut self, entries: &[EntryNode]) -> Vec<Option<DeclId>> {
        let mut current_group: Option<DeclId> = None;
        let mut results = Vec::with_capacity(entries.len());

        for entry in entries {
            let result = self.create_entry(current_group, entry);
            if let Some(id) = result
                && self.entries[id.index()].kind() == DeclarationKind::Group
            {
                current_group = Some(id);
            }
            results.push(result);
        }

        results
    }

    // =========================================================================
    // Hierarchy grouping
    // =========================================================================

    /// Attaches a declaration under the right ancestor of the open group.
    ///
    /// Recursive ascent: a larger level number nests under the open
    /// group; otherwise the walk moves to the group's parent. Equal
    /// levels never nest. Entries at a reserved sentinel level, or
    /// with no level, stay free-standing, and such entries never gain
    /// children either.
    fn group_declaration(&mut self, current: DeclId, entry: DeclId) {
        let Some(level) = self.entries[entry.index()].level() else {
            return;
        };
        if !is_groupable_level(Some(level)) {
            return;
        }
        if self.entries[entry.index()].parent_group().is_some() {
            // Already attached by an earlier pass over the same node.
            return;
        }

        let current_decl = &self.entries[current.index()];
        let current_level = current_decl.level();
        let can_nest_under = current_decl.as_group().is_some()
            && is_groupable_level(current_level)
            && current_level.is_some_and(|current_level| level > current_level);

        if can_nest_under {
            if let Some(group) = self.entries[current.index()].as_group_mut() {
                group.push_child(entry);
            }
            self.entries[entry.index()].set_parent_group(current);
        } else if let Some(parent) = self.entries[current.index()].parent_group() {
            self.group_declaration(parent, entry);
        }
        // No parent left: the entry stays a root of the container.
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// All declarations of this scope, in insertion order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.entries
    }

    /// The declaration built at the given id.
    #[must_use]
    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.entries.get(id.index())
    }

    /// Symbol-table lookup; the most recently added declaration wins.
    #[must_use]
    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declaration_id(name).map(|id| &self.entries[id.index()])
    }

    /// Symbol-table lookup returning the arena id.
    #[must_use]
    pub fn declaration_id(&self, name: &str) -> Option<DeclId> {
        self.symbol_table.get(name).copied()
    }

    /// Every parentless declaration, in insertion order.
    pub fn root_declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter().filter(|d| d.parent_group().is_none())
    }

    /// Ids of every parentless declaration, in insertion order.
    #[must_use]
    pub fn root_ids(&self) -> Vec<DeclId> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, d)| d.parent_group().is_none())
            .map(|(index, _)| DeclId(u32::try_from(index).unwrap_or(u32::MAX)))
            .collect()
    }

    /// Children of the given declaration; empty for non-groups.
    #[must_use]
    pub fn children(&self, id: DeclId) -> &[DeclId] {
        self.get(id)
            .and_then(Declaration::as_group)
            .map_or(&[], GroupData::children)
    }

    /// Parent group of the given declaration, if it was nested.
    #[must_use]
    pub fn parent_group(&self, id: DeclId) -> Option<DeclId> {
        self.get(id).and_then(Declaration::parent_group)
    }

    /// Number of declarations in this scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagnostics accumulated during construction.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Drains the accumulated diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    // =========================================================================
    // Opt-in strict validation
    // =========================================================================

    /// Rejects scopes that re-declare a name.
    ///
    /// The build itself accepts duplicates (the symbol table keeps the
    /// latest); callers that want unique names run this after the pass.
    pub fn check_unique_names(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for declaration in &self.entries {
            if declaration.is_filler() {
                continue;
            }
            if let Some(name) = declaration.name()
                && !seen.insert(name)
            {
                return Err(Error::duplicate_name(name));
            }
        }
        Ok(())
    }
}
