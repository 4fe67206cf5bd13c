//! Integration tests for the variant builders and the dispatch entry point.

use copybook_asg::{
    DeclarationKind, EntryContainer, LEVEL_NUMBER_CONDITION, LEVEL_NUMBER_RENAME,
    LEVEL_NUMBER_SCALAR,
};
use copybook_foundation::{Literal, NodeId};
use copybook_syntax::{
    ConditionNode, EmbeddedStatementNode, EntryBody, EntryNode, GroupNode, RenameNode,
    RenamesClauseNode, Span, ValueClauseNode,
};

fn group(id: u32, level: &str, name: &str) -> GroupNode {
    GroupNode::new(NodeId::new(id))
        .with_level(level)
        .with_name(name)
}

fn entry(id: u32, body: EntryBody) -> EntryNode {
    EntryNode::new(NodeId::new(id), Span::default(), body)
}

#[test]
fn group_entry_records_level_name_and_kind() {
    let mut container = EntryContainer::new();
    let id = container.add_group(&group(0, "01", "CUSTOMER"));

    let declaration = container.get(id).unwrap();
    assert_eq!(declaration.kind(), DeclarationKind::Group);
    assert_eq!(declaration.level(), Some(1));
    assert_eq!(declaration.name(), Some("CUSTOMER"));
    assert!(!declaration.is_filler());
    assert_eq!(declaration.syntax_node(), NodeId::new(0));
}

#[test]
fn rename_entry_gets_rename_sentinel() {
    let mut container = EntryContainer::new();
    let node = RenameNode::new(
        NodeId::new(0),
        "CUST-KEY",
        RenamesClauseNode::new("CUST-ID").with_through("CUST-NAME"),
    );
    let id = container.add_rename(&node);

    let declaration = container.get(id).unwrap();
    assert_eq!(declaration.kind(), DeclarationKind::Rename);
    assert_eq!(declaration.level(), Some(LEVEL_NUMBER_RENAME));

    let rename = declaration.as_rename().unwrap();
    assert_eq!(rename.renames.from, "CUST-ID");
    assert_eq!(rename.renames.through.as_deref(), Some("CUST-NAME"));
}

#[test]
fn condition_entry_gets_condition_sentinel_and_value() {
    let mut container = EntryContainer::new();
    let node = ConditionNode::new(
        NodeId::new(0),
        "IS-ACTIVE",
        ValueClauseNode::single(Literal::String("Y".into())),
    );
    let id = container.add_condition(&node);

    let declaration = container.get(id).unwrap();
    assert_eq!(declaration.level(), Some(LEVEL_NUMBER_CONDITION));

    let condition = declaration.as_condition().unwrap();
    assert_eq!(condition.value.intervals.len(), 1);
    assert_eq!(
        condition.value.intervals[0].from,
        Literal::String("Y".into())
    );
}

#[test]
fn embedded_statement_stores_verbatim_text() {
    let mut container = EntryContainer::new();
    let node = EmbeddedStatementNode::new(
        NodeId::new(0),
        vec![
            "*>EXECSQL DECLARE CUR CURSOR FOR".to_string(),
            "SELECT ID FROM ORDERS *>END-EXEC".to_string(),
        ],
    );
    let id = container.add_embedded_statement(&node);

    let declaration = container.get(id).unwrap();
    assert_eq!(declaration.kind(), DeclarationKind::EmbeddedStatement);
    assert_eq!(
        declaration.as_embedded_statement().unwrap().text,
        "DECLARE CUR CURSOR FOR\nSELECT ID FROM ORDERS"
    );
    // Embedded statements are unnamed: sequence only, no table entry.
    assert!(declaration.name().is_none());
    assert_eq!(container.declarations().len(), 1);
}

#[test]
fn scalar_marker_assigns_scalar_sentinel() {
    let mut container = EntryContainer::new();
    let node = GroupNode::new(NodeId::new(0)).scalar().with_name("WS-FLAG");
    let id = container.add_group(&node);

    assert_eq!(container.get(id).unwrap().level(), Some(LEVEL_NUMBER_SCALAR));
}

#[test]
fn unparsable_level_yields_none() {
    let mut container = EntryContainer::new();
    let id = container.add_group(&group(0, "LEVEL", "ODD"));
    assert_eq!(container.get(id).unwrap().level(), None);
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn add_group_twice_returns_same_declaration() {
    let mut container = EntryContainer::new();
    let node = group(0, "01", "REC");

    let first = container.add_group(&node);
    let second = container.add_group(&node);

    assert_eq!(first, second);
    assert_eq!(container.declarations().len(), 1);
}

#[test]
fn add_condition_twice_returns_same_declaration() {
    let mut container = EntryContainer::new();
    let node = ConditionNode::new(
        NodeId::new(0),
        "IS-SET",
        ValueClauseNode::single(Literal::Integer(1)),
    );

    assert_eq!(container.add_condition(&node), container.add_condition(&node));
    assert_eq!(container.declarations().len(), 1);
}

#[test]
fn dispatch_twice_keeps_single_child_edge() {
    let mut container = EntryContainer::new();
    let rec = container.create_entry(None, &entry(0, EntryBody::Group(group(0, "01", "REC"))));
    let field_entry = entry(1, EntryBody::Group(group(1, "05", "FIELD")));

    let first = container.create_entry(rec, &field_entry);
    let second = container.create_entry(rec, &field_entry);

    assert_eq!(first, second);
    assert_eq!(container.children(rec.unwrap()).len(), 1);
    assert_eq!(container.declarations().len(), 2);
}

// =============================================================================
// Symbol table
// =============================================================================

#[test]
fn lookup_finds_latest_declaration() {
    let mut container = EntryContainer::new();
    container.add_group(&group(0, "01", "REC"));
    container.add_group(&group(1, "05", "FIELD"));

    assert_eq!(container.declaration("FIELD").unwrap().level(), Some(5));
    assert!(container.declaration("MISSING").is_none());
}

#[test]
fn duplicate_names_overwrite_silently() {
    let mut container = EntryContainer::new();
    let first = container.add_group(&group(0, "01", "SHARED"));
    let second = container.add_group(&group(1, "05", "SHARED"));

    // The table now resolves to the newest declaration.
    assert_eq!(container.declaration_id("SHARED"), Some(second));
    // The shadowed one is still in the ordered sequence.
    assert_eq!(container.declarations().len(), 2);
    assert_eq!(container.get(first).unwrap().name(), Some("SHARED"));
    // No diagnostic is emitted for the overwrite.
    assert!(container.diagnostics().is_empty());
}

#[test]
fn strict_mode_flags_duplicates() {
    let mut container = EntryContainer::new();
    container.add_group(&group(0, "01", "A"));
    container.add_group(&group(1, "01", "B"));
    assert!(container.check_unique_names().is_ok());

    container.add_group(&group(2, "05", "A"));
    assert!(container.check_unique_names().is_err());
}

#[test]
fn fillers_are_sequence_only() {
    let mut container = EntryContainer::new();
    let filler = GroupNode::new(NodeId::new(0)).with_level("05").filler();
    container.add_group(&filler);

    assert_eq!(container.declarations().len(), 1);
    assert!(container.declarations()[0].is_filler());
    // Fillers never shadow anything and are not addressable by name.
    assert!(container.check_unique_names().is_ok());
}

// =============================================================================
// Dispatch failure path
// =============================================================================

#[test]
fn unrecognized_entry_warns_and_continues() {
    let mut container = EntryContainer::new();
    let results = container.create_entries(&[
        entry(0, EntryBody::Group(group(0, "01", "REC"))),
        entry(1, EntryBody::Unrecognized),
        entry(2, EntryBody::Group(group(2, "05", "FIELD"))),
    ]);

    assert!(results[0].is_some());
    assert!(results[1].is_none());
    assert!(results[2].is_some());

    // The malformed entry aborted nothing.
    assert_eq!(container.declarations().len(), 2);
    assert_eq!(container.diagnostics().warnings().count(), 1);
    let diagnostic = container.diagnostics().iter().next().unwrap();
    assert_eq!(diagnostic.node, NodeId::new(1));
}
