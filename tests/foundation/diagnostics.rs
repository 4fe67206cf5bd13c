//! Integration tests for the diagnostics collector.

use copybook_foundation::{Diagnostic, Diagnostics, NodeId, Severity};

#[test]
fn diagnostics_accumulate_in_emission_order() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(Diagnostic::warning(NodeId::new(0), "first"));
    diagnostics.push(Diagnostic::warning(NodeId::new(1), "second"));

    let nodes: Vec<_> = diagnostics.iter().map(|d| d.node).collect();
    assert_eq!(nodes, [NodeId::new(0), NodeId::new(1)]);
}

#[test]
fn severity_split() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(Diagnostic::warning(NodeId::new(0), "w"));
    diagnostics.push(Diagnostic::error(NodeId::new(1), "e"));
    diagnostics.push(Diagnostic::warning(NodeId::new(2), "w"));

    assert_eq!(diagnostics.warnings().count(), 2);
    assert_eq!(diagnostics.len(), 3);
}

#[test]
fn diagnostic_fields_are_structured() {
    let diagnostic = Diagnostic::warning(NodeId::new(7), "unrecognized entry");
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.node, NodeId::new(7));
    assert_eq!(diagnostic.message, "unrecognized entry");
}

#[test]
fn take_leaves_collector_reusable() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(Diagnostic::warning(NodeId::new(0), "w"));

    assert_eq!(diagnostics.take().len(), 1);
    assert!(diagnostics.is_empty());

    diagnostics.push(Diagnostic::warning(NodeId::new(1), "again"));
    assert_eq!(diagnostics.len(), 1);
}
