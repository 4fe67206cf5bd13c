//! Integration tests for clause attachment on group declarations.

use copybook_asg::{ClauseKind, EntryContainer};
use copybook_foundation::{Literal, NodeId};
use copybook_syntax::{
    AlignedClauseNode, BlankWhenZeroClauseNode, CommonOwnLocal, CommonOwnLocalClauseNode,
    ExternalClauseNode, GlobalClauseNode, GroupNode, IntegerStringClauseNode, IntegerStringKind,
    JustifiedClauseNode, OccursClauseNode, PictureClauseNode, ReceivedByClauseNode, ReceivedByMode,
    RecordAreaClauseNode, RedefinesClauseNode, SignClauseNode, SynchronizedAlignment,
    SynchronizedClauseNode, ThreadLocalClauseNode, TypeClauseNode, TypeDefClauseNode,
    UsageClauseNode, UsageKind, UsingClauseNode, ValueClauseNode, ValueIntervalNode,
    WithLowerBoundsClauseNode,
};

#[test]
fn picture_and_usage_are_stored() {
    let mut container = EntryContainer::new();
    let node = GroupNode::new(NodeId::new(0))
        .with_level("05")
        .with_name("AMOUNT")
        .with_picture(PictureClauseNode::new("S9(7)V99"))
        .with_usage(UsageClauseNode {
            usage: UsageKind::Comp3,
        });
    let id = container.add_group(&node);

    let clauses = container.get(id).unwrap().as_group().unwrap().clauses();
    assert_eq!(
        clauses.picture().map(|p| p.picture.as_str()),
        Some("S9(7)V99")
    );
    assert_eq!(clauses.usage(), Some(UsageKind::Comp3));
}

#[test]
fn repeated_picture_keeps_first_only() {
    let mut container = EntryContainer::new();
    let node = GroupNode::new(NodeId::new(0))
        .with_level("05")
        .with_name("TWICE-PIC")
        .with_picture(PictureClauseNode::new("9(4)"))
        .with_picture(PictureClauseNode::new("X(9)"));
    let id = container.add_group(&node);

    let clauses = container.get(id).unwrap().as_group().unwrap().clauses();
    assert_eq!(clauses.picture().map(|p| p.picture.as_str()), Some("9(4)"));
}

#[test]
fn occurs_clauses_all_attach_in_source_order() {
    let mut container = EntryContainer::new();
    let node = GroupNode::new(NodeId::new(0))
        .with_level("05")
        .with_name("TABLE-ITEM")
        .with_occurs(OccursClauseNode::fixed(10).with_index("IDX-A"))
        .with_occurs(
            OccursClauseNode::fixed(1)
                .with_to(50)
                .with_depending_on("WS-COUNT"),
        );
    let id = container.add_group(&node);

    let occurs = container
        .get(id)
        .unwrap()
        .as_group()
        .unwrap()
        .clauses()
        .occurs();
    assert_eq!(occurs.len(), 2);
    assert_eq!(occurs[0].from, 10);
    assert_eq!(occurs[0].indexed_by, ["IDX-A"]);
    assert_eq!(occurs[1].to, Some(50));
    assert_eq!(occurs[1].depending_on.as_deref(), Some("WS-COUNT"));
}

#[test]
fn value_intervals_survive_translation() {
    let mut container = EntryContainer::new();
    let value = ValueClauseNode::single(Literal::Integer(0)).with_interval(
        ValueIntervalNode::range(Literal::Integer(10), Literal::Integer(99)),
    );
    let node = GroupNode::new(NodeId::new(0))
        .with_level("05")
        .with_name("RANGED")
        .with_value(value);
    let id = container.add_group(&node);

    let stored = container
        .get(id)
        .unwrap()
        .as_group()
        .unwrap()
        .clauses()
        .value()
        .unwrap();
    assert_eq!(stored.intervals.len(), 2);
    assert_eq!(stored.intervals[1].from, Literal::Integer(10));
    assert_eq!(stored.intervals[1].through, Some(Literal::Integer(99)));
}

#[test]
fn full_entry_attaches_every_clause_kind() {
    let mut node = GroupNode::new(NodeId::new(0))
        .with_level("01")
        .with_name("EVERYTHING");
    node.aligned = Some(AlignedClauseNode);
    node.blank_when_zero.push(BlankWhenZeroClauseNode);
    node.common_own_local.push(CommonOwnLocalClauseNode {
        kind: CommonOwnLocal::Common,
    });
    node.external = Some(ExternalClauseNode);
    node.global = Some(GlobalClauseNode);
    node.integer_string = Some(IntegerStringClauseNode {
        kind: IntegerStringKind::Integer,
    });
    node.justified.push(JustifiedClauseNode { right: true });
    node.occurs.push(OccursClauseNode::fixed(2));
    node.picture.push(PictureClauseNode::new("X"));
    node.received_by.push(ReceivedByClauseNode {
        mode: ReceivedByMode::Reference,
    });
    node.record_area = Some(RecordAreaClauseNode);
    node.redefines = Some(RedefinesClauseNode::new("OTHER"));
    node.sign.push(SignClauseNode {
        leading: false,
        separate: true,
    });
    node.synchronized.push(SynchronizedClauseNode {
        alignment: Some(SynchronizedAlignment::Left),
    });
    node.thread_local = Some(ThreadLocalClauseNode);
    node.type_clause.push(TypeClauseNode {
        type_name: "CUST-T".to_string(),
    });
    node.type_def = Some(TypeDefClauseNode { strong: true });
    node.usage.push(UsageClauseNode {
        usage: UsageKind::Display,
    });
    node.using.push(UsingClauseNode {
        operand: "PARAM-1".to_string(),
    });
    node.value.push(ValueClauseNode::single(Literal::Integer(7)));
    node.with_lower_bounds = Some(WithLowerBoundsClauseNode);

    let mut container = EntryContainer::new();
    let id = container.add_group(&node);
    let clauses = container.get(id).unwrap().as_group().unwrap().clauses();

    for kind in [
        ClauseKind::Aligned,
        ClauseKind::BlankWhenZero,
        ClauseKind::CommonOwnLocal,
        ClauseKind::External,
        ClauseKind::Global,
        ClauseKind::IntegerString,
        ClauseKind::Justified,
        ClauseKind::Occurs,
        ClauseKind::Picture,
        ClauseKind::ReceivedBy,
        ClauseKind::RecordArea,
        ClauseKind::Redefines,
        ClauseKind::Sign,
        ClauseKind::Synchronized,
        ClauseKind::ThreadLocal,
        ClauseKind::Type,
        ClauseKind::TypeDef,
        ClauseKind::Usage,
        ClauseKind::Using,
        ClauseKind::Value,
        ClauseKind::WithLowerBounds,
    ] {
        assert!(clauses.has(kind), "missing clause kind: {kind}");
    }

    assert_eq!(clauses.common_own_local(), Some(CommonOwnLocal::Common));
    assert_eq!(clauses.received_by(), Some(ReceivedByMode::Reference));
    assert!(clauses.sign().is_some_and(|s| s.separate && !s.leading));
    assert_eq!(
        clauses.synchronized().and_then(|s| s.alignment),
        Some(SynchronizedAlignment::Left)
    );
    assert!(clauses.type_def().is_some_and(|t| t.strong));
    assert_eq!(clauses.using().map(|u| u.operand.as_str()), Some("PARAM-1"));
}

#[test]
fn absent_clauses_read_as_absent() {
    let mut container = EntryContainer::new();
    let id = container.add_group(
        &GroupNode::new(NodeId::new(0))
            .with_level("05")
            .with_name("BARE"),
    );

    let clauses = container.get(id).unwrap().as_group().unwrap().clauses();
    assert!(!clauses.has(ClauseKind::Picture));
    assert!(!clauses.has(ClauseKind::Occurs));
    assert!(!clauses.aligned());
    assert!(clauses.redefines().is_none());
}
