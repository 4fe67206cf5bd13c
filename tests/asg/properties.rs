//! Property tests for the grouping and identity invariants.
//!
//! Random flat level sequences are fed through a full pass; the
//! resulting graph must satisfy the structural invariants no matter
//! how the levels interleave.

use copybook_asg::{DeclarationKind, EntryContainer, is_groupable_level};
use copybook_foundation::NodeId;
use copybook_syntax::{EntryBody, EntryNode, GroupNode, Span};
use proptest::prelude::*;

/// Level tokens covering nestable levels, all three sentinels, and an
/// unparsable token.
fn level_token() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (1u32..=49).prop_map(|n| format!("{n:02}")),
        1 => Just("66".to_string()),
        1 => Just("77".to_string()),
        1 => Just("88".to_string()),
        1 => Just("XX".to_string()),
    ]
}

/// Builds group-shaped entries with names drawn from a small pool so
/// duplicate names occur often.
fn entries_from(tokens: &[String]) -> Vec<EntryNode> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let id = NodeId::new(u32::try_from(index).unwrap());
            let name = format!("F-{}", index % 5);
            EntryNode::new(
                id,
                Span::default(),
                EntryBody::Group(GroupNode::new(id).with_level(token).with_name(name)),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn level_ordering_holds_on_every_edge(tokens in prop::collection::vec(level_token(), 0..60)) {
        let entries = entries_from(&tokens);
        let mut container = EntryContainer::new();
        container.create_entries(&entries);

        for declaration in container.declarations() {
            if let Some(parent) = declaration.parent_group() {
                let parent_decl = container.get(parent).unwrap();
                prop_assert_eq!(parent_decl.kind(), DeclarationKind::Group);
                prop_assert!(is_groupable_level(declaration.level()));
                prop_assert!(is_groupable_level(parent_decl.level()));
                prop_assert!(declaration.level().unwrap() > parent_decl.level().unwrap());
            }
        }
    }

    #[test]
    fn sentinels_stay_detached(tokens in prop::collection::vec(level_token(), 0..60)) {
        let entries = entries_from(&tokens);
        let mut container = EntryContainer::new();
        container.create_entries(&entries);

        for (index, declaration) in container.declarations().iter().enumerate() {
            if !is_groupable_level(declaration.level()) {
                prop_assert!(declaration.parent_group().is_none());
                let id = container.root_ids()
                    .into_iter()
                    .find(|id| id.index() == index);
                prop_assert!(id.is_some());
                prop_assert!(container.children(id.unwrap()).is_empty());
            }
        }
    }

    #[test]
    fn roots_view_matches_parentless_scan(tokens in prop::collection::vec(level_token(), 0..60)) {
        let entries = entries_from(&tokens);
        let mut container = EntryContainer::new();
        container.create_entries(&entries);

        let from_view: Vec<_> = container.root_declarations()
            .map(copybook_asg::Declaration::syntax_node)
            .collect();
        let from_scan: Vec<_> = container.declarations()
            .iter()
            .filter(|d| d.parent_group().is_none())
            .map(|d| d.syntax_node())
            .collect();
        prop_assert_eq!(from_view, from_scan);
    }

    #[test]
    fn symbol_table_is_last_write_wins(tokens in prop::collection::vec(level_token(), 0..60)) {
        let entries = entries_from(&tokens);
        let mut container = EntryContainer::new();
        container.create_entries(&entries);

        for pool in 0..5 {
            let name = format!("F-{pool}");
            let latest = container.declarations()
                .iter()
                .rev()
                .find(|d| d.name() == Some(name.as_str()));
            let resolved = container.declaration(&name).map(|d| d.syntax_node());
            prop_assert_eq!(resolved, latest.map(|d| d.syntax_node()));
        }
    }

    #[test]
    fn second_pass_changes_nothing(tokens in prop::collection::vec(level_token(), 0..40)) {
        let entries = entries_from(&tokens);
        let mut container = EntryContainer::new();
        let first = container.create_entries(&entries);

        let parents_before: Vec<_> = container.declarations()
            .iter()
            .map(copybook_asg::Declaration::parent_group)
            .collect();

        let second = container.create_entries(&entries);

        prop_assert_eq!(first, second);
        prop_assert_eq!(container.declarations().len(), entries.len());
        let parents_after: Vec<_> = container.declarations()
            .iter()
            .map(copybook_asg::Declaration::parent_group)
            .collect();
        prop_assert_eq!(parents_before, parents_after);
    }
}
