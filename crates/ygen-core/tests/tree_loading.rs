//! Integration tests for building schema trees from JSON descriptions.

use pretty_assertions::assert_eq;
use ygen_core::{ConfigFlag, NodeKind, NodeRef, SchemaTree};

fn fixture_tree() -> SchemaTree {
    SchemaTree::from_json(include_str!("fixtures/openconfig_interfaces.json"))
        .expect("fixture should load")
}

fn child_names(node: NodeRef<'_>) -> Vec<&str> {
    node.children().map(NodeRef::name).collect()
}

#[test]
fn fixture_keeps_declaration_order() {
    let tree = fixture_tree();
    let interface = tree.find("/interfaces/interface").unwrap();
    assert_eq!(
        child_names(interface),
        vec!["name", "config", "state", "ethernet", "subinterfaces"]
    );
    let state = interface.child("state").unwrap();
    assert_eq!(
        child_names(state),
        vec!["name", "admin-state", "oper-state", "counters"]
    );
}

#[test]
fn fixture_kinds_and_flags() {
    let tree = fixture_tree();
    let interface = tree.find("/interfaces/interface").unwrap();
    assert_eq!(interface.kind(), NodeKind::List);
    assert_eq!(interface.child("name").unwrap().kind(), NodeKind::LeafRef);

    let state = interface.child("state").unwrap();
    assert_eq!(state.config(), ConfigFlag::ReadOnly);
    assert!(state.is_config_state_container());

    let in_pkts = tree
        .find("/interfaces/interface/state/counters/in-pkts")
        .unwrap();
    assert_eq!(in_pkts.config(), ConfigFlag::Inherited);
    assert!(in_pkts.is_read_only());

    let mac = tree
        .find("/interfaces/interface/ethernet/config/mac-address")
        .unwrap();
    assert!(!mac.is_read_only());
}

#[test]
fn parent_links_walk_back_to_root() {
    let tree = fixture_tree();
    let index = tree
        .find("/interfaces/interface/subinterfaces/subinterface/config/index")
        .unwrap();
    let mut ancestors = Vec::new();
    let mut cursor = index.parent();
    while let Some(node) = cursor {
        ancestors.push(node.name());
        cursor = node.parent();
    }
    assert_eq!(
        ancestors,
        vec!["config", "subinterface", "subinterfaces", "interface", "interfaces"]
    );
}
