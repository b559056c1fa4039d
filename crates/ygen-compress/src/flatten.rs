//! Skipping over choice and case nodes.
//!
//! Choices and cases are directories in the schema but not data tree nodes,
//! so `/container/choice/case-one/leaf-a` contributes `leaf-a` directly to
//! `container`. Choices nest (`/choice-a/choice-b/case-c/...`) and a case
//! may hold several data nodes, so every branch is followed down to its
//! first non-wrapper nodes.

use ygen_core::NodeRef;

/// The first descendants of `node` that are not choice or case nodes.
///
/// Results follow branch declaration order, and within a branch child
/// declaration order. The search stops at the first non-wrapper node on each
/// branch. A node that is not a wrapper flattens to itself.
#[must_use]
pub fn flatten_wrapper(node: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    let mut found = Vec::new();
    collect_first_non_wrappers(node, &mut found);
    found
}

fn collect_first_non_wrappers<'t>(node: NodeRef<'t>, found: &mut Vec<NodeRef<'t>>) {
    if !node.is_wrapper() {
        found.push(node);
        return;
    }
    for child in node.children() {
        collect_first_non_wrappers(child, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ygen_core::{NodeKind, NodeSpec, SchemaTree};

    fn names<'t>(nodes: &[NodeRef<'t>]) -> Vec<&'t str> {
        nodes.iter().map(|n| n.name()).collect()
    }

    #[test]
    fn nested_choices_flatten_in_declaration_order() {
        let tree = SchemaTree::from_spec(
            &NodeSpec::container("policy").with_child(
                NodeSpec::new("action", NodeKind::Choice).with_children([
                    NodeSpec::new("accept", NodeKind::Case).with_child(NodeSpec::leaf("accept-route")),
                    NodeSpec::new("modify", NodeKind::Case).with_children([
                        NodeSpec::new("target", NodeKind::Choice).with_children([
                            NodeSpec::new("by-med", NodeKind::Case).with_child(NodeSpec::leaf("med")),
                            NodeSpec::new("by-pref", NodeKind::Case)
                                .with_child(NodeSpec::leaf("local-pref")),
                        ]),
                        NodeSpec::leaf("comment"),
                    ]),
                    NodeSpec::new("reject", NodeKind::Case).with_child(
                        NodeSpec::container("reject-options").with_child(NodeSpec::leaf("reason")),
                    ),
                ]),
            ),
        )
        .unwrap();

        let flat = flatten_wrapper(tree.find("/policy/action").unwrap());
        assert_eq!(
            names(&flat),
            vec!["accept-route", "med", "local-pref", "comment", "reject-options"]
        );
        assert!(flat.iter().all(|n| !n.is_wrapper()));
    }

    #[test]
    fn does_not_descend_past_first_data_node() {
        let tree = SchemaTree::from_spec(
            &NodeSpec::new("choice", NodeKind::Choice).with_child(
                NodeSpec::new("case", NodeKind::Case).with_child(
                    NodeSpec::container("outer")
                        .with_child(NodeSpec::new("inner-choice", NodeKind::Choice)),
                ),
            ),
        )
        .unwrap();
        let flat = flatten_wrapper(tree.root());
        assert_eq!(names(&flat), vec!["outer"]);
    }

    #[test]
    fn empty_wrapper_yields_nothing() {
        let tree = SchemaTree::from_spec(
            &NodeSpec::new("choice", NodeKind::Choice)
                .with_child(NodeSpec::new("empty", NodeKind::Case)),
        )
        .unwrap();
        assert!(flatten_wrapper(tree.root()).is_empty());
    }

    #[test]
    fn non_wrapper_flattens_to_itself() {
        let tree = SchemaTree::from_spec(&NodeSpec::leaf("mtu")).unwrap();
        assert_eq!(flatten_wrapper(tree.root()), vec![tree.root()]);
    }
}
