//! Property tests for the `Environment` arena: parent/child consistency
//! and `reduce`'s pre-order, visit-once guarantee, over randomly shaped
//! trees.

use proptest::prelude::*;
use wollok_ast::{AnyNode, ClassNode, Environment, EnvironmentNode, FieldNode, Node, NodeId, PackageNode};
use wollok_source::Span;

/// Builds a small environment-package-class-fields tree with `field_count`
/// fields in a single class, and returns it alongside the total node count.
fn build_tree(field_count: usize) -> (Environment, usize) {
    let mut nodes = Vec::new();
    nodes.push(Node::new(AnyNode::Environment(EnvironmentNode { packages: vec![NodeId::new(1)] }), Span::default()));
    nodes.push(Node::new(
        AnyNode::Package(PackageNode { name: "p".into(), members: vec![NodeId::new(2)] }),
        Span::default(),
    ));
    let field_ids: Vec<NodeId> = (0..field_count).map(|i| NodeId::new(3 + i as u32)).collect();
    nodes.push(Node::new(
        AnyNode::Class(ClassNode { name: "C".into(), superclass: None, mixins: vec![], members: field_ids.clone() }),
        Span::default(),
    ));
    for i in 0..field_count {
        nodes.push(Node::new(
            AnyNode::Field(FieldNode { name: format!("f{i}"), initializer: None }),
            Span::default(),
        ));
    }
    let total = nodes.len();
    (Environment::build(nodes, NodeId::new(0)), total)
}

proptest! {
    #[test]
    fn reduce_visits_every_node_exactly_once(field_count in 0usize..12) {
        let (env, total) = build_tree(field_count);
        let visited = env.reduce(env.root(), Vec::new(), &mut |mut acc, _env, id| {
            acc.push(id);
            acc
        });
        prop_assert_eq!(visited.len(), total);
        let mut seen = visited.clone();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), total, "reduce must not revisit a node");
    }

    #[test]
    fn every_non_root_node_parent_lists_it_as_a_child(field_count in 0usize..12) {
        let (env, _total) = build_tree(field_count);
        let ids = env.reduce(env.root(), Vec::new(), &mut |mut acc, _env, id| {
            acc.push(id);
            acc
        });
        for id in ids {
            if let Some(parent) = env.parent_of(id).unwrap() {
                let parent_node = env.get_node(parent).expect("parent must exist");
                prop_assert!(parent_node.children().contains(&id));
            }
        }
    }

    #[test]
    fn root_has_no_parent(field_count in 0usize..12) {
        let (env, _total) = build_tree(field_count);
        prop_assert_eq!(env.parent_of(env.root()).unwrap(), None);
    }

    #[test]
    fn class_fqn_resolves_back_to_the_class_node(field_count in 0usize..12) {
        let (env, _total) = build_tree(field_count);
        prop_assert_eq!(env.get_node_by_fqn("p.C").unwrap(), NodeId::new(2));
    }
}
