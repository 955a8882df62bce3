//! The `Environment`: owns every node in a tree and the two indices built
//! over it once the tree is complete — `id -> parentId` and
//! `fqn -> NodeId` — plus `reduce`, the sole traversal primitive used by
//! everything downstream (the validator's rule engine and the runtime's
//! `get_node_by_fqn`-driven class lookups both go through it).

use rustc_hash::FxHashMap;

use crate::errors::EnvironmentError;
use crate::id::NodeId;
use crate::nodes::{AnyNode, Node};

/// Returns the name a node contributes to a fully-qualified name, if any.
///
/// Only module-level, user-named entities participate in FQNs: packages,
/// classes, mixins, named singletons, programs, tests, and describes.
/// Fields, methods, and parameters are addressed relative to their owner,
/// not by a global FQN.
fn fqn_segment(data: &AnyNode) -> Option<&str> {
    match data {
        AnyNode::Package(n) => Some(&n.name),
        AnyNode::Class(n) => Some(&n.name),
        AnyNode::Mixin(n) => Some(&n.name),
        AnyNode::Singleton(n) => n.name.as_deref(),
        AnyNode::Program(n) => Some(&n.name),
        AnyNode::Test(n) => Some(&n.name),
        AnyNode::Describe(n) => Some(&n.name),
        _ => None,
    }
}

/// An immutable, fully-built AST together with the indices computed over it.
///
/// `Environment` is built once (by a parser, out of scope here) and never
/// mutated afterwards — there is no API to remove or replace a node, which
/// is what lets `reduce` and the indices assume the tree is stable for the
/// environment's whole lifetime.
#[derive(Debug, Clone)]
pub struct Environment {
    nodes: Vec<Node>,
    root: NodeId,
    parents: FxHashMap<NodeId, NodeId>,
    fqns: FxHashMap<String, NodeId>,
}

impl Environment {
    /// Builds an `Environment` from its dense node storage and root id,
    /// computing the parent and FQN indices in one traversal.
    #[must_use]
    pub fn build(nodes: Vec<Node>, root: NodeId) -> Self {
        let mut env = Self { nodes, root, parents: FxHashMap::default(), fqns: FxHashMap::default() };
        env.index(root, None, None);
        log::trace!("indexed {} node(s), {} fqn(s)", env.nodes.len(), env.fqns.len());
        env
    }

    fn index(&mut self, id: NodeId, parent: Option<NodeId>, prefix: Option<String>) {
        if let Some(parent) = parent {
            self.parents.insert(id, parent);
        }
        let Some(node) = self.nodes.get(id.index() as usize) else { return };
        let children = node.children();
        let own_name = fqn_segment(&node.data).map(str::to_owned);
        let fqn = match (&prefix, &own_name) {
            (Some(prefix), Some(name)) => Some(format!("{prefix}.{name}")),
            (None, Some(name)) => Some(name.clone()),
            _ => None,
        };
        if let Some(fqn) = &fqn {
            self.fqns.insert(fqn.clone(), id);
        }
        let next_prefix = fqn.or(prefix);
        for child in children {
            self.index(child, Some(id), next_prefix.clone());
        }
    }

    /// Returns the root node's id (always the tree's `Environment` node).
    #[must_use]
    pub const fn root(&self) -> NodeId { self.root }

    /// Looks up a node by id. Returns `None` only if `id` was never
    /// allocated in this environment.
    #[must_use]
    pub fn get_node(&self, id: NodeId) -> Option<&Node> { self.nodes.get(id.index() as usize) }

    /// Returns `id`'s parent, or `Ok(None)` for the root.
    ///
    /// # Errors
    /// Returns [`EnvironmentError::UnknownNode`] if `id` was never allocated
    /// in this environment.
    pub fn parent_of(&self, id: NodeId) -> Result<Option<NodeId>, EnvironmentError> {
        if self.get_node(id).is_none() {
            return Err(EnvironmentError::UnknownNode(id));
        }
        Ok(self.parents.get(&id).copied())
    }

    /// Looks up a node by its dot-joined fully-qualified name
    /// (e.g. `"aPackage.AClass"`).
    ///
    /// # Errors
    /// Returns [`EnvironmentError::UnknownFqn`] if no node in this
    /// environment carries that name.
    pub fn get_node_by_fqn(&self, fqn: &str) -> Result<NodeId, EnvironmentError> {
        self.fqns.get(fqn).copied().ok_or_else(|| {
            log::trace!("fqn lookup missed: {fqn}");
            EnvironmentError::UnknownFqn(fqn.to_owned())
        })
    }

    /// Depth-first pre-order fold over `root` and its descendants: `step`
    /// is applied to `root` first, then threaded through each child's
    /// subtree in source order. This is the only traversal primitive
    /// exposed by this crate — the validator's rule engine and any other
    /// consumer builds on top of it rather than walking nodes by hand.
    pub fn reduce<T>(&self, root: NodeId, seed: T, step: &mut impl FnMut(T, &Self, NodeId) -> T) -> T {
        let acc = step(seed, self, root);
        let Some(node) = self.get_node(root) else { return acc };
        node.children().into_iter().fold(acc, |acc, child| self.reduce(child, acc, step))
    }
}

#[cfg(test)]
mod tests {
    use wollok_source::Span;

    use super::*;
    use crate::nodes::{ClassNode, EnvironmentNode, FieldNode, PackageNode};

    fn leaf(data: AnyNode) -> Node { Node::new(data, Span::default()) }

    /// Builds `environment -> package "p" -> class "C" -> field "x"`.
    fn sample() -> Environment {
        let nodes = vec![
            leaf(AnyNode::Environment(EnvironmentNode { packages: vec![NodeId::new(1)] })),
            leaf(AnyNode::Package(PackageNode { name: "p".into(), members: vec![NodeId::new(2)] })),
            leaf(AnyNode::Class(ClassNode {
                name: "C".into(),
                superclass: None,
                mixins: vec![],
                members: vec![NodeId::new(3)],
            })),
            leaf(AnyNode::Field(FieldNode { name: "x".into(), initializer: None })),
        ];
        Environment::build(nodes, NodeId::new(0))
    }

    #[test]
    fn parent_of_root_is_none() {
        let env = sample();
        assert_eq!(env.parent_of(env.root()).unwrap(), None);
    }

    #[test]
    fn parent_of_child_points_back() {
        let env = sample();
        assert_eq!(env.parent_of(NodeId::new(2)).unwrap(), Some(NodeId::new(1)));
    }

    #[test]
    fn parent_of_unknown_node_errors() {
        let env = sample();
        assert_eq!(env.parent_of(NodeId::new(99)), Err(EnvironmentError::UnknownNode(NodeId::new(99))));
    }

    #[test]
    fn fqn_is_dot_joined_from_named_ancestors() {
        let env = sample();
        assert_eq!(env.get_node_by_fqn("p.C").unwrap(), NodeId::new(2));
    }

    #[test]
    fn field_does_not_contribute_its_own_fqn_entry_for_unnamed_ancestors() {
        let env = sample();
        assert!(env.get_node_by_fqn("p.C.x").is_err());
    }

    #[test]
    fn reduce_visits_every_node_exactly_once_in_pre_order() {
        let env = sample();
        let visited = env.reduce(env.root(), Vec::new(), &mut |mut acc, _env, id| {
            acc.push(id);
            acc
        });
        assert_eq!(visited, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn reduce_over_a_childless_node_visits_only_itself() {
        let nodes = vec![leaf(AnyNode::Field(FieldNode { name: "x".into(), initializer: None }))];
        let env = Environment::build(nodes, NodeId::new(0));
        let visited = env.reduce(env.root(), 0, &mut |acc, _env, _id| acc + 1);
        assert_eq!(visited, 1);
    }
}
