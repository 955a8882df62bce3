//! Small helpers shared by several rule predicates.

use wollok_ast::{AnyNode, Environment, NodeId};

/// Returns `node`'s parent, or `None` for the root or a detached node.
///
/// Rule predicates are only ever invoked on nodes reached by `reduce` from
/// within the same `Environment`, so a lookup failure here can only mean
/// the root was passed — callers treat `None` as "not applicable".
pub(crate) fn parent(env: &Environment, node: NodeId) -> Option<NodeId> { env.parent_of(node).ok().flatten() }

/// Returns the user-declared name of any node kind that contributes one,
/// `None` otherwise (including anonymous singletons).
pub(crate) fn declared_name(env: &Environment, node: NodeId) -> Option<String> {
    let data = &env.get_node(node)?.data;
    match data {
        AnyNode::Package(n) => Some(n.name.clone()),
        AnyNode::Class(n) => Some(n.name.clone()),
        AnyNode::Mixin(n) => Some(n.name.clone()),
        AnyNode::Singleton(n) => n.name.clone(),
        AnyNode::Program(n) => Some(n.name.clone()),
        AnyNode::Test(n) => Some(n.name.clone()),
        AnyNode::Describe(n) => Some(n.name.clone()),
        _ => None,
    }
}

/// Returns `true` if `node` is a `Body` with no sentences. A node that
/// isn't a `Body` at all is never considered empty by this helper.
pub(crate) fn body_is_empty(env: &Environment, node: NodeId) -> bool {
    matches!(env.get_node(node).map(|n| &n.data), Some(AnyNode::Body(b)) if b.sentences.is_empty())
}

/// Returns whether `node`'s `Parameter` data has `is_vararg` set; `false`
/// for anything that isn't a `Parameter`.
fn is_vararg_parameter(env: &Environment, node: NodeId) -> bool {
    matches!(env.get_node(node).map(|n| &n.data), Some(AnyNode::Parameter(p)) if p.is_vararg)
}

/// The overload-clash "compatible arity" relation from the arity rules:
/// two fixed-arity signatures clash only on an exact parameter-count
/// match; a varArg last parameter lowers `other`'s minimum arity to
/// `other.len() - 1`, so anything at or above that minimum (including
/// another varArg signature) clashes with it. Called in both parameter
/// orders by its callers, so only `other`'s varArg-ness needs checking
/// here — the reverse case is covered by the reversed call.
pub(crate) fn compatible_arity(env: &Environment, these: &[NodeId], other: &[NodeId]) -> bool {
    if these.len() == other.len() {
        return true;
    }
    let other_last_is_vararg = other.last().is_some_and(|last| is_vararg_parameter(env, *last));
    other_last_is_vararg && these.len() >= other.len().saturating_sub(1)
}

/// Returns whether `node` is a bare `super` expression (as opposed to a
/// `Send` whose receiver happens to be `super`).
pub(crate) fn is_bare_super_call(env: &Environment, node: NodeId) -> bool {
    matches!(env.get_node(node).map(|n| &n.data), Some(AnyNode::SuperExpr(_)))
}
