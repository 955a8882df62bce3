//! Rules that look at a node's body: emptiness and the `super`-delegation
//! shortcut.

use wollok_ast::{AnyNode, Environment, NodeId};

use crate::rule::{Level, Rule};
use crate::rules::support::{body_is_empty, is_bare_super_call};

fn has_catch_or_always(env: &Environment, node: NodeId) -> bool {
    let Some(AnyNode::Try(try_node)) = env.get_node(node).map(|n| &n.data) else { return true };
    if !try_node.catches.is_empty() {
        return true;
    }
    let always_nonempty = try_node.always.is_some_and(|always| !body_is_empty(env, always));
    let body_nonempty = !body_is_empty(env, try_node.body);
    always_nonempty && body_nonempty
}

pub(crate) const HAS_CATCH_OR_ALWAYS: Rule =
    Rule { code: "hasCatchOrAlways", level: Level::Error, predicate: has_catch_or_always };

fn method_not_only_call_to_super(env: &Environment, node: NodeId) -> bool {
    let Some(AnyNode::Method(method)) = env.get_node(node).map(|n| &n.data) else { return true };
    let Some(body_id) = method.body else { return true };
    let Some(AnyNode::Body(body)) = env.get_node(body_id).map(|n| &n.data) else { return true };
    if body.sentences.len() != 1 {
        return true;
    }
    !is_bare_super_call(env, body.sentences[0])
}

pub(crate) const METHOD_NOT_ONLY_CALL_TO_SUPER: Rule =
    Rule { code: "methodNotOnlyCallToSuper", level: Level::Warning, predicate: method_not_only_call_to_super };

fn test_is_not_empty(env: &Environment, node: NodeId) -> bool {
    let Some(AnyNode::Test(test)) = env.get_node(node).map(|n| &n.data) else { return true };
    !body_is_empty(env, test.body)
}

pub(crate) const TEST_IS_NOT_EMPTY: Rule =
    Rule { code: "testIsNotEmpty", level: Level::Warning, predicate: test_is_not_empty };

fn program_is_not_empty(env: &Environment, node: NodeId) -> bool {
    let Some(AnyNode::Program(program)) = env.get_node(node).map(|n| &n.data) else { return true };
    !body_is_empty(env, program.body)
}

pub(crate) const PROGRAM_IS_NOT_EMPTY: Rule =
    Rule { code: "programIsNotEmpty", level: Level::Warning, predicate: program_is_not_empty };
