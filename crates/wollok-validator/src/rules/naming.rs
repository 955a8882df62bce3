//! Rules that constrain identifier spelling.

use wollok_ast::{AnyNode, Environment, NodeId};

use crate::keywords::is_keyword;
use crate::rule::{Level, Rule};

fn name_is_pascal_case(env: &Environment, node: NodeId) -> bool {
    let Some(data) = env.get_node(node).map(|n| &n.data) else { return true };
    let name = match data {
        AnyNode::Class(n) => n.name.as_str(),
        AnyNode::Mixin(n) => n.name.as_str(),
        _ => return true,
    };
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

pub(crate) const NAME_IS_PASCAL_CASE: Rule =
    Rule { code: "nameIsPascalCase", level: Level::Warning, predicate: name_is_pascal_case };

fn name_is_camel_case(env: &Environment, node: NodeId) -> bool {
    let Some(data) = env.get_node(node).map(|n| &n.data) else { return true };
    let name: Option<&str> = match data {
        AnyNode::Parameter(n) => Some(n.name.as_str()),
        AnyNode::Singleton(n) => n.name.as_deref(),
        AnyNode::Variable(n) => Some(n.name.as_str()),
        _ => return true,
    };
    // An unnamed (anonymous) singleton has nothing to check here —
    // `singletonIsNotUnnamed` is the rule that cares about that case.
    name.is_none_or(|name| name.chars().next().is_some_and(|c| c.is_ascii_lowercase()))
}

pub(crate) const NAME_IS_CAMEL_CASE: Rule =
    Rule { code: "nameIsCamelCase", level: Level::Warning, predicate: name_is_camel_case };

fn name_is_not_keyword(env: &Environment, node: NodeId) -> bool {
    let Some(data) = env.get_node(node).map(|n| &n.data) else { return true };
    let name = match data {
        AnyNode::Reference(n) => n.name.as_str(),
        AnyNode::Method(n) => n.name.as_str(),
        AnyNode::Variable(n) => n.name.as_str(),
        _ => return true,
    };
    !is_keyword(name)
}

pub(crate) const NAME_IS_NOT_KEYWORD: Rule =
    Rule { code: "nameIsNotKeyword", level: Level::Error, predicate: name_is_not_keyword };
