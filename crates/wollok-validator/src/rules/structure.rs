//! Rules that reason about a node's place among its siblings: overload
//! clashes, shadowing, and scoping restrictions.

use wollok_ast::{AnyNode, Environment, MethodNode, NodeId};

use crate::rule::{Level, Rule};
use crate::rules::support::{compatible_arity, declared_name, parent};

fn only_last_parameter_is_vararg(env: &Environment, node: NodeId) -> bool {
    let Some(AnyNode::Method(method)) = env.get_node(node).map(|n| &n.data) else { return true };
    let is_vararg =
        |id: &NodeId| matches!(env.get_node(*id).map(|n| &n.data), Some(AnyNode::Parameter(p)) if p.is_vararg);
    let length = method.parameters.len() as isize;
    let index = method.parameters.iter().position(is_vararg).map_or(-1, |i| i as isize);
    index + 1 == length
}

pub(crate) const ONLY_LAST_PARAMETER_IS_VARARG: Rule =
    Rule { code: "onlyLastParameterIsVarArg", level: Level::Error, predicate: only_last_parameter_is_vararg };

fn singleton_is_not_unnamed(env: &Environment, node: NodeId) -> bool {
    let Some(AnyNode::Singleton(singleton)) = env.get_node(node).map(|n| &n.data) else { return true };
    if singleton.name.is_some() {
        return true;
    }
    match parent(env, node) {
        Some(p) => !matches!(env.get_node(p).map(|n| &n.data), Some(AnyNode::Package(_))),
        None => true,
    }
}

pub(crate) const SINGLETON_IS_NOT_UNNAMED: Rule =
    Rule { code: "singletonIsNotUnnamed", level: Level::Error, predicate: singleton_is_not_unnamed };

fn import_has_not_local_reference(env: &Environment, node: NodeId) -> bool {
    let Some(AnyNode::Import(import)) = env.get_node(node).map(|n| &n.data) else { return true };
    let Some(AnyNode::Reference(reference)) = env.get_node(import.reference).map(|n| &n.data) else { return true };
    let Some(package_id) = parent(env, node) else { return true };
    let Some(AnyNode::Package(package)) = env.get_node(package_id).map(|n| &n.data) else { return true };
    !package
        .members
        .iter()
        .any(|member| *member != node && declared_name(env, *member).as_deref() == Some(reference.name.as_str()))
}

pub(crate) const IMPORT_HAS_NOT_LOCAL_REFERENCE: Rule =
    Rule { code: "importHasNotLocalReference", level: Level::Error, predicate: import_has_not_local_reference };

fn non_asignation_of_fully_qualified_references(env: &Environment, node: NodeId) -> bool {
    let Some(AnyNode::Assignment(assignment)) = env.get_node(node).map(|n| &n.data) else { return true };
    match env.get_node(assignment.reference).map(|n| &n.data) {
        Some(AnyNode::Reference(reference)) => !reference.name.contains('.'),
        _ => true,
    }
}

pub(crate) const NON_ASIGNATION_OF_FULLY_QUALIFIED_REFERENCES: Rule = Rule {
    code: "nonAsignationOfFullyQualifiedReferences",
    level: Level::Error,
    predicate: non_asignation_of_fully_qualified_references,
};

fn field_name_different_from_the_methods(env: &Environment, node: NodeId) -> bool {
    let Some(AnyNode::Field(field)) = env.get_node(node).map(|n| &n.data) else { return true };
    let Some(class_id) = parent(env, node) else { return true };
    let Some(AnyNode::Class(class)) = env.get_node(class_id).map(|n| &n.data) else { return true };
    !class.members.iter().any(|member| {
        matches!(env.get_node(*member).map(|n| &n.data), Some(AnyNode::Method(method)) if method.name == field.name)
    })
}

pub(crate) const FIELD_NAME_DIFFERENT_FROM_THE_METHODS: Rule = Rule {
    code: "fieldNameDifferentFromTheMethods",
    level: Level::Error,
    predicate: field_name_different_from_the_methods,
};

fn methods_of(env: &Environment, members: &[NodeId]) -> Vec<&MethodNode> {
    members
        .iter()
        .filter_map(|member| match env.get_node(*member).map(|n| &n.data) {
            Some(AnyNode::Method(method)) => Some(method),
            _ => None,
        })
        .collect()
}

fn methods_have_distinct_signatures(env: &Environment, node: NodeId) -> bool {
    let Some(AnyNode::Class(class)) = env.get_node(node).map(|n| &n.data) else { return true };
    let methods = methods_of(env, &class.members);
    for (i, this) in methods.iter().enumerate() {
        for (j, other) in methods.iter().enumerate() {
            if i != j && this.name == other.name && compatible_arity(env, &this.parameters, &other.parameters) {
                return false;
            }
        }
    }
    true
}

pub(crate) const METHODS_HAVE_DISTINCT_SIGNATURES: Rule =
    Rule { code: "methodsHaveDistinctSignatures", level: Level::Error, predicate: methods_have_distinct_signatures };

fn constructors_have_distinct_arity(env: &Environment, node: NodeId) -> bool {
    let Some(AnyNode::Constructor(this)) = env.get_node(node).map(|n| &n.data) else { return true };
    let Some(class_id) = parent(env, node) else { return true };
    let Some(AnyNode::Class(class)) = env.get_node(class_id).map(|n| &n.data) else { return true };
    !class.members.iter().any(|member| {
        *member != node
            && matches!(env.get_node(*member).map(|n| &n.data), Some(AnyNode::Constructor(other))
                if compatible_arity(env, &this.parameters, &other.parameters))
    })
}

pub(crate) const CONSTRUCTORS_HAVE_DISTINCT_ARITY: Rule =
    Rule { code: "constructorsHaveDistinctArity", level: Level::Error, predicate: constructors_have_distinct_arity };
