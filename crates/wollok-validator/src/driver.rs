//! The validator driver: the kind-keyed dispatch table and the
//! `validate`/`validate_with` entry points built on top of it.

use rustc_hash::FxHashSet;
use wollok_ast::{Environment, NodeKind};

use crate::rule::{Problem, Rule};
use crate::rules::{
    CONSTRUCTORS_HAVE_DISTINCT_ARITY,
    FIELD_NAME_DIFFERENT_FROM_THE_METHODS,
    HAS_CATCH_OR_ALWAYS,
    IMPORT_HAS_NOT_LOCAL_REFERENCE,
    METHODS_HAVE_DISTINCT_SIGNATURES,
    METHOD_NOT_ONLY_CALL_TO_SUPER,
    NAME_IS_CAMEL_CASE,
    NAME_IS_NOT_KEYWORD,
    NAME_IS_PASCAL_CASE,
    NON_ASIGNATION_OF_FULLY_QUALIFIED_REFERENCES,
    ONLY_LAST_PARAMETER_IS_VARARG,
    PROGRAM_IS_NOT_EMPTY,
    SINGLETON_IS_NOT_UNNAMED,
    TEST_IS_NOT_EMPTY,
};

/// Per-call configuration for [`validate_with`]. The zero-config
/// [`validate`] entry point is equivalent to `validate_with` with the
/// default (nothing disabled) configuration.
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// Rule codes to skip entirely, as if they were never in the catalogue.
    pub disabled_codes: FxHashSet<&'static str>,
}

/// Returns the rules applicable to `kind`, in declaration order.
///
/// This match is exhaustive over every `NodeKind` variant — the kind set
/// is closed, so adding a variant without extending this table is a
/// compile error, not a silently-skipped kind.
const fn rules_for(kind: NodeKind) -> &'static [Rule] {
    match kind {
        NodeKind::Class => &[NAME_IS_PASCAL_CASE, METHODS_HAVE_DISTINCT_SIGNATURES],
        NodeKind::Mixin => &[NAME_IS_PASCAL_CASE],
        NodeKind::Parameter => &[NAME_IS_CAMEL_CASE],
        NodeKind::Singleton => &[NAME_IS_CAMEL_CASE, SINGLETON_IS_NOT_UNNAMED],
        NodeKind::Variable => &[NAME_IS_CAMEL_CASE, NAME_IS_NOT_KEYWORD],
        NodeKind::Reference => &[NAME_IS_NOT_KEYWORD],
        NodeKind::Method => &[NAME_IS_NOT_KEYWORD, ONLY_LAST_PARAMETER_IS_VARARG, METHOD_NOT_ONLY_CALL_TO_SUPER],
        NodeKind::Try => &[HAS_CATCH_OR_ALWAYS],
        NodeKind::Import => &[IMPORT_HAS_NOT_LOCAL_REFERENCE],
        NodeKind::Assignment => &[NON_ASIGNATION_OF_FULLY_QUALIFIED_REFERENCES],
        NodeKind::Field => &[FIELD_NAME_DIFFERENT_FROM_THE_METHODS],
        NodeKind::Constructor => &[CONSTRUCTORS_HAVE_DISTINCT_ARITY],
        NodeKind::Test => &[TEST_IS_NOT_EMPTY],
        NodeKind::Program => &[PROGRAM_IS_NOT_EMPTY],
        NodeKind::Environment
        | NodeKind::Package
        | NodeKind::Body
        | NodeKind::Return
        | NodeKind::SelfExpr
        | NodeKind::SuperExpr
        | NodeKind::New
        | NodeKind::Literal
        | NodeKind::Send
        | NodeKind::If
        | NodeKind::Throw
        | NodeKind::Catch
        | NodeKind::Describe => &[],
    }
}

/// Validates `env` against the full rule catalogue, with nothing disabled.
#[must_use]
pub fn validate(env: &Environment) -> Vec<Problem> { validate_with(env, &ValidatorConfig::default()) }

/// Validates `env`, skipping any rule code in `config.disabled_codes`.
///
/// Traverses `env` with [`Environment::reduce`] in pre-order, and within
/// each node evaluates its kind's rules in declaration order — this order
/// is part of the contract consumers rely on, not an implementation detail.
#[must_use]
pub fn validate_with(env: &Environment, config: &ValidatorConfig) -> Vec<Problem> {
    let problems = env.reduce(env.root(), Vec::new(), &mut |mut problems, env, node| {
        let Some(kind) = env.get_node(node).map(wollok_ast::Node::kind) else { return problems };
        for rule in rules_for(kind) {
            if config.disabled_codes.contains(rule.code) {
                continue;
            }
            if !(rule.predicate)(env, node) {
                log::debug!("{} violated on {node}", rule.code);
                problems.push(Problem { code: rule.code, level: rule.level, node });
            }
        }
        problems
    });
    log::debug!("validation complete: {} problem(s)", problems.len());
    problems
}
