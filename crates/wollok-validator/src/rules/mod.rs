//! The rule catalogue, organized by what a rule reasons about rather than
//! by the `NodeKind` it applies to — the kind-keyed dispatch table lives
//! in [`crate::driver`], built from the constants this module exposes.

mod bodies;
mod naming;
mod structure;
mod support;

pub(crate) use bodies::{HAS_CATCH_OR_ALWAYS, METHOD_NOT_ONLY_CALL_TO_SUPER, PROGRAM_IS_NOT_EMPTY, TEST_IS_NOT_EMPTY};
pub(crate) use naming::{NAME_IS_CAMEL_CASE, NAME_IS_NOT_KEYWORD, NAME_IS_PASCAL_CASE};
pub(crate) use structure::{
    CONSTRUCTORS_HAVE_DISTINCT_ARITY,
    FIELD_NAME_DIFFERENT_FROM_THE_METHODS,
    IMPORT_HAS_NOT_LOCAL_REFERENCE,
    METHODS_HAVE_DISTINCT_SIGNATURES,
    NON_ASIGNATION_OF_FULLY_QUALIFIED_REFERENCES,
    ONLY_LAST_PARAMETER_IS_VARARG,
    SINGLETON_IS_NOT_UNNAMED,
};
