//! The static validator: a fixed catalogue of structural rules run over
//! an [`Environment`](wollok_ast::Environment) by a kind-keyed dispatch
//! table, producing a deterministic, ordered list of [`Problem`]s.
//!
//! Validation never mutates the tree and never aborts early — every
//! violating node yields a `Problem`; there is no exception path here
//! (see `wollok-runtime` for the native bridge's error domains).

mod driver;
mod keywords;
mod rule;
mod rules;

pub use driver::{validate, validate_with, ValidatorConfig};
pub use rule::{Level, Problem, Rule};
