//! The `Rule`/`Level`/`Problem` vocabulary the rest of this crate is built on.

use serde::Serialize;
use wollok_ast::{Environment, NodeId};

/// The severity of a [`Problem`].
///
/// Ordered `Warning < Error` so callers can e.g. find the worst problem in
/// a list with `.max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Level {
    /// Worth flagging, doesn't block anything.
    Warning,
    /// A structural rule was violated.
    Error,
}

/// A single diagnostic: which rule fired, at what severity, on which node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// The stable rule identifier, e.g. `"nameIsPascalCase"`.
    pub code: &'static str,
    /// The problem's severity.
    pub level: Level,
    /// The node that failed the rule's predicate.
    pub node: NodeId,
}

impl Problem {
    /// Whether this problem is reported at [`Level::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool { matches!(self.level, Level::Error) }
}

/// A named predicate applicable to every node of one [`NodeKind`](wollok_ast::NodeKind).
///
/// Rules are pure: a predicate reads the `Environment` but never mutates
/// it, and is expected to return the same answer for the same node across
/// calls — the validator driver leans on this for `validate`'s determinism
/// guarantee.
#[derive(Clone, Copy)]
pub struct Rule {
    /// The stable rule identifier reported on a violating [`Problem`].
    pub code: &'static str,
    /// The severity a violation is reported at.
    pub level: Level,
    /// Returns `true` if `node` satisfies the rule, `false` if it violates it.
    pub predicate: fn(&Environment, NodeId) -> bool,
}
