//! Errors raised by [`Environment`](crate::environment::Environment) accessors.

use thiserror::Error;

use crate::id::NodeId;

/// An error raised when an [`Environment`](crate::environment::Environment)
/// is asked about a node or fully-qualified name it doesn't recognize.
///
/// These are programmer errors, not validation findings — a [`Problem`]
/// describes something wrong with user code; an `EnvironmentError`
/// describes a caller passing a `NodeId` or FQN the environment never
/// produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// The given `NodeId` was not allocated by this environment.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    /// No node with the given fully-qualified name exists in this environment.
    #[error("unknown fully-qualified name {0:?}")]
    UnknownFqn(String),
}
