//! Top-level container node types: `Environment`, `Package`, `Import`,
//! `Program`, `Test`, `Describe`, `Singleton`.

use crate::id::NodeId;

/// The root of a tree. Owns nothing directly — storage lives in
/// [`Environment`](crate::environment::Environment) — but is itself a node
/// so that `reduce` can visit it like any other.
#[derive(Debug, Clone)]
pub struct EnvironmentNode {
    /// Top-level packages, in source order.
    pub packages: Vec<NodeId>,
}

/// A named container of packages, classes, singletons, mixins, programs,
/// tests, describes, and imports, in source order.
#[derive(Debug, Clone)]
pub struct PackageNode {
    /// The package's simple (non-dotted) name.
    pub name: String,
    /// Member nodes, preserving source order.
    pub members: Vec<NodeId>,
}

/// An import of a [`Reference`](super::ReferenceNode), optionally bound to a
/// local alias.
#[derive(Debug, Clone)]
pub struct ImportNode {
    /// The imported reference.
    pub reference: NodeId,
    /// A local alias, if the import renames the binding (`import foo.Bar as Baz`).
    pub local_alias: Option<String>,
}

/// A top-level runnable program: `program name { ... }`.
#[derive(Debug, Clone)]
pub struct ProgramNode {
    /// The program's name.
    pub name: String,
    /// The program's body.
    pub body: NodeId,
}

/// A single test case: `test "name" { ... }`.
#[derive(Debug, Clone)]
pub struct TestNode {
    /// The test's (string) name.
    pub name: String,
    /// The test's body.
    pub body: NodeId,
}

/// A grouping of tests and fixtures: `describe "name" { ... }`.
#[derive(Debug, Clone)]
pub struct DescribeNode {
    /// The describe block's (string) name.
    pub name: String,
    /// Member nodes (tests and variable fixtures), in source order.
    pub members: Vec<NodeId>,
}

/// A named or anonymous object literal.
///
/// A named singleton's parent is a [`Package`](super::PackageNode); an
/// anonymous singleton's parent is the expression that introduced it
/// (e.g. an argument to `new`-like usage).
#[derive(Debug, Clone)]
pub struct SingletonNode {
    /// The singleton's name, if it has one.
    pub name: Option<String>,
    /// Member nodes, in source order.
    pub members: Vec<NodeId>,
}
