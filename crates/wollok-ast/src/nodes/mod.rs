//! The closed set of AST node variants.
//!
//! `NodeKind` and `AnyNode` are the single source of truth for "what a node
//! can be" — every match against one is exhaustively checked by the
//! compiler, which is what lets the validator driver claim that its
//! per-kind dispatch table covers every kind: adding a variant
//! here and forgetting to handle it anywhere that matches on `NodeKind` is
//! a compile error, not a silent gap.

mod declarations;
mod expressions;
mod modules;
mod statements;

pub use declarations::{ClassNode, ConstructorNode, FieldNode, MethodFlags, MethodNode, MixinNode, ParameterNode};
pub use expressions::{
    CatchNode,
    IfNode,
    LiteralNode,
    LiteralValue,
    NewNode,
    ReferenceNode,
    SelfExprNode,
    SendNode,
    SuperExprNode,
    ThrowNode,
    TryNode,
};
pub use modules::{DescribeNode, EnvironmentNode, ImportNode, PackageNode, ProgramNode, SingletonNode, TestNode};
pub use statements::{AssignmentNode, BodyNode, ReturnNode, VariableNode};

use crate::id::NodeId;

/// The discriminant of an AST node. One variant per concrete node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// See [`EnvironmentNode`].
    Environment,
    /// See [`PackageNode`].
    Package,
    /// See [`ImportNode`].
    Import,
    /// See [`ClassNode`].
    Class,
    /// See [`SingletonNode`].
    Singleton,
    /// See [`MixinNode`].
    Mixin,
    /// See [`FieldNode`].
    Field,
    /// See [`MethodNode`].
    Method,
    /// See [`ConstructorNode`].
    Constructor,
    /// See [`ParameterNode`].
    Parameter,
    /// See [`BodyNode`].
    Body,
    /// See [`VariableNode`].
    Variable,
    /// See [`ReturnNode`].
    Return,
    /// See [`AssignmentNode`].
    Assignment,
    /// See [`ReferenceNode`].
    Reference,
    /// See [`SelfExprNode`].
    SelfExpr,
    /// See [`SuperExprNode`].
    SuperExpr,
    /// See [`NewNode`].
    New,
    /// See [`LiteralNode`].
    Literal,
    /// See [`SendNode`].
    Send,
    /// See [`IfNode`].
    If,
    /// See [`ThrowNode`].
    Throw,
    /// See [`TryNode`].
    Try,
    /// See [`CatchNode`].
    Catch,
    /// See [`ProgramNode`].
    Program,
    /// See [`TestNode`].
    Test,
    /// See [`DescribeNode`].
    Describe,
}

/// All 27 `NodeKind` variants, for code that wants to iterate the whole
/// closed set (e.g. to assert a dispatch table covers it).
pub const ALL_NODE_KINDS: &[NodeKind] = &[
    NodeKind::Environment,
    NodeKind::Package,
    NodeKind::Import,
    NodeKind::Class,
    NodeKind::Singleton,
    NodeKind::Mixin,
    NodeKind::Field,
    NodeKind::Method,
    NodeKind::Constructor,
    NodeKind::Parameter,
    NodeKind::Body,
    NodeKind::Variable,
    NodeKind::Return,
    NodeKind::Assignment,
    NodeKind::Reference,
    NodeKind::SelfExpr,
    NodeKind::SuperExpr,
    NodeKind::New,
    NodeKind::Literal,
    NodeKind::Send,
    NodeKind::If,
    NodeKind::Throw,
    NodeKind::Try,
    NodeKind::Catch,
    NodeKind::Program,
    NodeKind::Test,
    NodeKind::Describe,
];

/// The node-specific data for any AST node.
#[derive(Debug, Clone)]
pub enum AnyNode {
    /// See [`EnvironmentNode`].
    Environment(EnvironmentNode),
    /// See [`PackageNode`].
    Package(PackageNode),
    /// See [`ImportNode`].
    Import(ImportNode),
    /// See [`ClassNode`].
    Class(ClassNode),
    /// See [`SingletonNode`].
    Singleton(SingletonNode),
    /// See [`MixinNode`].
    Mixin(MixinNode),
    /// See [`FieldNode`].
    Field(FieldNode),
    /// See [`MethodNode`].
    Method(MethodNode),
    /// See [`ConstructorNode`].
    Constructor(ConstructorNode),
    /// See [`ParameterNode`].
    Parameter(ParameterNode),
    /// See [`BodyNode`].
    Body(BodyNode),
    /// See [`VariableNode`].
    Variable(VariableNode),
    /// See [`ReturnNode`].
    Return(ReturnNode),
    /// See [`AssignmentNode`].
    Assignment(AssignmentNode),
    /// See [`ReferenceNode`].
    Reference(ReferenceNode),
    /// See [`SelfExprNode`].
    SelfExpr(SelfExprNode),
    /// See [`SuperExprNode`].
    SuperExpr(SuperExprNode),
    /// See [`NewNode`].
    New(NewNode),
    /// See [`LiteralNode`].
    Literal(LiteralNode),
    /// See [`SendNode`].
    Send(SendNode),
    /// See [`IfNode`].
    If(IfNode),
    /// See [`ThrowNode`].
    Throw(ThrowNode),
    /// See [`TryNode`].
    Try(TryNode),
    /// See [`CatchNode`].
    Catch(CatchNode),
    /// See [`ProgramNode`].
    Program(ProgramNode),
    /// See [`TestNode`].
    Test(TestNode),
    /// See [`DescribeNode`].
    Describe(DescribeNode),
}

impl AnyNode {
    /// Returns this node's kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Environment(_) => NodeKind::Environment,
            Self::Package(_) => NodeKind::Package,
            Self::Import(_) => NodeKind::Import,
            Self::Class(_) => NodeKind::Class,
            Self::Singleton(_) => NodeKind::Singleton,
            Self::Mixin(_) => NodeKind::Mixin,
            Self::Field(_) => NodeKind::Field,
            Self::Method(_) => NodeKind::Method,
            Self::Constructor(_) => NodeKind::Constructor,
            Self::Parameter(_) => NodeKind::Parameter,
            Self::Body(_) => NodeKind::Body,
            Self::Variable(_) => NodeKind::Variable,
            Self::Return(_) => NodeKind::Return,
            Self::Assignment(_) => NodeKind::Assignment,
            Self::Reference(_) => NodeKind::Reference,
            Self::SelfExpr(_) => NodeKind::SelfExpr,
            Self::SuperExpr(_) => NodeKind::SuperExpr,
            Self::New(_) => NodeKind::New,
            Self::Literal(_) => NodeKind::Literal,
            Self::Send(_) => NodeKind::Send,
            Self::If(_) => NodeKind::If,
            Self::Throw(_) => NodeKind::Throw,
            Self::Try(_) => NodeKind::Try,
            Self::Catch(_) => NodeKind::Catch,
            Self::Program(_) => NodeKind::Program,
            Self::Test(_) => NodeKind::Test,
            Self::Describe(_) => NodeKind::Describe,
        }
    }

    /// Returns this node's direct children, in source order. `reduce`
    /// is defined entirely in terms of this method.
    #[must_use]
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Self::Environment(n) => n.packages.clone(),
            Self::Package(n) => n.members.clone(),
            Self::Import(n) => vec![n.reference],
            Self::Class(n) => {
                let mut children = Vec::with_capacity(n.mixins.len() + n.members.len() + 1);
                children.extend(n.superclass);
                children.extend(n.mixins.iter().copied());
                children.extend(n.members.iter().copied());
                children
            }
            Self::Singleton(n) => n.members.clone(),
            Self::Mixin(n) => n.members.clone(),
            Self::Field(n) => n.initializer.into_iter().collect(),
            Self::Method(n) => {
                let mut children = n.parameters.clone();
                children.extend(n.body);
                children
            }
            Self::Constructor(n) => {
                let mut children = n.parameters.clone();
                children.extend(n.base_call);
                children.push(n.body);
                children
            }
            Self::Parameter(_) => vec![],
            Self::Body(n) => n.sentences.clone(),
            Self::Variable(n) => n.initializer.into_iter().collect(),
            Self::Return(n) => n.value.into_iter().collect(),
            Self::Assignment(n) => vec![n.reference, n.value],
            Self::Reference(_) | Self::SelfExpr(_) | Self::SuperExpr(_) | Self::Literal(_) => vec![],
            Self::New(n) => {
                let mut children = vec![n.class_reference];
                children.extend(n.args.iter().copied());
                children
            }
            Self::Send(n) => {
                let mut children = vec![n.receiver];
                children.extend(n.args.iter().copied());
                children
            }
            Self::If(n) => {
                let mut children = vec![n.condition, n.then_body];
                children.extend(n.else_body);
                children
            }
            Self::Throw(n) => vec![n.exception],
            Self::Try(n) => {
                let mut children = vec![n.body];
                children.extend(n.catches.iter().copied());
                children.extend(n.always);
                children
            }
            Self::Catch(n) => {
                let mut children = vec![n.parameter];
                children.extend(n.exception_type);
                children.push(n.body);
                children
            }
            Self::Program(n) => vec![n.body],
            Self::Test(n) => vec![n.body],
            Self::Describe(n) => n.members.clone(),
        }
    }
}

use wollok_source::Span;

/// A stored node: its data plus the source span it came from.
///
/// Identity (`NodeId`) and ancestry (`parentId`) are deliberately not
/// fields here — both are properties of a node's place in an
/// [`Environment`](crate::environment::Environment), not of the node
/// itself, so they live in the environment's indices instead of being
/// duplicated on every node.
#[derive(Debug, Clone)]
pub struct Node {
    /// The node's data.
    pub data: AnyNode,
    /// The span of source text this node was built from.
    pub span: Span,
}

impl Node {
    /// Creates a new node from its data and span.
    #[must_use]
    pub const fn new(data: AnyNode, span: Span) -> Self { Self { data, span } }

    /// Returns this node's kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind { self.data.kind() }

    /// Returns this node's direct children, in source order.
    #[must_use]
    pub fn children(&self) -> Vec<NodeId> { self.data.children() }
}
