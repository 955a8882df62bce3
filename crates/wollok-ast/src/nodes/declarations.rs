//! Declaration node types: `Class`, `Mixin`, `Field`, `Method`,
//! `Constructor`, `Parameter`.

use bitflags::bitflags;

use crate::id::NodeId;

bitflags! {
    /// Flags carried on a [`MethodNode`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MethodFlags: u8 {
        /// The method is declared `override`.
        const OVERRIDE = 0b0000_0001;
        /// The method is declared `native` (its body, if any, is ignored;
        /// the actual behavior is supplied by the native bridge).
        const NATIVE = 0b0000_0010;
    }
}

/// A class declaration, with an optional superclass and zero or more
/// mixed-in mixins.
#[derive(Debug, Clone)]
pub struct ClassNode {
    /// The class's name.
    pub name: String,
    /// The superclass reference, if any.
    pub superclass: Option<NodeId>,
    /// Mixed-in mixin references, in `mixed with` order.
    pub mixins: Vec<NodeId>,
    /// Members: `Field`, `Method`, or `Constructor` nodes, in source order.
    pub members: Vec<NodeId>,
}

/// A mixin declaration.
#[derive(Debug, Clone)]
pub struct MixinNode {
    /// The mixin's name.
    pub name: String,
    /// Members, in source order.
    pub members: Vec<NodeId>,
}

/// A field declaration within a class, mixin, or singleton.
#[derive(Debug, Clone)]
pub struct FieldNode {
    /// The field's name.
    pub name: String,
    /// The field's initializer expression, if any.
    pub initializer: Option<NodeId>,
}

/// A method declaration.
#[derive(Debug, Clone)]
pub struct MethodNode {
    /// The method's name.
    pub name: String,
    /// Parameters, in declared order.
    pub parameters: Vec<NodeId>,
    /// The method's body. `None` for abstract or native methods.
    pub body: Option<NodeId>,
    /// `override`/`native` flags.
    pub flags: MethodFlags,
}

impl MethodNode {
    /// Returns true if this method is declared `override`.
    #[must_use]
    pub const fn is_override(&self) -> bool { self.flags.contains(MethodFlags::OVERRIDE) }

    /// Returns true if this method is declared `native`.
    #[must_use]
    pub const fn is_native(&self) -> bool { self.flags.contains(MethodFlags::NATIVE) }
}

/// A constructor declaration, with an optional base-constructor call
/// (`self(...)` or `super(...)`).
#[derive(Debug, Clone)]
pub struct ConstructorNode {
    /// Parameters, in declared order.
    pub parameters: Vec<NodeId>,
    /// The constructor's body.
    pub body: NodeId,
    /// The base-constructor call expression, if the constructor chains to
    /// another one.
    pub base_call: Option<NodeId>,
}

/// A parameter in a method or constructor parameter list.
#[derive(Debug, Clone)]
pub struct ParameterNode {
    /// The parameter's name.
    pub name: String,
    /// Whether this parameter absorbs zero or more trailing arguments.
    /// Valid only as the last parameter in the list (enforced by the
    /// `onlyLastParameterIsVarArg` validator rule, not by this type).
    pub is_vararg: bool,
}
