//! Source span types shared by the AST, validator, and runtime crates.

mod span;

pub use span::Span;
