//! The reserved-word set consulted by the `nameIsNotKeyword` rule.

/// Exact reserved-word set, as listed in the external interface contract.
/// Includes punctuation tokens alongside keywords because the contract
/// draws no distinction between them — a `Reference`, `Method`, or
/// `Variable` name can never legitimately collide with either.
const RESERVED_WORDS: &[&str] = &[
    ".", ",", "(", ")", ";", "_", "{", "}", ":", "+", "=", "=>",
    "import", "package", "program", "test", "mixed with",
    "class", "inherits", "object", "mixin",
    "var", "const", "override", "method", "native", "constructor",
    "self", "super", "new", "if", "else", "return", "throw", "try", "then always", "catch",
    "null", "false", "true",
];

/// Returns whether `name` collides with a reserved word.
#[must_use]
pub fn is_keyword(name: &str) -> bool { RESERVED_WORDS.contains(&name) }
