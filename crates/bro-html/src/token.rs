//! HTML token types.

use bro_common::Position;

/// The kind of an HTML token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `/`
    Slash,
    /// `!`
    Bang,
    /// `=`
    Eq,
    /// An identifier: starts with an ASCII letter, `_`, or `-`, continues
    /// with letter/digit/`_`/`-`.
    Ident(String),
    /// A quoted string, with the surrounding quotes stripped.
    String(String),
    /// A run of non-tag text, trimmed of leading/trailing whitespace.
    Text(String),
    /// End of input.
    Eof,
    /// An unrecognized byte.
    Error(char),
}

/// A single HTML token and the source position it started at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's kind and literal payload.
    pub kind: TokenKind,
    /// Byte/line/column the token started at.
    pub position: Position,
}

impl Token {
    /// Build a token at the given position.
    #[must_use]
    pub const fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }
}
