//! CSS token types.

use bro_common::Position;

/// The kind of a CSS token. There is no `String` variant: CSS string
/// literals are out of scope for this engine (see the design ledger).
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// An identifier: letter/`_`/`-` then letter/digit/`_`/`-`.
    Ident(String),
    /// A numeric literal: digit then digit/`.`.
    Number {
        /// The raw digits as they appeared in source.
        literal: String,
        /// The parsed value, or `0.0` if the literal failed to parse.
        value: f64,
    },
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `#`
    Hash,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `*`
    Star,
    /// `/` (only reachable outside a `/* … */` comment)
    Slash,
    /// A `/* … */` comment, trimmed.
    Comment(String),
    /// End of input.
    Eof,
    /// An unrecognized byte.
    Illegal(char),
}

/// A single CSS token and the source position it started at.
#[derive(Debug, Clone, PartialEq)]
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
