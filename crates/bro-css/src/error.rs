//! Recoverable CSS parse errors.

use bro_common::Position;

/// A recoverable parse error: the parser records these and keeps going.
#[derive(Debug, Clone, PartialEq)]
pub struct CssParseError {
    /// Human-readable description.
    pub message: String,
    /// Where in the source the error was noticed.
    pub position: Position,
}

impl CssParseError {
    pub(crate) fn new(message: impl Into<String>, position: Position) -> Self {
        Self { message: message.into(), position }
    }
}

impl std::fmt::Display for CssParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.message, self.position)
    }
}

impl std::error::Error for CssParseError {}
