//! Byte/line/column tracking shared by the HTML and CSS tokenizers.

/// A source position: byte offset from the start of input, plus 0-based
/// line and column for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// 0-based line number. Incremented *after* a newline byte is consumed.
    pub line: usize,
    /// 0-based column within the current line.
    pub column: usize,
}

impl Position {
    /// The position at the start of input.
    #[must_use]
    pub const fn start() -> Self {
        Self { offset: 0, line: 0, column: 0 }
    }

    /// Advance past `c`, updating offset/line/column.
    #[must_use]
    pub fn advance(self, c: char) -> Self {
        if c == '\n' {
            Self { offset: self.offset + c.len_utf8(), line: self.line + 1, column: 0 }
        } else {
            Self { offset: self.offset + c.len_utf8(), line: self.line, column: self.column + 1 }
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} (byte {})", self.line, self.column, self.offset)
    }
}
