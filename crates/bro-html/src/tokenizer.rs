//! The HTML tokenizer.
//!
//! A single-pass, single-character-lookahead scanner with two modes: node
//! mode (inside `<…>` and between tags while the last token was not a
//! `>`) and text mode (entered right after a `>` is emitted).

use bro_common::{warn_once, Position};
use strum_macros::Display;

use crate::token::{Token, TokenKind};

/// Which half of a tag boundary the tokenizer is currently scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum Mode {
    /// Inside `<…>` or between tags before any `<` has been seen.
    Node,
    /// Scanning a run of text between `>` and the next `<`.
    Text,
}

/// Scans an HTML source string into a flat [`Token`] stream.
pub struct Tokenizer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    position: Position,
    mode: Mode,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

impl<'a> Tokenizer<'a> {
    /// Build a tokenizer over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            position: Position::start(),
            mode: Mode::Node,
        }
    }

    /// Scan the entire input into a token stream, ending with a single
    /// `Eof` token.
    pub fn run(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        self.position = self.position.advance(c);
        Some(c)
    }

    fn next_token(&mut self) -> Token {
        match self.mode {
            Mode::Node => self.next_node_token(),
            Mode::Text => self.next_text_token(),
        }
    }

    fn next_node_token(&mut self) -> Token {
        while matches!(self.peek_char(), Some(c) if c.is_whitespace()) {
            let _ = self.bump();
        }

        let start = self.position;
        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, start);
        };

        match c {
            '<' => {
                let _ = self.bump();
                Token::new(TokenKind::Lt, start)
            }
            '>' => {
                let _ = self.bump();
                self.mode = Mode::Text;
                Token::new(TokenKind::Gt, start)
            }
            '/' => {
                let _ = self.bump();
                Token::new(TokenKind::Slash, start)
            }
            '!' => {
                let _ = self.bump();
                Token::new(TokenKind::Bang, start)
            }
            '=' => {
                let _ = self.bump();
                Token::new(TokenKind::Eq, start)
            }
            '\'' | '"' => Token::new(TokenKind::String(self.scan_string(c)), start),
            c if is_ident_start(c) => Token::new(TokenKind::Ident(self.scan_ident()), start),
            other => {
                let _ = self.bump();
                warn_once("html-tokenizer", &format!("illegal byte {other:?} at {start}"));
                Token::new(TokenKind::Error(other), start)
            }
        }
    }

    fn next_text_token(&mut self) -> Token {
        let start = self.position;
        let mut raw = String::new();
        while let Some(c) = self.peek_char() {
            if c == '<' {
                break;
            }
            raw.push(c);
            let _ = self.bump();
        }

        self.mode = Mode::Node;

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return self.next_node_token();
        }
        Token::new(TokenKind::Text(trimmed.to_string()), start)
    }

    fn scan_ident(&mut self) -> String {
        let mut ident = String::new();
        while matches!(self.peek_char(), Some(c) if is_ident_continue(c)) {
            ident.push(self.bump().expect("peeked"));
        }
        ident
    }

    /// Consume the opening quote `quote`, then everything up to the
    /// matching quote (consumed) or EOF (accepted without complaint).
    fn scan_string(&mut self, quote: char) -> String {
        let _ = self.bump();
        let mut content = String::new();
        loop {
            match self.peek_char() {
                None => break,
                Some(c) if c == quote => {
                    let _ = self.bump();
                    break;
                }
                Some(c) => {
                    content.push(c);
                    let _ = self.bump();
                }
            }
        }
        content
    }
}
