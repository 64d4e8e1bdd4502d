//! The CSS tokenizer: a single-character-lookahead scanner, no modes.

mod token;

pub use token::{Token, TokenKind};

use bro_common::{warn_once, Position};

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Scans a CSS source string into a flat [`Token`] stream.
pub struct Tokenizer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: Position,
}

impl<'a> Tokenizer<'a> {
    /// Build a tokenizer over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { chars: input.chars().peekable(), position: Position::start() }
    }

    /// Scan the entire input into a token stream, ending with a single
    /// `Eof` token.
    pub fn run(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn peek_second(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        let _ = iter.next();
        iter.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position = self.position.advance(c);
        Some(c)
    }

    fn next_token(&mut self) -> Token {
        while matches!(self.peek_char(), Some(c) if c.is_whitespace()) {
            let _ = self.bump();
        }

        let start = self.position;
        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, start);
        };

        if c == '/' && self.peek_second() == Some('*') {
            return Token::new(TokenKind::Comment(self.scan_comment()), start);
        }

        match c {
            '.' => self.single(TokenKind::Dot, start),
            ',' => self.single(TokenKind::Comma, start),
            ':' => self.single(TokenKind::Colon, start),
            ';' => self.single(TokenKind::Semicolon, start),
            '#' => self.single(TokenKind::Hash, start),
            '{' => self.single(TokenKind::LBrace, start),
            '}' => self.single(TokenKind::RBrace, start),
            '(' => self.single(TokenKind::LParen, start),
            ')' => self.single(TokenKind::RParen, start),
            '*' => self.single(TokenKind::Star, start),
            '/' => self.single(TokenKind::Slash, start),
            c if c.is_ascii_digit() => Token::new(self.scan_number(), start),
            c if is_ident_start(c) => Token::new(TokenKind::Ident(self.scan_ident()), start),
            other => {
                let _ = self.bump();
                warn_once("css-tokenizer", &format!("illegal byte {other:?} at {start}"));
                Token::new(TokenKind::Illegal(other), start)
            }
        }
    }

    fn single(&mut self, kind: TokenKind, start: Position) -> Token {
        let _ = self.bump();
        Token::new(kind, start)
    }

    fn scan_ident(&mut self) -> String {
        let mut ident = String::new();
        while matches!(self.peek_char(), Some(c) if is_ident_continue(c)) {
            ident.push(self.bump().expect("peeked"));
        }
        ident
    }

    fn scan_number(&mut self) -> TokenKind {
        let mut literal = String::new();
        literal.push(self.bump().expect("peeked digit"));
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit() || c == '.') {
            literal.push(self.bump().expect("peeked"));
        }
        let value = literal.parse().unwrap_or(0.0);
        TokenKind::Number { literal, value }
    }

    fn scan_comment(&mut self) -> String {
        let _ = self.bump(); // '/'
        let _ = self.bump(); // '*'
        let mut content = String::new();
        loop {
            match self.peek_char() {
                None => break,
                Some('*') if self.peek_second() == Some('/') => {
                    let _ = self.bump();
                    let _ = self.bump();
                    break;
                }
                Some(c) => {
                    content.push(c);
                    let _ = self.bump();
                }
            }
        }
        content.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Tokenizer::new(input).run().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn tokenizes_a_simple_rule() {
        let got = kinds("p { color: red; }");
        assert_eq!(
            got,
            vec![
                TokenKind::Ident("p".to_string()),
                TokenKind::LBrace,
                TokenKind::Ident("color".to_string()),
                TokenKind::Colon,
                TokenKind::Ident("red".to_string()),
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn hash_is_its_own_token_before_ident() {
        let got = kinds("#fff");
        assert_eq!(got, vec![TokenKind::Hash, TokenKind::Ident("fff".to_string()), TokenKind::Eof]);
    }

    #[test]
    fn comments_are_trimmed_and_ignored_by_position_but_kept_as_tokens() {
        let got = kinds("/* hi */ p {}");
        assert_eq!(
            got,
            vec![
                TokenKind::Comment("hi".to_string()),
                TokenKind::Ident("p".to_string()),
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn number_with_unit_is_two_tokens() {
        let got = kinds("10px");
        assert_eq!(
            got,
            vec![
                TokenKind::Number { literal: "10".to_string(), value: 10.0 },
                TokenKind::Ident("px".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn positions_are_monotone() {
        let tokens = Tokenizer::new("a.b#c { width: 12.5px; }").run();
        for pair in tokens.windows(2) {
            assert!(pair[1].position.offset >= pair[0].position.offset);
        }
    }

    #[test]
    fn illegal_byte_is_recorded() {
        let got = kinds("p { color: red ^ }");
        assert!(got.iter().any(|k| matches!(k, TokenKind::Illegal('^'))));
    }
}
