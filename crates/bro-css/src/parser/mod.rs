//! Two-token-lookahead recursive-descent CSS parser.

use crate::error::CssParseError;
use crate::selector::Selector;
use crate::stylesheet::{Declaration, Rule, Stylesheet};
use crate::tokenizer::{Token, TokenKind, Tokenizer};
use crate::value::{Color, Unit, Value};

/// The result of parsing: the stylesheet and any recoverable errors.
pub struct StylesheetParseOutput {
    /// Rules successfully parsed, in source order.
    pub stylesheet: Stylesheet,
    /// Recoverable parse errors, in the order they were encountered.
    pub errors: Vec<CssParseError>,
}

/// Parse `input` as a CSS stylesheet. Comments are skipped transparently.
#[must_use]
pub fn parse_stylesheet(input: &str) -> StylesheetParseOutput {
    let tokens: Vec<Token> =
        Tokenizer::new(input).run().into_iter().filter(|t| !matches!(t.kind, TokenKind::Comment(_))).collect();
    Parser::new(tokens).parse()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<CssParseError>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0, errors: Vec::new() }
    }

    fn cur(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek(&self) -> &Token {
        let next = self.pos + 1;
        &self.tokens[next.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(CssParseError::new(message, self.cur().position));
    }

    fn parse(mut self) -> StylesheetParseOutput {
        let mut rules = Vec::new();
        while !matches!(self.cur().kind, TokenKind::Eof) {
            let rule = self.parse_rule();
            if !rule.selectors.is_empty() && !rule.declarations.is_empty() {
                rules.push(rule);
            }
        }
        StylesheetParseOutput { stylesheet: Stylesheet { rules }, errors: self.errors }
    }

    fn parse_rule(&mut self) -> Rule {
        let selectors = self.parse_selectors();

        if matches!(self.cur().kind, TokenKind::LBrace) {
            self.advance();
        } else {
            self.error("expected '{' after selector list");
            // Recover by skipping to the next brace or EOF.
            while !matches!(self.cur().kind, TokenKind::LBrace | TokenKind::Eof) {
                self.advance();
            }
            if matches!(self.cur().kind, TokenKind::LBrace) {
                self.advance();
            }
        }

        let mut declarations = Vec::new();
        while !matches!(self.cur().kind, TokenKind::RBrace | TokenKind::Eof) {
            if let Some(decl) = self.parse_declaration() {
                declarations.push(decl);
            }
        }

        if matches!(self.cur().kind, TokenKind::RBrace) {
            self.advance();
        } else {
            self.error("expected '}' to close rule");
        }

        Rule { selectors, declarations }
    }

    fn parse_selectors(&mut self) -> Vec<Selector> {
        let mut selectors = Vec::new();
        loop {
            selectors.push(self.parse_selector());
            if matches!(self.cur().kind, TokenKind::Comma) {
                self.advance();
                continue;
            }
            break;
        }
        selectors
    }

    fn parse_selector(&mut self) -> Selector {
        let mut selector = Selector::default();
        loop {
            match self.cur().kind.clone() {
                TokenKind::Ident(name) => {
                    selector.tag_name = Some(name);
                    self.advance();
                }
                TokenKind::Star => {
                    selector.tag_name = Some("*".to_string());
                    self.advance();
                }
                TokenKind::Hash => {
                    self.advance();
                    match self.cur().kind.clone() {
                        TokenKind::Ident(name) => {
                            selector.id = Some(name);
                            self.advance();
                        }
                        TokenKind::Number { literal, .. } => {
                            selector.id = Some(literal);
                            self.advance();
                        }
                        _ => self.error("expected identifier after '#' in selector"),
                    }
                }
                TokenKind::Dot => {
                    self.advance();
                    match self.cur().kind.clone() {
                        TokenKind::Ident(name) => {
                            selector.classes.push(name);
                            self.advance();
                        }
                        TokenKind::Number { literal, .. } => {
                            selector.classes.push(literal);
                            self.advance();
                        }
                        _ => self.error("expected identifier after '.' in selector"),
                    }
                }
                TokenKind::Comma | TokenKind::LBrace | TokenKind::Eof => break,
                other => {
                    self.error(format!("unexpected token in selector: {other:?}"));
                    self.advance();
                }
            }
        }
        selector
    }

    fn parse_declaration(&mut self) -> Option<Declaration> {
        let name = match self.cur().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                name
            }
            _ => {
                self.error("expected property name");
                self.advance();
                return None;
            }
        };

        if matches!(self.cur().kind, TokenKind::Colon) {
            self.advance();
        } else {
            self.error("expected ':' after property name");
        }

        let value = self.parse_value();

        if matches!(self.cur().kind, TokenKind::Semicolon) {
            self.advance();
        } else {
            self.error("expected ';' after declaration value");
        }

        if name.is_empty() {
            None
        } else {
            Some(Declaration { name, value })
        }
    }

    fn parse_value(&mut self) -> Value {
        match self.cur().kind.clone() {
            TokenKind::Hash => self.parse_color(),
            TokenKind::Number { .. } => self.parse_length(),
            TokenKind::Ident(name) => {
                if matches!(self.peek().kind, TokenKind::LParen) {
                    self.parse_function()
                } else {
                    self.advance();
                    Color::named(&name).map_or(Value::Keyword(name), Value::Color)
                }
            }
            other => {
                self.error(format!("expected a value, found {other:?}"));
                self.advance();
                Value::Keyword(String::new())
            }
        }
    }

    /// Current token is `Number`; optionally followed by a unit `Ident`.
    fn parse_length(&mut self) -> Value {
        let quantity = match self.cur().kind.clone() {
            TokenKind::Number { value, .. } => value,
            _ => 0.0,
        };
        self.advance();

        let unit = match self.cur().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                match name.as_str() {
                    "px" => Unit::Px,
                    "em" => Unit::Em,
                    _ => Unit::Unset,
                }
            }
            _ => Unit::Unset,
        };
        Value::Length(quantity, unit)
    }

    /// Current token is `Hash`; consumes the following Ident/Number
    /// literal as hex digits.
    fn parse_color(&mut self) -> Value {
        self.advance();
        let hex = match self.cur().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                name
            }
            TokenKind::Number { literal, .. } => {
                self.advance();
                literal
            }
            _ => {
                self.error("expected hex digits after '#'");
                String::new()
            }
        };
        match Color::from_hex(&hex) {
            Some(color) => Value::Color(color),
            None => {
                self.error(format!("invalid hex color '#{hex}'"));
                Value::Color(Color { a: 255, r: 0, g: 0, b: 0 })
            }
        }
    }

    /// Current token is an `Ident` immediately followed by `(`. Arguments
    /// are consumed for source fidelity; only the first numeric argument
    /// is retained as the effective value (see the design ledger).
    fn parse_function(&mut self) -> Value {
        self.advance(); // function name
        self.advance(); // '('

        let mut first_number = None;
        loop {
            match self.cur().kind.clone() {
                TokenKind::Number { value, .. } => {
                    if first_number.is_none() {
                        first_number = Some(value);
                    }
                    self.advance();
                }
                TokenKind::RParen => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    self.error("unterminated function value");
                    break;
                }
                _ => self.advance(),
            }
        }
        Value::Length(first_number.unwrap_or(0.0), Unit::Unset)
    }
}
