//! Two-token-lookahead recursive-descent HTML parser.
//!
//! `parse()` always returns a single synthetic `html` root with exactly
//! two children — a `head` and a `body` — so downstream stages never have
//! to special-case a missing wrapper.

use bro_dom::{AttributesMap, Dom, ElementData, NodeId, NodeType};

use crate::error::HtmlParseError;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// The result of parsing: the arena, the synthetic `html` root, and any
/// recoverable errors encountered along the way.
pub struct ParseOutput {
    /// The arena backing every node reachable from `root`.
    pub dom: Dom,
    /// The synthetic `<html>` root, always present with `head` and `body`
    /// children.
    pub root: NodeId,
    /// Recoverable parse errors, in the order they were encountered.
    pub errors: Vec<HtmlParseError>,
}

/// Parse `input` as HTML.
#[must_use]
pub fn parse(input: &str) -> ParseOutput {
    let tokens = Tokenizer::new(input).run();
    Parser::new(tokens).parse_document()
}

/// What a single call to [`Parser::parse_node`] produced.
enum ParsedNode {
    /// A real DOM node (element or text) to be linked into the tree.
    Dom(NodeId),
    /// The parser's private "closing tag" sentinel. Must never escape
    /// `parse_document`/`parse_element`.
    ClosingElement(String),
    /// Nothing usable: an error was recorded, or EOF was reached.
    None,
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    dom: Dom,
    errors: Vec<HtmlParseError>,
    stack: Vec<String>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0, dom: Dom::new(), errors: Vec::new(), stack: Vec::new() }
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
        self.errors.push(HtmlParseError::new(message, self.cur().position));
    }

    fn parse_document(mut self) -> ParseOutput {
        let root = self.dom.alloc(element("html"));
        let default_head = self.dom.alloc(element("head"));
        let body = self.dom.alloc(element("body"));
        self.dom.append_child(root, default_head);
        self.dom.append_child(root, body);

        let mut real_head: Option<NodeId> = None;

        while !matches!(self.cur().kind, TokenKind::Eof) {
            match self.parse_node() {
                ParsedNode::Dom(id) => {
                    if real_head.is_none() && self.dom.as_element(id).is_some_and(|e| e.tag_name == "head") {
                        real_head = Some(id);
                    } else {
                        self.dom.append_child(body, id);
                    }
                }
                ParsedNode::ClosingElement(tag) => {
                    self.error(format!("unexpected closing element </{tag}>"));
                }
                ParsedNode::None => {}
            }
        }

        if let Some(real_head) = real_head {
            self.splice_real_head(root, real_head, body);
        }

        ParseOutput { dom: self.dom, root, errors: self.errors }
    }

    /// The default empty `head` allocated up front is discarded in favor
    /// of a real one found while scanning the top level.
    fn splice_real_head(&mut self, root: NodeId, real_head: NodeId, body: NodeId) {
        self.dom.get_mut(real_head).parent = Some(root);
        self.dom.get_mut(real_head).next_sibling = Some(body);
        self.dom.get_mut(body).prev_sibling = Some(real_head);
        self.dom.get_mut(root).first_child = Some(real_head);
    }

    fn parse_node(&mut self) -> ParsedNode {
        match self.cur().kind.clone() {
            TokenKind::Lt if matches!(self.peek().kind, TokenKind::Bang) => {
                self.error("doctype not implemented");
                self.skip_until_gt();
                ParsedNode::None
            }
            TokenKind::Lt if matches!(self.peek().kind, TokenKind::Slash) => {
                self.parse_closing_element()
            }
            TokenKind::Lt if matches!(self.peek().kind, TokenKind::Ident(_)) => {
                self.parse_element()
            }
            TokenKind::Text(text) => {
                let id = self.dom.alloc(NodeType::Text(text));
                self.advance();
                ParsedNode::Dom(id)
            }
            TokenKind::Eof => {
                if !self.stack.is_empty() {
                    self.error("unexpected end of file");
                }
                ParsedNode::None
            }
            _ => {
                self.error(format!("unexpected token {:?}", self.cur().kind));
                self.advance();
                ParsedNode::None
            }
        }
    }

    /// `<` `!` ... skip forward until the matching `>` (or EOF).
    fn skip_until_gt(&mut self) {
        while !matches!(self.cur().kind, TokenKind::Gt | TokenKind::Eof) {
            self.advance();
        }
        if matches!(self.cur().kind, TokenKind::Gt) {
            self.advance();
        }
    }

    /// `<` `/` Ident `>`.
    fn parse_closing_element(&mut self) -> ParsedNode {
        self.advance(); // `<`
        self.advance(); // `/`
        let tag = match self.cur().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                name.to_ascii_lowercase()
            }
            _ => {
                self.error("expected tag name in closing element");
                String::new()
            }
        };
        if matches!(self.cur().kind, TokenKind::Gt) {
            self.advance();
        } else {
            self.error("expected '>' to close tag");
        }
        ParsedNode::ClosingElement(tag)
    }

    /// `<` Ident (Ident (`=` String)?)* `>` children... matching close.
    fn parse_element(&mut self) -> ParsedNode {
        let start = self.cur().position;
        self.advance(); // `<`
        let tag_name = match self.cur().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                name.to_ascii_lowercase()
            }
            _ => {
                self.error("expected tag name");
                return ParsedNode::None;
            }
        };

        let mut attrs = AttributesMap::new();
        while let TokenKind::Ident(name) = self.cur().kind.clone() {
            self.advance();
            if matches!(self.cur().kind, TokenKind::Eq) {
                self.advance();
                if let TokenKind::String(value) = self.cur().kind.clone() {
                    let _ = attrs.insert(name, value);
                    self.advance();
                } else {
                    self.error("expected string value after '='");
                }
            }
            // An Ident with no following '=' is accepted but discarded.
        }

        if matches!(self.cur().kind, TokenKind::Gt) {
            self.advance();
        } else {
            self.error("expected '>' after tag attributes");
        }

        let node_id = self.dom.alloc(NodeType::Element(ElementData { tag_name: tag_name.clone(), attrs }));
        self.stack.push(tag_name.clone());

        loop {
            match self.parse_node() {
                ParsedNode::Dom(child) => self.dom.append_child(node_id, child),
                ParsedNode::ClosingElement(closing_tag) => {
                    if closing_tag != tag_name {
                        self.errors.push(HtmlParseError::new(
                            format!("unexpected closing element </{closing_tag}>, expected </{tag_name}>"),
                            start,
                        ));
                    }
                    let _ = self.stack.pop();
                    break;
                }
                ParsedNode::None => {
                    self.errors.push(HtmlParseError::new(
                        format!("missing closing element for <{tag_name}>"),
                        start,
                    ));
                    if !self.stack.is_empty() && self.stack.last().map(String::as_str) == Some(tag_name.as_str()) {
                        let _ = self.stack.pop();
                    }
                    break;
                }
            }
        }

        ParsedNode::Dom(node_id)
    }
}

fn element(tag: &str) -> NodeType {
    NodeType::Element(ElementData { tag_name: tag.to_string(), attrs: AttributesMap::new() })
}
