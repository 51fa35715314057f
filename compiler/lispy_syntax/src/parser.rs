//! Recursive-descent parser over cooked tokens.

use lispy_stack::ensure_sufficient_stack;

use crate::ast::{tags, AstNode};
use crate::error::ParseError;
use crate::span::Span;
use crate::token::{lex, Token, TokenKind};

/// Parse one line of Lispy source into a parse tree rooted at a
/// [`tags::ROOT`] node.
///
/// The root's children are a start anchor, one node per top-level
/// expression, and an end anchor.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<AstNode, ParseError> {
    let tokens = lex(source)?;
    tracing::trace!(tokens = tokens.len(), "lexed");

    let mut parser = Parser {
        source,
        tokens: tokens.into_iter(),
    };
    parser.parse_program()
}

struct Parser<'src> {
    source: &'src str,
    tokens: std::vec::IntoIter<Token>,
}

impl Parser<'_> {
    fn parse_program(&mut self) -> Result<AstNode, ParseError> {
        let end = self.source.len();
        let mut children = vec![AstNode::anchor(0)];
        while let Some(token) = self.tokens.next() {
            children.push(self.parse_expr(token)?);
        }
        children.push(AstNode::anchor(end));

        Ok(AstNode::branch(tags::ROOT, Span::new(0, end), children))
    }

    fn parse_expr(&mut self, token: Token) -> Result<AstNode, ParseError> {
        ensure_sufficient_stack(|| match token.kind {
            TokenKind::Number => Ok(self.leaf(tags::NUMBER, token)),
            TokenKind::Symbol => Ok(self.leaf(tags::SYMBOL, token)),
            TokenKind::LParen => self.parse_list(token, tags::SEXPR),
            TokenKind::LBrace => self.parse_list(token, tags::QEXPR),
            TokenKind::RParen | TokenKind::RBrace => Err(ParseError::UnmatchedClose {
                found: delimiter_char(token.kind),
                span: token.span,
            }),
        })
    }

    /// Parse the rest of a delimited list whose opening token is `open`.
    fn parse_list(&mut self, open: Token, tag: &'static str) -> Result<AstNode, ParseError> {
        let close = open.kind.closer().unwrap_or(TokenKind::RParen);
        let mut children = vec![self.leaf(tags::CHAR, open)];

        loop {
            let Some(token) = self.tokens.next() else {
                return Err(ParseError::Unclosed {
                    open_char: delimiter_char(open.kind),
                    expected: delimiter_char(close),
                    span: Span::point(self.source.len()),
                    open: open.span,
                });
            };

            if token.kind == close {
                children.push(self.leaf(tags::CHAR, token));
                return Ok(AstNode::branch(tag, open.span.to(token.span), children));
            }

            if token.kind.is_close() {
                return Err(ParseError::MismatchedClose {
                    found: delimiter_char(token.kind),
                    expected: delimiter_char(close),
                    span: token.span,
                    open: open.span,
                });
            }

            children.push(self.parse_expr(token)?);
        }
    }

    fn leaf(&self, tag: &'static str, token: Token) -> AstNode {
        AstNode::leaf(tag, token.text(self.source), token.span)
    }
}

fn delimiter_char(kind: TokenKind) -> char {
    kind.delimiter().unwrap_or('?')
}
