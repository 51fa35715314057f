//! Tokenizer.
//!
//! `logos` cuts the input into delimiters and maximal runs of symbol
//! characters ("atoms"). Because the symbol charset contains digits and `-`,
//! a run like `12-3` is a single atom to logos; the grammar, however, tries
//! `number` before `symbol` at every position. [`split_atom`] replays that
//! ordered choice inside each atom.

use logos::Logos;

use crate::error::ParseError;
use crate::span::Span;

/// Raw token from logos (before atoms are split).
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&]+")]
    Atom,
}

/// Kind of a cooked token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Number,
    Symbol,
}

impl TokenKind {
    /// The delimiter character, for the four delimiter kinds.
    pub fn delimiter(self) -> Option<char> {
        match self {
            TokenKind::LParen => Some('('),
            TokenKind::RParen => Some(')'),
            TokenKind::LBrace => Some('{'),
            TokenKind::RBrace => Some('}'),
            TokenKind::Number | TokenKind::Symbol => None,
        }
    }

    /// Closing counterpart of an opening delimiter.
    pub fn closer(self) -> Option<TokenKind> {
        match self {
            TokenKind::LParen => Some(TokenKind::RParen),
            TokenKind::LBrace => Some(TokenKind::RBrace),
            _ => None,
        }
    }

    pub fn is_close(self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBrace)
    }
}

/// A token and where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// The token's text within `source`.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span.range()]
    }
}

/// Tokenize a line of Lispy source.
///
/// Fails on the first character that belongs to no token.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(range.start, range.end);
        let kind = match raw {
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::LBrace) => TokenKind::LBrace,
            Ok(RawToken::RBrace) => TokenKind::RBrace,
            Ok(RawToken::Atom) => {
                split_atom(lexer.slice(), span.start, &mut tokens);
                continue;
            }
            Err(()) => {
                let found = lexer.slice().chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::UnexpectedChar { found, span });
            }
        };
        tokens.push(Token { kind, span });
    }

    Ok(tokens)
}

/// Split one atom into number and symbol tokens.
///
/// At each position a `-?[0-9]+` prefix is a number; otherwise the symbol
/// rule matches everything that is left (the whole atom is symbol chars).
fn split_atom(atom: &str, start: usize, tokens: &mut Vec<Token>) {
    let mut offset = 0;
    while offset < atom.len() {
        let rest = &atom[offset..];
        let (kind, len) = match number_prefix_len(rest) {
            0 => (TokenKind::Symbol, rest.len()),
            n => (TokenKind::Number, n),
        };
        tokens.push(Token {
            kind,
            span: Span::new(start + offset, start + offset + len),
        });
        offset += len;
    }
}

/// Length of the longest `-?[0-9]+` prefix of `text`, or 0 if none.
fn number_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let sign = usize::from(bytes.first() == Some(&b'-'));
    let digits = bytes[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        0
    } else {
        sign + digits
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
