use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<&str> {
    lex(source).unwrap().iter().map(|t| t.text(source)).collect()
}

#[test]
fn test_delimiters_and_atoms() {
    assert_eq!(
        kinds("(+ 1 {2})"),
        vec![
            TokenKind::LParen,
            TokenKind::Symbol,
            TokenKind::Number,
            TokenKind::LBrace,
            TokenKind::Number,
            TokenKind::RBrace,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(texts("  head\t{1}\n"), vec!["head", "{", "1", "}"]);
}

#[test]
fn test_negative_number() {
    assert_eq!(kinds("-42"), vec![TokenKind::Number]);
    assert_eq!(texts("-42"), vec!["-42"]);
}

#[test]
fn test_lone_minus_is_symbol() {
    assert_eq!(kinds("- 5"), vec![TokenKind::Symbol, TokenKind::Number]);
}

#[test]
fn test_number_prefix_splits_atom() {
    assert_eq!(texts("12-3"), vec!["12", "-3"]);
    assert_eq!(kinds("12-3"), vec![TokenKind::Number, TokenKind::Number]);

    assert_eq!(texts("5abc"), vec!["5", "abc"]);
    assert_eq!(kinds("5abc"), vec![TokenKind::Number, TokenKind::Symbol]);
}

#[test]
fn test_symbol_keeps_trailing_digits() {
    assert_eq!(texts("foo-5"), vec!["foo-5"]);
    assert_eq!(kinds("foo-5"), vec![TokenKind::Symbol]);
    assert_eq!(kinds("--5"), vec![TokenKind::Symbol]);
}

#[test]
fn test_symbol_charset() {
    assert_eq!(kinds(r"a_b+-*/\=<>!&"), vec![TokenKind::Symbol]);
}

#[test]
fn test_spans_are_byte_offsets() {
    let tokens = lex("(tail {1 2})").unwrap();
    assert_eq!(tokens[1].span, Span::new(1, 5));
    assert_eq!(tokens[4].span, Span::new(9, 10));
}

#[test]
fn test_unexpected_character() {
    assert_eq!(
        lex("(+ 1 #)"),
        Err(ParseError::UnexpectedChar {
            found: '#',
            span: Span::new(5, 6),
        })
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(lex("   ").unwrap(), Vec::new());
}

#[test]
fn test_delimiter_helpers() {
    assert_eq!(TokenKind::LBrace.delimiter(), Some('{'));
    assert_eq!(TokenKind::LParen.closer(), Some(TokenKind::RParen));
    assert_eq!(TokenKind::Number.closer(), None);
    assert!(TokenKind::RBrace.is_close());
    assert!(!TokenKind::Symbol.is_close());
}
