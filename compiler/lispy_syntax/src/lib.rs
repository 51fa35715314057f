//! Lispy Syntax - source text to generic parse tree.
//!
//! The grammar is five rules:
//!
//! ```text
//! number : /-?[0-9]+/ ;
//! symbol : /[a-zA-Z0-9_+\-*\/\\=<>!&]+/ ;
//! sexpr  : '(' <expr>* ')' ;
//! qexpr  : '{' <expr>* '}' ;
//! expr   : <number> | <symbol> | <sexpr> | <qexpr> ;
//! lispy  : /^/ <expr>* /$/ ;
//! ```
//!
//! The output is deliberately untyped: every node is an [`AstNode`] carrying
//! a tag string (`expr|number|regex`, `expr|sexpr|>`, `char`, ...), its
//! literal text, and its children. Interpreting the tree is the reader's
//! job, not the parser's.

mod ast;
mod error;
mod parser;
mod span;
mod token;

pub use ast::{tags, AstNode};
pub use error::ParseError;
pub use parser::parse;
pub use span::Span;
pub use token::{lex, Token, TokenKind};
