//! Parse failures.
//!
//! A `ParseError` is the diagnostic the grammar engine hands to the shell.
//! The evaluator never sees one.

use crate::span::Span;

/// Why a line of source could not be turned into a parse tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character outside every token class, e.g. `#` or `"`.
    #[error("unexpected character '{found}'")]
    UnexpectedChar { found: char, span: Span },

    /// A closing delimiter with nothing open.
    #[error("unexpected '{found}'")]
    UnmatchedClose { found: char, span: Span },

    /// A closing delimiter of the wrong shape, e.g. `(1 2}`.
    #[error("mismatched '{found}': expected '{expected}'")]
    MismatchedClose {
        found: char,
        expected: char,
        span: Span,
        open: Span,
    },

    /// End of input while a delimiter is still open.
    #[error("unclosed '{open_char}': expected '{expected}' before end of input")]
    Unclosed {
        open_char: char,
        expected: char,
        span: Span,
        open: Span,
    },
}

impl ParseError {
    /// Location the error points at.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedChar { span, .. }
            | ParseError::UnmatchedClose { span, .. }
            | ParseError::MismatchedClose { span, .. }
            | ParseError::Unclosed { span, .. } => *span,
        }
    }

    /// Location of the opening delimiter involved, if any.
    pub fn opened_at(&self) -> Option<Span> {
        match self {
            ParseError::MismatchedClose { open, .. } | ParseError::Unclosed { open, .. } => {
                Some(*open)
            }
            ParseError::UnexpectedChar { .. } | ParseError::UnmatchedClose { .. } => None,
        }
    }

    /// Short label for the primary location.
    pub fn label(&self) -> String {
        match self {
            ParseError::UnexpectedChar { .. } => "not valid in a number or symbol".to_string(),
            ParseError::UnmatchedClose { .. } => "no matching opening delimiter".to_string(),
            ParseError::MismatchedClose { expected, .. }
            | ParseError::Unclosed { expected, .. } => format!("expected '{expected}'"),
        }
    }
}
