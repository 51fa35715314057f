//! Evaluation errors.
//!
//! An [`EvalError`] is the payload of `Value::Error`: a first-class value
//! that flows through the evaluator like any other, not a control-flow
//! exception. `EvalErrorKind` gives each failure a typed category so callers
//! can match on it; the factory functions below are the only way errors are
//! built, so `kind` and `message` always agree.

use std::fmt;

use crate::value::Value;

/// Result type used inside builtins before the error is folded into a value.
pub type EvalResult = Result<Value, EvalError>;

/// Expected argument count of a builtin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, n) = match *self {
            Arity::Exactly(n) => ("", n),
            Arity::AtLeast(n) => ("at least ", n),
        };
        let word = if n == 1 { "argument" } else { "arguments" };
        write!(f, "{prefix}{n} {word}")
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Reading
    /// Numeric literal outside the `i64` range.
    BadNumber { literal: String },
    /// Parse-tree node the reader has no rule for.
    UnknownNode { tag: String },

    // Lookup
    UnboundSymbol { name: String },

    // Application
    TypeMismatch {
        function: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    ArityMismatch {
        function: &'static str,
        expected: Arity,
        got: usize,
    },
    /// `head`/`tail` of `{}`.
    EmptyContainer { function: &'static str },
    /// S-expression whose evaluated head is not a function.
    MalformedExpression { got: &'static str },

    // Arithmetic
    DivisionByZero,
    IntegerOverflow { operation: &'static str },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadNumber { .. } => write!(f, "invalid number"),
            Self::UnknownNode { tag } => write!(f, "unrecognized syntax node: {tag}"),
            Self::UnboundSymbol { name } => write!(f, "unbound symbol: {name}"),
            Self::TypeMismatch {
                function,
                expected,
                got,
            } => write!(
                f,
                "function '{function}' passed incorrect type: expected {expected}, got {got}"
            ),
            Self::ArityMismatch {
                function,
                expected,
                got,
            } => write!(f, "function '{function}' expects {expected}, got {got}"),
            Self::EmptyContainer { function } => write!(f, "function '{function}' passed {{}}"),
            Self::MalformedExpression { .. } => {
                write!(f, "S-expression does not start with a function")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
        }
    }
}

/// Evaluation error carried by `Value::Error`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

// Reading Errors

/// Numeric literal does not fit in an `i64`.
#[cold]
pub fn bad_number(literal: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BadNumber {
        literal: literal.to_string(),
    })
}

/// Parse-tree node with an unrecognized tag.
#[cold]
pub fn unknown_node(tag: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownNode {
        tag: tag.to_string(),
    })
}

// Lookup Errors

/// Symbol with no binding in the environment.
#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    })
}

// Application Errors

/// Argument of the wrong type.
#[cold]
pub fn type_mismatch(function: &'static str, expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        function,
        expected,
        got,
    })
}

/// Wrong number of arguments.
#[cold]
pub fn wrong_arg_count(function: &'static str, expected: Arity, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function,
        expected,
        got,
    })
}

/// `head`/`tail` applied to an empty q-expression.
#[cold]
pub fn empty_container(function: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyContainer { function })
}

/// S-expression headed by something other than a function.
#[cold]
pub fn malformed_expression(got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedExpression { got })
}

// Arithmetic Errors

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Result outside the `i64` range.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}
