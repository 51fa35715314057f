//! Runtime values.
//!
//! # Ownership
//!
//! A `Value` owns its entire subtree: s- and q-expressions hold their
//! children in a plain `Vec`, and there is no `Rc`/`Arc` anywhere in the
//! type. `Clone` is therefore a deep copy, and a value bound in the
//! [`Environment`] can never alias a value in flight.
//!
//! The evaluator leans on this: it consumes the `Value` it is given,
//! rebuilds the children in place, and returns a fresh value.

mod display;

use std::fmt;

use crate::environment::Environment;
use crate::errors::{EvalError, EvalResult};

/// Names used for each variant in error messages.
pub mod type_names {
    pub const NUMBER: &str = "Number";
    pub const ERROR: &str = "Error";
    pub const SYMBOL: &str = "Symbol";
    pub const FUNCTION: &str = "Function";
    pub const S_EXPRESSION: &str = "S-Expression";
    pub const Q_EXPRESSION: &str = "Q-Expression";
}

/// Native implementation of a builtin.
///
/// Takes ownership of the already-evaluated arguments. Errors returned
/// here are turned into `Value::Error` by [`Builtin::call`].
pub type BuiltinFn = fn(&mut Environment, Vec<Value>) -> EvalResult;

/// A named builtin operation.
///
/// Equality is by name: the builtin table never registers two functions
/// under one name.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the builtin, turning a failure into an error value.
    pub fn call(&self, env: &mut Environment, args: Vec<Value>) -> Value {
        (self.func)(env, args).unwrap_or_else(Value::Error)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Builtin {}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Builtin").field(&self.name).finish()
    }
}

/// Runtime value in the Lispy interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Signed 64-bit integer.
    Number(i64),
    /// A failure, carried as data.
    Error(EvalError),
    /// An identifier, resolved through the environment when evaluated.
    Symbol(String),
    /// A builtin operation.
    Function(Builtin),
    /// Code: reduced by applying its evaluated head to its evaluated tail.
    SExpr(Vec<Value>),
    /// Quoted data: never reduced implicitly.
    QExpr(Vec<Value>),
}

impl Value {
    /// Create a symbol value.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// The empty s-expression `()`.
    pub fn empty_sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// The empty q-expression `{}`.
    pub fn empty_qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    /// Check if this value is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Get the integer if this is a number.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Children of an s- or q-expression.
    pub fn cells(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// Name of this value's variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => type_names::NUMBER,
            Value::Error(_) => type_names::ERROR,
            Value::Symbol(_) => type_names::SYMBOL,
            Value::Function(_) => type_names::FUNCTION,
            Value::SExpr(_) => type_names::S_EXPRESSION,
            Value::QExpr(_) => type_names::Q_EXPRESSION,
        }
    }
}
