//! Builtin library.
//!
//! Every primitive is a plain function with the [`BuiltinFn`] signature,
//! listed once in [`BUILTINS`]. The evaluator knows nothing about
//! individual builtins: it applies whatever `Value::Function` heads an
//! s-expression, so adding a primitive means adding a row to the table.

mod arithmetic;
mod list;

use crate::environment::Environment;
use crate::errors::{empty_container, type_mismatch, wrong_arg_count, Arity, EvalError};
use crate::value::{type_names, Builtin, Value};

/// Every builtin, in registration order.
pub const BUILTINS: &[Builtin] = &[
    // List operations
    Builtin::new("list", list::list),
    Builtin::new("head", list::head),
    Builtin::new("tail", list::tail),
    Builtin::new("eval", list::eval),
    Builtin::new("join", list::join),
    // Arithmetic
    Builtin::new("+", arithmetic::add),
    Builtin::new("*", arithmetic::mul),
    Builtin::new("-", arithmetic::sub),
    Builtin::new("/", arithmetic::div),
];

/// Install every builtin into `env` as a function value.
pub fn register_builtins(env: &mut Environment) {
    for builtin in BUILTINS {
        env.put(builtin.name(), &Value::Function(*builtin));
    }
    tracing::debug!(count = BUILTINS.len(), "registered builtins");
}

// Argument validation shared by the list builtins

/// Unwrap the single q-expression argument of `function`.
fn single_qexpr(function: &'static str, args: Vec<Value>) -> Result<Vec<Value>, EvalError> {
    let got = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(Value::QExpr(cells)), None) => Ok(cells),
        (Some(other), None) => Err(type_mismatch(
            function,
            type_names::Q_EXPRESSION,
            other.type_name(),
        )),
        _ => Err(wrong_arg_count(function, Arity::Exactly(1), got)),
    }
}

/// Like [`single_qexpr`], but `{}` is also rejected.
fn non_empty_qexpr(function: &'static str, args: Vec<Value>) -> Result<Vec<Value>, EvalError> {
    let cells = single_qexpr(function, args)?;
    if cells.is_empty() {
        return Err(empty_container(function));
    }
    Ok(cells)
}

/// Reject an empty argument list for a variadic builtin.
fn require_some(function: &'static str, args: &[Value]) -> Result<(), EvalError> {
    if args.is_empty() {
        return Err(wrong_arg_count(function, Arity::AtLeast(1), 0));
    }
    Ok(())
}
