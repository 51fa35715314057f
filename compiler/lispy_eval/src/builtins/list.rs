//! `list`, `head`, `tail`, `eval` and `join`.
//!
//! These move between code and data: `list` quotes its evaluated arguments,
//! `eval` unquotes a q-expression, and the rest restructure q-expressions.
//! Each one consumes its arguments and reuses their storage for the result.

use crate::environment::Environment;
use crate::errors::{type_mismatch, EvalResult};
use crate::evaluator;
use crate::value::{type_names, Value};

use super::{non_empty_qexpr, require_some, single_qexpr};

/// `list a b c` → `{a b c}`.
pub(super) fn list(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    Ok(Value::QExpr(args))
}

/// `head {a b c}` → `{a}`.
pub(super) fn head(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let mut cells = non_empty_qexpr("head", args)?;
    cells.truncate(1);
    Ok(Value::QExpr(cells))
}

/// `tail {a b c}` → `{b c}`.
pub(super) fn tail(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let mut cells = non_empty_qexpr("tail", args)?;
    cells.remove(0);
    Ok(Value::QExpr(cells))
}

/// `eval {+ 1 2}` → `3`: the q-expression is evaluated as an s-expression.
pub(super) fn eval(env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let cells = single_qexpr("eval", args)?;
    Ok(evaluator::eval(env, Value::SExpr(cells)))
}

/// `join {a} {b c}` → `{a b c}`.
pub(super) fn join(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    require_some("join", &args)?;

    let lists = args
        .into_iter()
        .map(|arg| match arg {
            Value::QExpr(cells) => Ok(cells),
            other => Err(type_mismatch(
                "join",
                type_names::Q_EXPRESSION,
                other.type_name(),
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Value::QExpr(lists.into_iter().flatten().collect()))
}
