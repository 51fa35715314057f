//! Evaluator.
//!
//! Reduction rules:
//!
//! - a symbol evaluates to a copy of its binding (or an unbound-symbol
//!   error value);
//! - an s-expression evaluates every child, left to right, then applies its
//!   head to the rest;
//! - everything else, q-expressions included, evaluates to itself.
//!
//! Children are always all evaluated, even after one of them produced an
//! error; the first error by position is the result.

use lispy_stack::ensure_sufficient_stack;

use crate::environment::Environment;
use crate::errors::malformed_expression;
use crate::value::Value;

/// Evaluate `value` in `env`, consuming it.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    ensure_sufficient_stack(|| match value {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(cells) => eval_sexpr(env, cells),
        other => other,
    })
}

#[tracing::instrument(level = "trace", skip_all, fields(len = cells.len()))]
fn eval_sexpr(env: &mut Environment, cells: Vec<Value>) -> Value {
    let mut cells: Vec<Value> = cells.into_iter().map(|cell| eval(env, cell)).collect();

    if let Some(index) = cells.iter().position(Value::is_error) {
        return cells.swap_remove(index);
    }

    let mut cells = cells.into_iter();
    let Some(head) = cells.next() else {
        return Value::empty_sexpr();
    };
    let args: Vec<Value> = cells.collect();
    if args.is_empty() {
        return head;
    }

    match head {
        Value::Function(builtin) => {
            tracing::debug!(builtin = builtin.name(), args = args.len(), "apply");
            builtin.call(env, args)
        }
        other => Value::Error(malformed_expression(other.type_name())),
    }
}
