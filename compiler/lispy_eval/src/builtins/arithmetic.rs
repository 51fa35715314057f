//! `+`, `-`, `*` and `/`.
//!
//! All four are variadic left folds over numbers. Every argument is type
//! checked before any arithmetic happens, and all arithmetic is checked:
//! overflow is an error value, never a wrap or a panic.

use crate::environment::Environment;
use crate::errors::{
    division_by_zero, integer_overflow, type_mismatch, wrong_arg_count, Arity, EvalError,
    EvalResult,
};
use crate::value::{type_names, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }

    fn operation(self) -> &'static str {
        match self {
            ArithOp::Add => "addition",
            ArithOp::Sub => "subtraction",
            ArithOp::Mul => "multiplication",
            ArithOp::Div => "division",
        }
    }

    fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        let result = match self {
            ArithOp::Add => lhs.checked_add(rhs),
            ArithOp::Sub => lhs.checked_sub(rhs),
            ArithOp::Mul => lhs.checked_mul(rhs),
            ArithOp::Div => {
                if rhs == 0 {
                    return Err(division_by_zero());
                }
                // Truncates toward zero; only `MIN / -1` can overflow.
                lhs.checked_div(rhs)
            }
        };
        result.ok_or_else(|| integer_overflow(self.operation()))
    }
}

pub(super) fn add(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Add, args)
}

pub(super) fn sub(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Sub, args)
}

pub(super) fn mul(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Mul, args)
}

pub(super) fn div(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Div, args)
}

fn fold(op: ArithOp, args: Vec<Value>) -> EvalResult {
    let numbers = expect_numbers(op.symbol(), &args)?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(wrong_arg_count(op.symbol(), Arity::AtLeast(1), 0));
    };

    // Unary minus
    if op == ArithOp::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| integer_overflow("negation"));
    }

    rest.iter()
        .try_fold(first, |acc, &n| op.apply(acc, n))
        .map(Value::Number)
}

/// Extract every argument as an integer, failing on the first non-number.
fn expect_numbers(function: &'static str, args: &[Value]) -> Result<Vec<i64>, EvalError> {
    args.iter()
        .map(|arg| {
            arg.as_number()
                .ok_or_else(|| type_mismatch(function, type_names::NUMBER, arg.type_name()))
        })
        .collect()
}
