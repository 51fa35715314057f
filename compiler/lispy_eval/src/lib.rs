#![deny(clippy::arithmetic_side_effects)]
//! Lispy Eval - the core of the Lispy interpreter.
//!
//! # Architecture
//!
//! - [`Value`]: owned, acyclic value tree. Cloning is always deep; nothing
//!   in a `Value` is shared.
//! - [`Environment`]: the flat, session-wide symbol table.
//! - [`read`]: generic parse tree (anything implementing [`ParseTree`]) to
//!   `Value`, with no evaluation.
//! - [`eval`]: the reduction rules for symbols and s-expressions.
//! - [`BUILTINS`]: the primitive table installed by [`register_builtins`].
//!
//! Failures during reading or evaluation are ordinary values
//! (`Value::Error`), never Rust errors or panics. [`EvalResult`] is only used
//! inside builtins, and [`Builtin::call`] folds it back into a `Value`.
//!
//! ```text
//! let mut env = Environment::with_builtins();
//! let tree = lispy_syntax::parse("(+ 1 2)")?;
//! assert_eq!(eval(&mut env, read(&tree)), Value::Number(3));
//! ```

mod builtins;
mod environment;
pub mod errors;
mod evaluator;
mod reader;
mod value;

pub use builtins::{register_builtins, BUILTINS};
pub use environment::Environment;
pub use errors::{Arity, EvalError, EvalErrorKind, EvalResult};
pub use evaluator::eval;
pub use reader::{read, ParseTree};
pub use value::{type_names, Builtin, BuiltinFn, Value};
