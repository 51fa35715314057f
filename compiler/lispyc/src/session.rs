//! One interpreter session: a persistent environment plus the pipeline.

use lispy_eval::{eval, read, Environment, Value};
use lispy_syntax::{parse, ParseError};

/// A running interpreter. Bindings persist across [`Session::eval_line`]
/// calls for the session's lifetime.
#[derive(Clone, Debug)]
pub struct Session {
    env: Environment,
}

impl Session {
    /// A fresh session with every builtin bound.
    pub fn new() -> Self {
        Session {
            env: Environment::with_builtins(),
        }
    }

    /// Parse, read and evaluate one line of input.
    ///
    /// Only syntax errors are `Err`; evaluation failures come back as
    /// `Ok(Value::Error(..))`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = line.len()))]
    pub fn eval_line(&mut self, line: &str) -> Result<Value, ParseError> {
        let tree = parse(line)?;
        let value = eval(&mut self.env, read(&tree));
        tracing::debug!(result = value.type_name(), "evaluated");
        Ok(value)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
