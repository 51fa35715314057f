//! The symbol table.
//!
//! One flat `Environment` per session, passed by `&mut` through every
//! evaluation call. Bindings keep insertion order; a side index maps each
//! name to its slot so lookups do not scan.

use rustc_hash::FxHashMap;

use crate::builtins::register_builtins;
use crate::errors::unbound_symbol;
use crate::value::Value;

/// A single name/value binding.
#[derive(Clone, Debug)]
struct Binding {
    name: String,
    value: Value,
}

/// Ordered mapping from symbol name to an owned value.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    /// Bindings in insertion order.
    bindings: Vec<Binding>,
    /// Name to slot in `bindings`.
    index: FxHashMap<String, usize>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Create the session environment with every builtin registered.
    pub fn with_builtins() -> Self {
        let mut env = Environment::new();
        register_builtins(&mut env);
        env
    }

    /// Look up `name`, returning a copy of its value or an unbound-symbol
    /// error value.
    pub fn get(&self, name: &str) -> Value {
        match self.lookup(name) {
            Some(value) => value.clone(),
            None => Value::Error(unbound_symbol(name)),
        }
    }

    /// Borrow the value bound to `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.index
            .get(name)
            .and_then(|&slot| self.bindings.get(slot))
            .map(|binding| &binding.value)
    }

    /// Bind a copy of `value` to `name`, replacing any existing binding in
    /// place.
    pub fn put(&mut self, name: &str, value: &Value) {
        if let Some(binding) = self
            .index
            .get(name)
            .and_then(|&slot| self.bindings.get_mut(slot))
        {
            tracing::trace!(symbol = name, "rebind");
            binding.value = value.clone();
            return;
        }

        tracing::trace!(symbol = name, "bind");
        self.index.insert(name.to_string(), self.bindings.len());
        self.bindings.push(Binding {
            name: name.to_string(),
            value: value.clone(),
        });
    }

    /// Check if `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Bound names in the order they were first bound.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|binding| binding.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
