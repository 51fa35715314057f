//! Parse tree to value tree.
//!
//! The reader is pure structural recursion over a generic parse tree: it
//! dispatches on each node's tag, never evaluates anything, and turns bad
//! input into error values rather than failing.

use lispy_stack::ensure_sufficient_stack;
use lispy_syntax::AstNode;

use crate::errors::{bad_number, unknown_node};
use crate::value::Value;

/// A node of a generic parse tree.
///
/// Tags are composite strings such as `expr|number|regex`; the reader only
/// looks for the rule names `number`, `symbol`, `sexpr` and `qexpr` inside
/// them, plus the exact root tag `>` and anchor tag `regex`.
pub trait ParseTree: Sized {
    fn tag(&self) -> &str;

    /// Literal text of a leaf; empty for branches.
    fn contents(&self) -> &str;

    fn children(&self) -> &[Self];
}

impl ParseTree for AstNode {
    fn tag(&self) -> &str {
        self.tag
    }

    fn contents(&self) -> &str {
        &self.contents
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Translate a parse tree into a value tree.
pub fn read<T: ParseTree>(node: &T) -> Value {
    ensure_sufficient_stack(|| {
        let tag = node.tag();

        if tag.contains("number") {
            return read_number(node.contents());
        }
        if tag.contains("symbol") {
            return Value::symbol(node.contents());
        }
        if tag == ">" || tag.contains("sexpr") {
            return Value::SExpr(read_children(node));
        }
        if tag.contains("qexpr") {
            return Value::QExpr(read_children(node));
        }

        Value::Error(unknown_node(tag))
    })
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Error(bad_number(text)),
    }
}

fn read_children<T: ParseTree>(node: &T) -> Vec<Value> {
    node.children()
        .iter()
        .filter(|child| !is_punctuation(*child))
        .map(read)
        .collect()
}

/// Delimiters and anchors carry no meaning once the tree is built.
fn is_punctuation<T: ParseTree>(node: &T) -> bool {
    matches!(node.contents(), "(" | ")" | "{" | "}") || node.tag() == "regex"
}
