//! Generic parse tree.

use crate::span::Span;

/// Tag strings attached to parse-tree nodes.
///
/// Composite tags list every rule the node passed through, outermost first,
/// separated by `|`; consumers match on the rule name they care about.
pub mod tags {
    /// The whole input line.
    pub const ROOT: &str = ">";
    /// Start/end-of-input anchors, children of the root.
    pub const ANCHOR: &str = "regex";
    /// A delimiter character inside an s- or q-expression.
    pub const CHAR: &str = "char";
    pub const NUMBER: &str = "expr|number|regex";
    pub const SYMBOL: &str = "expr|symbol|regex";
    pub const SEXPR: &str = "expr|sexpr|>";
    pub const QEXPR: &str = "expr|qexpr|>";
}

/// A node of the generic parse tree.
///
/// Leaves carry their literal text in `contents`; branches carry an empty
/// string and their sub-nodes in `children`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstNode {
    pub tag: &'static str,
    pub contents: String,
    pub span: Span,
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// A leaf with literal text.
    pub fn leaf(tag: &'static str, contents: impl Into<String>, span: Span) -> Self {
        AstNode {
            tag,
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    /// A branch with no text of its own.
    pub fn branch(tag: &'static str, span: Span, children: Vec<AstNode>) -> Self {
        AstNode {
            tag,
            contents: String::new(),
            span,
            children,
        }
    }

    /// Empty anchor node at `offset`.
    pub fn anchor(offset: usize) -> Self {
        AstNode::leaf(tags::ANCHOR, "", Span::point(offset))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

// Tear the tree down with an explicit worklist: nesting depth is unbounded
// and the default drop glue recurses once per level.
impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
