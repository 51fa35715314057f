use super::*;

/// A nested list shaped like `((((...))))`, walked recursively.
enum Nest {
    Leaf(u64),
    Wrap(Box<Nest>),
}

fn build(depth: u64) -> Nest {
    let mut node = Nest::Leaf(depth);
    for _ in 0..depth {
        node = Nest::Wrap(Box::new(node));
    }
    node
}

fn depth_of(node: &Nest) -> u64 {
    ensure_sufficient_stack(|| match node {
        Nest::Leaf(_) => 0,
        Nest::Wrap(inner) => depth_of(inner) + 1,
    })
}

fn leaf_of(node: &Nest) -> u64 {
    ensure_sufficient_stack(|| match node {
        Nest::Leaf(n) => *n,
        Nest::Wrap(inner) => leaf_of(inner),
    })
}

/// Unwinds iteratively so dropping the test fixture does not itself recurse.
fn dismantle(mut node: Nest) {
    while let Nest::Wrap(inner) = node {
        node = *inner;
    }
}

#[test]
fn test_shallow_nesting() {
    let nest = build(10);
    assert_eq!(depth_of(&nest), 10);
    assert_eq!(leaf_of(&nest), 10);
    dismantle(nest);
}

#[test]
fn test_deep_nesting() {
    // Far deeper than a default 2MB test-thread stack allows without growth.
    let nest = build(200_000);
    assert_eq!(depth_of(&nest), 200_000);
    dismantle(nest);
}

#[test]
fn test_returns_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| "lispy"), "lispy");
}

#[test]
fn test_works_with_result_type() {
    let result: Result<i64, &str> = ensure_sufficient_stack(|| Err("division by zero"));
    assert_eq!(result, Err("division by zero"));
}
