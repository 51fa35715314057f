//! Full-pipeline tests through the shell's `Session`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lispy_eval::Value;
use lispyc::{respond, Reply, Session};
use pretty_assertions::assert_eq;

/// Feed `lines` to one session and collect what would be printed.
fn transcript(lines: &[&str]) -> Vec<String> {
    let mut session = Session::new();
    lines
        .iter()
        .filter_map(|line| match respond(&mut session, line, false) {
            Reply::Print(text) => Some(text),
            Reply::Skip | Reply::Quit => None,
        })
        .collect()
}

#[test]
fn test_classic_session() {
    assert_eq!(
        transcript(&[
            "+ 5 6",
            "- (* 10 10) (+ 1 1 1)",
            "",
            "list 1 2 3 4",
            "{head (list 1 2 3 4)}",
            "eval {head (list 1 2 3 4)}",
            "tail {tail tail tail}",
            "eval (tail {tail tail {5 6 7}})",
            "eval (head {(+ 1 2) (+ 10 20)})",
        ]),
        vec![
            "11",
            "97",
            "{1 2 3 4}",
            "{head (list 1 2 3 4)}",
            "{1}",
            "{tail tail}",
            "{6 7}",
            "3",
        ]
    );
}

#[test]
fn test_errors_do_not_end_the_session() {
    assert_eq!(
        transcript(&["/ 10 0", "x", "(1 2)", "+ 1 1"]),
        vec![
            "Error: division by zero",
            "Error: unbound symbol: x",
            "Error: S-expression does not start with a function",
            "2",
        ]
    );
}

#[test]
fn test_parse_error_then_recovery() {
    let mut session = Session::new();
    assert!(session.eval_line("{1 2").is_err());
    assert_eq!(session.eval_line("join {1} {2}").unwrap().to_string(), "{1 2}");
}

#[test]
fn test_documented_properties() {
    let mut session = Session::new();
    let mut run = |line: &str| session.eval_line(line).unwrap();

    assert_eq!(run("(+ 1 2 3)"), Value::Number(6));
    assert_eq!(run("(/ 10 2)"), Value::Number(5));
    assert_eq!(run("(- 5)"), Value::Number(-5));
    assert_eq!(run("list 1 2 3").to_string(), "{1 2 3}");
    assert_eq!(run("eval {+ 1 2}"), Value::Number(3));
    assert_eq!(run("(+ 1 (/ 1 0) 3)").to_string(), "Error: division by zero");
    assert_eq!(run("foo").to_string(), "Error: unbound symbol: foo");
    assert_eq!(run("()").to_string(), "()");
    assert_eq!(run("(5)"), Value::Number(5));
}

#[test]
fn test_deep_nesting_through_session() {
    let depth = 10_000;
    let source = format!("{}{{}}{}", "(".repeat(depth), ")".repeat(depth));
    let mut session = Session::new();
    assert_eq!(session.eval_line(&source).unwrap(), Value::empty_qexpr());
}
