use super::*;
use pretty_assertions::assert_eq;

fn reply(session: &mut Session, line: &str) -> Reply {
    respond(session, line, false)
}

fn print(text: &str) -> Reply {
    Reply::Print(text.to_string())
}

#[test]
fn test_expressions_print_their_value() {
    let mut session = Session::new();
    assert_eq!(reply(&mut session, "+ 1 2"), print("3"));
    assert_eq!(reply(&mut session, "  list 1 2  "), print("{1 2}"));
    assert_eq!(
        reply(&mut session, "head {}"),
        print("Error: function 'head' passed {}")
    );
}

#[test]
fn test_blank_lines_are_skipped() {
    let mut session = Session::new();
    assert_eq!(reply(&mut session, ""), Reply::Skip);
    assert_eq!(reply(&mut session, "   \t"), Reply::Skip);
}

#[test]
fn test_commands() {
    let mut session = Session::new();
    assert_eq!(reply(&mut session, ":quit"), Reply::Quit);
    assert_eq!(reply(&mut session, " :q "), Reply::Quit);
    assert_eq!(
        reply(&mut session, ":env"),
        print("list head tail eval join + * - /")
    );
    assert_eq!(
        reply(&mut session, ":frobnicate"),
        print("unknown command ':frobnicate' (try :help)")
    );
}

#[test]
fn test_help_lists_commands() {
    let mut session = Session::new();
    let Reply::Print(help) = reply(&mut session, ":help") else {
        panic!("expected help text");
    };
    for command in [":help", ":env", ":quit"] {
        assert!(help.contains(command), "{help}");
    }
}

#[test]
fn test_parse_errors_are_rendered() {
    let mut session = Session::new();
    let Reply::Print(out) = reply(&mut session, "(+ 1") else {
        panic!("expected a diagnostic");
    };
    assert!(out.contains("unclosed '('"), "{out}");
}

#[test]
fn test_banner() {
    assert!(BANNER.starts_with("Lispy Version 0.0.0.0.1\n"));
    assert!(BANNER.contains("Press Ctrl+c to Exit"));
}
