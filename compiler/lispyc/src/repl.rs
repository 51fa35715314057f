//! Interactive read-eval-print loop.

use std::io::IsTerminal;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::ShellConfig;
use crate::diagnostic::render_parse_error;
use crate::session::Session;

pub const BANNER: &str = "Lispy Version 0.0.0.0.1\nPress Ctrl+c to Exit\n";

const HELP: &str = "\
Enter an expression to evaluate it, e.g. `+ 1 (* 2 3)`.

Builtins: list head tail eval join + - * /
Commands:
  :help   Show this message
  :env    List bound symbols
  :quit   Exit (also Ctrl+c or Ctrl+d)";

/// What the loop should do with one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print.
    Skip,
    Print(String),
    Quit,
}

/// Handle one line: a shell command or an expression.
pub fn respond(session: &mut Session, line: &str, color: bool) -> Reply {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Reply::Skip;
    }

    if let Some(command) = trimmed.strip_prefix(':') {
        return match command {
            "help" | "h" | "?" => Reply::Print(HELP.to_string()),
            "env" => Reply::Print(
                session
                    .environment()
                    .names()
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            "quit" | "q" => Reply::Quit,
            _ => Reply::Print(format!("unknown command ':{command}' (try :help)")),
        };
    }

    match session.eval_line(line) {
        Ok(value) => Reply::Print(value.to_string()),
        Err(err) => Reply::Print(render_parse_error(line, &err, color)),
    }
}

/// Run the REPL on the terminal until the user quits.
///
/// History lives only as long as the loop; nothing is written to disk.
pub fn run_repl(session: &mut Session, config: &ShellConfig) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let color = std::io::stdout().is_terminal();

    if config.banner {
        println!("{BANNER}");
    }

    loop {
        let line = match editor.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        };

        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }

        match respond(session, &line, color) {
            Reply::Skip => {}
            Reply::Print(text) => println!("{text}"),
            Reply::Quit => break,
        }
    }

    tracing::debug!("repl exited");
    Ok(())
}

#[cfg(test)]
mod tests;
