//! Lispy shell CLI.

use std::io::IsTerminal;
use std::process::ExitCode;

use lispyc::{init_tracing, render_parse_error, run_repl, Command, Session, ShellConfig, USAGE};

fn main() -> ExitCode {
    let command = match ShellConfig::from_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("lispyc {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Run(config) => run(&config),
    }
}

fn run(config: &ShellConfig) -> ExitCode {
    init_tracing(config.log_tree);
    tracing::debug!(mode = %config.describe(), "starting");

    let mut session = Session::new();

    if let Some(source) = &config.eval {
        return match session.eval_line(source) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                let color = std::io::stderr().is_terminal();
                eprint!("{}", render_parse_error(source, &err, color));
                ExitCode::FAILURE
            }
        };
    }

    match run_repl(&mut session, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
