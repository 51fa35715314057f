//! Command-line configuration.

use std::fmt::Write as _;

pub const USAGE: &str = "\
Usage: lispyc [options]

Options:
  -e, --eval <expr>   Evaluate <expr>, print the result and exit
  --no-banner         Start the REPL without the banner
  --prompt <text>     REPL prompt (default: \"lispy> \")
  --log-tree          Log as an indented span tree (with RUST_LOG set)
  -h, --help          Show this help
  -V, --version       Show the version

Logging is enabled by setting RUST_LOG, e.g. RUST_LOG=lispy_eval=debug.";

pub const DEFAULT_PROMPT: &str = "lispy> ";

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(ShellConfig),
    Help,
    Version,
}

/// Options for a shell run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Evaluate this once and exit instead of starting the REPL.
    pub eval: Option<String>,
    pub banner: bool,
    pub prompt: String,
    /// Use the hierarchical log layer.
    pub log_tree: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            eval: None,
            banner: true,
            prompt: DEFAULT_PROMPT.to_string(),
            log_tree: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing value for '{flag}'")]
    MissingValue { flag: String },

    #[error("unknown option '{arg}'")]
    UnknownOption { arg: String },
}

impl ShellConfig {
    /// Parse arguments, not including the program name.
    ///
    /// Options taking a value accept both `--flag value` and `--flag=value`.
    /// `--help` and `--version` win over everything after them.
    pub fn from_args<I>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = ShellConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
                _ => (arg.as_str(), None),
            };

            match flag {
                "-h" | "--help" => return Ok(Command::Help),
                "-V" | "--version" => return Ok(Command::Version),
                "--no-banner" => config.banner = false,
                "--log-tree" => config.log_tree = true,
                "-e" | "--eval" => config.eval = Some(take_value(flag, inline, &mut args)?),
                "--prompt" => config.prompt = take_value(flag, inline, &mut args)?,
                _ => {
                    return Err(ConfigError::UnknownOption { arg: arg.clone() });
                }
            }
        }

        Ok(Command::Run(config))
    }

    /// One-line summary for the startup log.
    pub fn describe(&self) -> String {
        let mut out = String::from(if self.eval.is_some() { "eval" } else { "repl" });
        if !self.banner {
            out.push_str(" no-banner");
        }
        if self.log_tree {
            out.push_str(" log-tree");
        }
        if self.prompt != DEFAULT_PROMPT {
            let _ = write!(out, " prompt={:?}", self.prompt);
        }
        out
    }
}

fn take_value(
    flag: &str,
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
) -> Result<String, ConfigError> {
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| ConfigError::MissingValue {
            flag: flag.to_string(),
        })
}
