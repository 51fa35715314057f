//! Lispy shell.
//!
//! Drives the pipeline `parse → read → eval → print` over one persistent
//! [`Environment`](lispy_eval::Environment), either interactively
//! ([`run_repl`]) or once from the command line (`--eval`).

mod config;
mod diagnostic;
mod repl;
mod session;

use std::sync::Once;

pub use config::{Command, ConfigError, ShellConfig, USAGE};
pub use diagnostic::render_parse_error;
pub use repl::{respond, run_repl, Reply, BANNER};
pub use session::Session;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Output goes to stderr, either as
/// flat `fmt` lines or, with `tree`, as an indented span tree.
pub fn init_tracing(tree: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let (flat, hierarchical) = if tree {
            (
                None,
                Some(tracing_tree::HierarchicalLayer::new(2).with_targets(true)),
            )
        } else {
            (
                Some(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                ),
                None,
            )
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(flat)
            .with(hierarchical)
            .init();
    });
}
