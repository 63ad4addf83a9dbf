//! `pyhl`: Python source to tagged HTML.
//!
//! Library half of the `pyhl` binary. The binary parses arguments and
//! dispatches to [`commands`]; everything it does is reachable from here so
//! it can be tested without spawning a process.

use std::sync::Once;

pub mod commands;
mod config;
mod error;

pub use config::HighlightConfig;
pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call does anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
