//! Entry point for the bootgen generators.
//!
//! This file handles high-level application flow:
//! 1. Parse command-line arguments using `clap`.
//! 2. Initialize `tracing` with the requested log level.
//! 3. Dispatch to the requested generator.
//!
//! Error handling is done via `anyhow`: any failure exits non-zero, so a
//! controlling build system treats it as a hard build break.

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use bootgen::captable::emit_usage;
use bootgen::config::{Command, Config};
use bootgen::embed::embed;

fn main() -> Result<()> {
    let config = Config::parse();

    // RUST_LOG wins over --log-level when set. Logs go to stderr; stdout is
    // reserved for the captable-usage artifact.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match config.command {
        Command::Embed {
            directory,
            declarations,
            segment,
        } => embed(&directory, &declarations, &segment),
        Command::CaptableUsage => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            emit_usage(stdin.lock(), stdout.lock())
        }
    }
}
