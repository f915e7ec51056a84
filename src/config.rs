//! Configuration module.
//!
//! This module defines the command-line interface (CLI) for the generators using `clap`.
//! Each generator is exposed as a subcommand so both can run as independent
//! steps of a larger build pipeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build-time generators for boot image artifacts.
///
/// `bootgen` prepares the text artifacts a capability-based machine image is
/// linked from: an embedded-file data segment and a capability-table preload
/// stub. It generates text for an assembler and linker to consume; it does
/// not assemble or link anything itself.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", help = "Set the logging level")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pack every file of a directory into a linkable data segment.
    Embed {
        /// Directory whose entries are embedded
        directory: PathBuf,

        /// Output path for the extern symbol declarations header
        declarations: PathBuf,

        /// Output path for the assembly data segment
        segment: PathBuf,
    },

    /// Emit capability-table preload instructions for the symbol listing on stdin.
    CaptableUsage,
}
