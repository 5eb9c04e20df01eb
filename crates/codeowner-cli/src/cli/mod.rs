//! CLI module for the CODEOWNERS generator.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::Parser;
use codeowner_core::{DEFAULT_MARKER_FILE, DEFAULT_PREFIX};
use std::path::PathBuf;

/// CODEOWNERS generator - builds a CODEOWNERS file from source annotations.
///
/// Scans a tree for `CodeOwner:` annotations in comments and `.codeowner`
/// directory markers, and prints a deterministic CODEOWNERS file.
#[derive(Parser, Debug)]
#[command(name = "codeowner")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Root of the tree to scan.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Annotation prefix to look for in source files.
    #[arg(long, env = "CODEOWNER_PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Name of the directory marker file.
    #[arg(long, env = "CODEOWNER_DIROWNER", default_value = DEFAULT_MARKER_FILE)]
    pub dirowner: String,

    /// Space-separated owners of the CODEOWNERS file itself.
    #[arg(long, env = "CODEOWNER_PROTECT")]
    pub protect: Option<String>,

    /// Write the result to a file instead of stdout.
    #[arg(long, short = 'o', conflicts_with = "check")]
    pub output: Option<PathBuf>,

    /// Compare the result with the existing CODEOWNERS file instead of printing it.
    /// Exits with code 3 when the file is missing or out of date.
    #[arg(long)]
    pub check: bool,

    /// Output mappings as JSON instead of CODEOWNERS text.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}
