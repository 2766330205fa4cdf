//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use wuw::util::shell::ColorChoice;

/// wuw - what uses what
///
/// Quickly see which parts of a Go project depend on which other parts, and
/// which external dependencies they use, to understand the architecture of
/// a codebase.
#[derive(Parser)]
#[command(name = "wuw")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Directories to scan; read one per line from stdin when omitted
    pub dirs: Vec<PathBuf>,

    /// Exclude standard library packages (including golang.org/x/)
    #[arg(long)]
    pub no_std: bool,

    /// Exclude packages outside the standard library
    #[arg(long)]
    pub no_external: bool,

    /// Sort dependencies instead of listing them in the order first seen
    #[arg(long)]
    pub sort: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = MessageFormat::Human)]
    pub message_format: MessageFormat,

    /// Coloring: auto, always, never
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print results and errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageFormat {
    /// One line of text per directory
    Human,
    /// One JSON object per line
    Json,
}
