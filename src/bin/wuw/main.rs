//! wuw CLI - what uses what

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, MessageFormat};
use wuw::classify::{DependencyFilter, GorootLookup};
use wuw::ops::{print_report, scan_directories, ScanOptions};
use wuw::util::config::{global_config_path, load_config, project_config_path};
use wuw::util::shell::{Shell, Status};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("wuw=debug")
    } else if cli.quiet {
        EnvFilter::new("wuw=error")
    } else {
        EnvFilter::new("wuw=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cwd = std::env::current_dir().context("failed to determine the current directory")?;
    let config = load_config(
        global_config_path().as_deref(),
        &project_config_path(&cwd),
    );

    let dirs = if cli.dirs.is_empty() {
        read_dirs_from_stdin()?
    } else {
        cli.dirs.clone()
    };

    if dirs.is_empty() {
        eprintln!("{}", Cli::command().render_help());
        return Ok(1);
    }

    let shell = Shell::from_flags(
        cli.quiet,
        cli.verbose,
        cli.color,
        cli.message_format == MessageFormat::Json,
    );

    let options = ScanOptions {
        filter: DependencyFilter {
            exclude_std: cli.no_std || config.scan.no_std,
            exclude_external: cli.no_external || config.scan.no_external,
        },
        sort: cli.sort || config.scan.sort,
    };
    let lookup = GorootLookup::from_config(&config.toolchain);

    shell.verbose_status(Status::Scanning, format!("{} directories", dirs.len()));
    let report = scan_directories(&dirs, &options, &lookup);
    print_report(&shell, &report);

    // Partial results are still printed, but any failure fails the run
    Ok(if report.has_errors() { 1 } else { 0 })
}

/// Read directories one per line from stdin, unless stdin is a terminal.
fn read_dirs_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    let mut dirs = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read directories from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            dirs.push(PathBuf::from(line));
        }
    }
    Ok(dirs)
}
