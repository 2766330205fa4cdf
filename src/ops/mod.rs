//! High-level operations.
//!
//! This module contains what the `wuw` binary runs: scanning directories
//! and printing the results.

pub mod report;
pub mod scan_dirs;

pub use report::{format_package_line, print_report};
pub use scan_dirs::{
    scan_directories, scan_directory, scan_opened_directory, FailedDirectory, ScanOptions,
    ScanReport, ScannedPackage,
};
