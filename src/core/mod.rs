//! Core data structures for wuw.
//!
//! - Packages and package names
//! - Source files and the directories holding them
//! - Scan errors

pub mod errors;
pub mod package;
pub mod source;

pub use errors::ScanError;
pub use package::{Package, PackageName};
pub use source::{find_source_files, Directory, SourceFile, SOURCE_EXTENSION};
