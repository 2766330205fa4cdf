//! wuw - what uses what
//!
//! Reports, for each directory of a Go project, the package it declares and
//! the packages it imports. Declarations are recognized from gofmt's
//! canonical layout instead of by parsing Go, which keeps scanning fast
//! enough to run over a whole codebase.

pub mod classify;
pub mod core;
pub mod ops;
pub mod scan;
pub mod util;

/// Test utilities and fakes for wuw unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests.
#[cfg(test)]
pub mod test_support;

pub use classify::{DependencyFilter, GorootLookup, StdLookup};
pub use core::{Directory, Package, PackageName, ScanError, SourceFile};
pub use ops::{scan_directories, ScanOptions, ScanReport};
