//! Scanning whole directories into packages.
//!
//! Directories are scanned one after another in the order given. A failure
//! in one directory is recorded and the next directory is scanned anyway,
//! so a single report can hold both packages and errors.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classify::{classify, DependencyFilter, StdLookup};
use crate::core::errors::ScanError;
use crate::core::package::Package;
use crate::core::source::Directory;
use crate::scan::{extract_imports, resolve_package_name};

/// Options for scanning.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Dependencies to leave out
    pub filter: DependencyFilter,
    /// Sort dependencies lexically instead of keeping first-seen order
    pub sort: bool,
}

/// A package together with the directory it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedPackage {
    pub dir: PathBuf,
    #[serde(flatten)]
    pub package: Package,
}

/// A directory that could not be turned into a package.
#[derive(Debug)]
pub struct FailedDirectory {
    pub dir: PathBuf,
    pub error: ScanError,
}

/// Outcome of scanning a list of directories.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// One entry per successfully scanned directory, in input order
    pub packages: Vec<ScannedPackage>,
    /// One entry per failed directory, in input order
    pub errors: Vec<FailedDirectory>,
}

impl ScanReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Total number of directories scanned.
    pub fn len(&self) -> usize {
        self.packages.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scan every directory in `dirs`, in order.
pub fn scan_directories<P: AsRef<Path>>(
    dirs: &[P],
    options: &ScanOptions,
    lookup: &dyn StdLookup,
) -> ScanReport {
    let mut report = ScanReport::default();

    for dir in dirs {
        let dir = dir.as_ref();
        match scan_directory(dir, options, lookup) {
            Ok(package) => report.packages.push(ScannedPackage {
                dir: dir.to_path_buf(),
                package,
            }),
            Err(error) => {
                tracing::debug!("skipping {}: {}", dir.display(), error);
                report.errors.push(FailedDirectory {
                    dir: dir.to_path_buf(),
                    error,
                });
            }
        }
    }

    report
}

/// Scan a single directory on disk.
pub fn scan_directory(
    dir: &Path,
    options: &ScanOptions,
    lookup: &dyn StdLookup,
) -> Result<Package, ScanError> {
    tracing::debug!("scanning {}", dir.display());
    let mut directory = Directory::open(dir)?;
    scan_opened_directory(&mut directory, options, lookup)
}

/// Scan a directory whose files are already open.
///
/// Resolves the package name, then extracts imports from every file,
/// keeping the first occurrence of each path, and finally applies the
/// dependency filter.
pub fn scan_opened_directory<R: BufRead>(
    directory: &mut Directory<R>,
    options: &ScanOptions,
    lookup: &dyn StdLookup,
) -> Result<Package, ScanError> {
    let name = resolve_package_name(directory)?;

    let mut seen = HashSet::new();
    let mut imports = Vec::new();
    for file in directory.files_mut() {
        for path in extract_imports(file)? {
            if seen.insert(path.clone()) {
                imports.push(path);
            }
        }
    }

    let mut dependencies = classify(&imports, options.filter, lookup);
    if options.sort {
        dependencies.sort();
    }

    tracing::debug!(
        "{}: package {} with {} of {} imports retained",
        directory.path().display(),
        name,
        dependencies.len(),
        imports.len()
    );

    Ok(Package::new(name, dependencies))
}
