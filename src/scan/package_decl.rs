//! Package declaration resolution.

use std::io::BufRead;
use std::path::PathBuf;

use crate::core::errors::ScanError;
use crate::core::package::PackageName;
use crate::core::source::{Directory, SourceFile};

/// Keyword that opens a package declaration.
const PACKAGE_KEYWORD: &str = "package";

/// Read the package line of every file in `dir` and return the name they share.
///
/// Consumes exactly the first line of each file, leaving the cursors
/// positioned for import extraction.
pub fn resolve_package_name<R: BufRead>(dir: &mut Directory<R>) -> Result<PackageName, ScanError> {
    let mut shared: Option<PackageName> = None;
    let mut conflict = false;
    let mut declarations: Vec<(PathBuf, String)> = Vec::new();

    for file in dir.files_mut() {
        let name = read_package_line(file)?;
        if shared.is_none() {
            shared = Some(name.clone());
        } else if shared.as_ref() != Some(&name) {
            conflict = true;
        }
        declarations.push((file.path().to_path_buf(), name.to_string()));
    }

    if conflict {
        return Err(ScanError::ConflictingPackages {
            dir: dir.path().to_path_buf(),
            declarations,
        });
    }

    shared.ok_or_else(|| ScanError::NoPackageFound {
        dir: dir.path().to_path_buf(),
    })
}

/// Parse the first line of `file` as `package <identifier>`.
pub fn read_package_line<R: BufRead>(file: &mut SourceFile<R>) -> Result<PackageName, ScanError> {
    let line = file.next_line()?.unwrap_or_default();

    let fields: Vec<&str> = line.split_whitespace().collect();
    let name = match fields.as_slice() {
        [keyword, name] if *keyword == PACKAGE_KEYWORD => PackageName::new(*name),
        _ => None,
    };

    let name = name.ok_or_else(|| ScanError::MalformedDeclaration {
        path: file.path().to_path_buf(),
        line,
    })?;

    tracing::debug!("{}: package {}", file.path().display(), name);
    Ok(name)
}
