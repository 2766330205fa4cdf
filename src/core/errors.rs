//! Scan error types and diagnostics.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error while scanning a directory of Go sources.
///
/// Every variant is scoped to a single directory or a single file inside it.
/// The aggregator records these and moves on to the next directory.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ScanError {
    #[error("cannot read directory `{}`", dir.display())]
    #[diagnostic(code(wuw::scan::directory_unreadable))]
    DirectoryUnreadable {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no .go files in `{}`", dir.display())]
    #[diagnostic(
        code(wuw::scan::no_source_files),
        help("point wuw at a directory that directly contains .go files (sub-directories are not searched)")
    )]
    NoSourceFiles { dir: PathBuf },

    #[error("cannot open `{}`", path.display())]
    #[diagnostic(code(wuw::scan::file_open_failed))]
    FileOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed package line `{}` in `{}`", line.trim(), path.display())]
    #[diagnostic(
        code(wuw::scan::malformed_declaration),
        help("the first line of every file must be `package <name>`; run gofmt on the file")
    )]
    MalformedDeclaration { path: PathBuf, line: String },

    #[error("could not find a package in `{}`", dir.display())]
    #[diagnostic(code(wuw::scan::no_package_found))]
    NoPackageFound { dir: PathBuf },

    #[error("more than one package declaration in `{}`", dir.display())]
    #[diagnostic(
        code(wuw::scan::conflicting_packages),
        help("every .go file in a directory must declare the same package")
    )]
    ConflictingPackages {
        dir: PathBuf,
        /// (file, declared name) for every file in the directory
        declarations: Vec<(PathBuf, String)>,
    },

    #[error("failed to read `{}`", path.display())]
    #[diagnostic(code(wuw::scan::import_read_failed))]
    ImportReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed import line {line_number} in `{}`: `{}`", path.display(), line.trim())]
    #[diagnostic(
        code(wuw::scan::malformed_import_line),
        help("import paths must be quoted; run gofmt on the file")
    )]
    MalformedImportLine {
        path: PathBuf,
        line_number: usize,
        line: String,
    },
}

impl ScanError {
    /// Short, stable identifier of the error kind (used in JSON output).
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::DirectoryUnreadable { .. } => "directory_unreadable",
            ScanError::NoSourceFiles { .. } => "no_source_files",
            ScanError::FileOpenFailed { .. } => "file_open_failed",
            ScanError::MalformedDeclaration { .. } => "malformed_declaration",
            ScanError::NoPackageFound { .. } => "no_package_found",
            ScanError::ConflictingPackages { .. } => "conflicting_packages",
            ScanError::ImportReadFailed { .. } => "import_read_failed",
            ScanError::MalformedImportLine { .. } => "malformed_import_line",
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.to_string());

        match self {
            ScanError::DirectoryUnreadable { dir, source } => {
                diag = diag
                    .with_location(dir)
                    .with_context(source.to_string())
                    .with_suggestion(suggestions::CHECK_PATH);
            }

            ScanError::NoSourceFiles { dir } | ScanError::NoPackageFound { dir } => {
                diag = diag.with_location(dir);
            }

            ScanError::FileOpenFailed { path, source }
            | ScanError::ImportReadFailed { path, source } => {
                diag = diag
                    .with_location(path)
                    .with_context(source.to_string())
                    .with_suggestion(suggestions::CHECK_PERMISSIONS);
            }

            ScanError::MalformedDeclaration { path, .. }
            | ScanError::MalformedImportLine { path, .. } => {
                diag = diag
                    .with_location(path)
                    .with_suggestion(suggestions::RUN_GOFMT);
            }

            ScanError::ConflictingPackages { dir, declarations } => {
                diag = diag.with_location(dir);
                for (file, name) in declarations {
                    diag = diag.with_context(format!("{} declares `{}`", file.display(), name));
                }
            }
        }

        if let Some(help) = MietteDiagnostic::help(self) {
            diag = diag.with_suggestion(help.to_string());
        }

        diag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_packages_diagnostic() {
        let err = ScanError::ConflictingPackages {
            dir: PathBuf::from("pkg/widget"),
            declarations: vec![
                (PathBuf::from("pkg/widget/a.go"), "widget".to_string()),
                (PathBuf::from("pkg/widget/b.go"), "gadget".to_string()),
            ],
        };

        let output = err.to_diagnostic().format(false);

        assert!(output.contains("more than one package declaration"));
        assert!(output.contains("--> pkg/widget"));
        assert!(output.contains("pkg/widget/a.go declares `widget`"));
        assert!(output.contains("pkg/widget/b.go declares `gadget`"));
        assert!(output.contains("must declare the same package"));
    }

    #[test]
    fn test_malformed_import_diagnostic() {
        let err = ScanError::MalformedImportLine {
            path: PathBuf::from("main.go"),
            line_number: 3,
            line: "import \"fmt\n".to_string(),
        };

        let output = err.to_diagnostic().format(false);

        assert!(output.contains("malformed import line 3 in `main.go`: `import \"fmt`"));
        assert!(output.contains("gofmt"));
        assert_eq!(err.kind(), "malformed_import_line");
    }

    #[test]
    fn test_io_errors_keep_source() {
        let err = ScanError::DirectoryUnreadable {
            dir: PathBuf::from("missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };

        let output = err.to_diagnostic().format(false);
        assert!(output.contains("cannot read directory `missing`"));
        assert!(output.contains("no such directory"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
