//! Source files and the directories that hold them.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::errors::ScanError;
use crate::scan::lines::LineReader;

/// File extension of Go source files.
pub const SOURCE_EXTENSION: &str = "go";

/// One source file, opened for a single top-to-bottom pass.
#[derive(Debug)]
pub struct SourceFile<R = BufReader<File>> {
    path: PathBuf,
    lines: LineReader<R>,
}

impl SourceFile {
    /// Open a file on disk.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| ScanError::FileOpenFailed {
            path: path.clone(),
            source,
        })?;
        Ok(SourceFile::from_reader(path, BufReader::new(file)))
    }
}

impl<R: BufRead> SourceFile<R> {
    /// Wrap an already open reader; `path` is only used for reporting.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        SourceFile {
            path: path.into(),
            lines: LineReader::new(reader),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the next line, mapping I/O failures to [`ScanError::ImportReadFailed`].
    pub fn next_line(&mut self) -> Result<Option<String>, ScanError> {
        self.lines
            .next_line()
            .map_err(|source| ScanError::ImportReadFailed {
                path: self.path.clone(),
                source,
            })
    }

    /// Number of the line most recently read.
    pub fn line_number(&self) -> usize {
        self.lines.line_number()
    }
}

/// A directory and the source files directly inside it.
#[derive(Debug)]
pub struct Directory<R = BufReader<File>> {
    path: PathBuf,
    files: Vec<SourceFile<R>>,
}

impl Directory {
    /// List and open every source file directly inside `path`.
    ///
    /// Fails with [`ScanError::NoSourceFiles`] when there are none.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let path = path.into();
        let sources = find_source_files(&path)?;
        if sources.is_empty() {
            return Err(ScanError::NoSourceFiles { dir: path });
        }

        let files = sources
            .into_iter()
            .map(SourceFile::open)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Directory { path, files })
    }
}

impl<R: BufRead> Directory<R> {
    /// Build a directory from already opened files.
    pub fn from_files(path: impl Into<PathBuf>, files: Vec<SourceFile<R>>) -> Self {
        Directory {
            path: path.into(),
            files,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn files(&self) -> &[SourceFile<R>] {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut [SourceFile<R>] {
        &mut self.files
    }
}

/// Find the source files directly inside `dir`, sorted by file name.
///
/// Hidden entries and directories are skipped; sub-directories are not
/// searched.
pub fn find_source_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let unreadable = |source: io::Error| ScanError::DirectoryUnreadable {
        dir: dir.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(dir).map_err(unreadable)?;
    if !metadata.is_dir() {
        return Err(unreadable(io::Error::new(
            io::ErrorKind::Other,
            "not a directory",
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| unreadable(e.into()))?;

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.into_path();
        if path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            files.push(path);
        }
    }

    tracing::debug!("found {} source files in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_find_source_files_filters_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.go"), "package b\n").unwrap();
        fs::write(tmp.path().join("a.go"), "package b\n").unwrap();
        fs::write(tmp.path().join(".hidden.go"), "package b\n").unwrap();
        fs::write(tmp.path().join("README.md"), "# b\n").unwrap();
        fs::write(tmp.path().join("go.mod"), "module b\n").unwrap();
        fs::create_dir(tmp.path().join("sub.go")).unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("c.go"), "package c\n").unwrap();

        let files = find_source_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.go", "b.go"]);
    }

    #[test]
    fn test_find_source_files_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let err = find_source_files(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, ScanError::DirectoryUnreadable { .. }));
    }

    #[test]
    fn test_find_source_files_on_a_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("main.go");
        fs::write(&file, "package main\n").unwrap();

        let err = find_source_files(&file).unwrap_err();
        assert!(matches!(err, ScanError::DirectoryUnreadable { .. }));
    }

    #[test]
    fn test_open_directory_without_sources() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes.txt"), "nothing here").unwrap();

        let err = Directory::open(tmp.path()).unwrap_err();
        assert!(matches!(err, ScanError::NoSourceFiles { .. }));
    }

    #[test]
    fn test_source_file_reports_its_path() {
        let mut file = SourceFile::from_reader("pkg/a.go", Cursor::new("package a\n"));
        assert_eq!(file.path(), Path::new("pkg/a.go"));
        assert_eq!(file.next_line().unwrap().as_deref(), Some("package a"));
        assert_eq!(file.line_number(), 1);
        assert_eq!(file.next_line().unwrap(), None);
    }

    #[test]
    fn test_source_file_open_missing() {
        let tmp = TempDir::new().unwrap();
        let err = SourceFile::open(tmp.path().join("gone.go")).unwrap_err();
        assert!(matches!(err, ScanError::FileOpenFailed { .. }));
    }
}
