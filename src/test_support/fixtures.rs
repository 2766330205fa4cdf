//! Fixtures for Go source trees.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::core::source::{Directory, SourceFile};

/// In-memory directory with one file per `(name, contents)` pair.
pub fn memory_dir(dir: &str, files: &[(&str, &str)]) -> Directory<Cursor<Vec<u8>>> {
    let dir = PathBuf::from(dir);
    let files = files
        .iter()
        .map(|(name, contents)| {
            SourceFile::from_reader(dir.join(name), Cursor::new(contents.as_bytes().to_vec()))
        })
        .collect();
    Directory::from_files(dir, files)
}

/// Write `dir/name`, creating `dir` if needed.
pub fn write_go_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Create a GOROOT under `base` whose `src` holds one directory per package.
pub fn fake_goroot(base: &Path, packages: &[&str]) -> PathBuf {
    let goroot = base.join("goroot");
    for pkg in packages {
        let dir = goroot.join("src").join(pkg);
        fs::create_dir_all(&dir).unwrap();
        let name = pkg.rsplit('/').next().unwrap_or(pkg);
        fs::write(dir.join(format!("{}.go", name)), format!("package {}\n", name)).unwrap();
    }
    goroot
}
