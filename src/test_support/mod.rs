//! Test utilities and fakes for wuw unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::test_support::{memory_dir, FakeStdLookup};
//!
//! #[test]
//! fn test_example() {
//!     let mut dir = memory_dir("pkg", &[("a.go", "package pkg\nimport \"os\"\n")]);
//!     let lookup = FakeStdLookup::with_std(&["os"]);
//!     // Scan `dir` with `lookup`...
//! }
//! ```

pub mod fixtures;

use std::collections::HashSet;
use std::io::{self, BufReader, Cursor, Read};

use anyhow::{bail, Result};

use crate::classify::StdLookup;

pub use fixtures::*;

/// Standard-package lookup backed by a fixed set of paths.
#[derive(Debug, Clone, Default)]
pub struct FakeStdLookup {
    std: HashSet<String>,
    fail: bool,
}

impl FakeStdLookup {
    /// A lookup that knows exactly `paths` as standard.
    pub fn with_std(paths: &[&str]) -> Self {
        FakeStdLookup {
            std: paths.iter().map(|p| p.to_string()).collect(),
            fail: false,
        }
    }

    /// A lookup that can never answer.
    pub fn failing() -> Self {
        FakeStdLookup {
            std: HashSet::new(),
            fail: true,
        }
    }
}

impl StdLookup for FakeStdLookup {
    fn is_standard(&self, path: &str) -> Result<bool> {
        if self.fail {
            bail!("lookup unavailable for `{}`", path);
        }
        Ok(self.std.contains(path))
    }
}

/// Reader that yields its data and then fails every further read.
#[derive(Debug)]
pub struct FailingReader {
    data: Cursor<Vec<u8>>,
}

impl FailingReader {
    /// Buffered reader over `data` that errors once `data` is used up.
    pub fn after(data: &str) -> BufReader<FailingReader> {
        BufReader::new(FailingReader {
            data: Cursor::new(data.as_bytes().to_vec()),
        })
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::Other, "simulated read failure")),
            n => Ok(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufRead;

    #[test]
    fn test_fake_lookup() {
        let lookup = FakeStdLookup::with_std(&["fmt"]);
        assert!(lookup.is_standard("fmt").unwrap());
        assert!(!lookup.is_standard("github.com/a/b").unwrap());
        assert!(FakeStdLookup::failing().is_standard("fmt").is_err());
    }

    #[test]
    fn test_failing_reader() {
        let mut reader = FailingReader::after("one\n");
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "one\n");
        line.clear();
        assert!(reader.read_line(&mut line).is_err());
    }
}
