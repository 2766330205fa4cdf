//! Package - the result of scanning one directory.
//!
//! A Package pairs the package name every file in a directory agreed on
//! with the deduplicated set of import paths those files declare.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Name declared by a `package <name>` line.
///
/// Always a single Go identifier: a letter or underscore followed by
/// letters, digits or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    /// Validate `name` as an identifier token.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if is_identifier(&name) {
            Some(PackageName(name))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PackageName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackageName::new(s).ok_or_else(|| format!("`{}` is not a valid package name", s))
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// A scanned package: its name and the import paths it depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    name: PackageName,
    dependencies: Vec<String>,
}

impl Package {
    /// Create a new package.
    pub fn new(name: PackageName, dependencies: Vec<String>) -> Self {
        Package { name, dependencies }
    }

    /// Get the package name.
    pub fn name(&self) -> &PackageName {
        &self.name
    }

    /// Get the retained import paths, deduplicated.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Check whether the package depends on `path`.
    pub fn depends_on(&self, path: &str) -> bool {
        self.dependencies.iter().any(|d| d == path)
    }
}
