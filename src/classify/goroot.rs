//! Standard-package lookup against the local Go installation.
//!
//! A path is standard when `$GOROOT/src/<path>` is a directory, which is the
//! same answer `go/build` gives for a find-only import. GOROOT is taken from,
//! in order:
//! 1. An explicit path (`toolchain.goroot` in the config)
//! 2. The `GOROOT` environment variable
//! 3. `go env GOROOT`, using `toolchain.go` or the first `go` on PATH

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};

use super::StdLookup;
use crate::util::config::ToolchainConfig;
use crate::util::diagnostic::suggestions;
use crate::util::process::{find_executable, ProcessBuilder};

/// Looks import paths up under `$GOROOT/src`.
///
/// GOROOT is resolved on first use and remembered for the lifetime of the
/// lookup.
#[derive(Debug, Default)]
pub struct GorootLookup {
    goroot: Option<PathBuf>,
    go: Option<PathBuf>,
    resolved: OnceCell<Option<PathBuf>>,
}

impl GorootLookup {
    /// Create a lookup that discovers GOROOT from the environment.
    pub fn new() -> Self {
        GorootLookup::default()
    }

    /// Create a lookup honouring the toolchain section of the config.
    pub fn from_config(config: &ToolchainConfig) -> Self {
        GorootLookup {
            goroot: config.goroot.clone(),
            go: config.go.clone(),
            resolved: OnceCell::new(),
        }
    }

    /// Use `goroot` instead of discovering it.
    pub fn with_goroot(mut self, goroot: impl Into<PathBuf>) -> Self {
        self.goroot = Some(goroot.into());
        self
    }

    /// Ask this `go` binary for GOROOT instead of searching PATH.
    pub fn with_go(mut self, go: impl Into<PathBuf>) -> Self {
        self.go = Some(go.into());
        self
    }

    /// The GOROOT in use, or `None` if it could not be determined.
    pub fn goroot(&self) -> Option<&Path> {
        self.resolved.get_or_init(|| self.resolve()).as_deref()
    }

    fn resolve(&self) -> Option<PathBuf> {
        if let Some(ref goroot) = self.goroot {
            tracing::debug!("using configured GOROOT {}", goroot.display());
            return Some(goroot.clone());
        }

        if let Some(goroot) = std::env::var_os("GOROOT").filter(|v| !v.is_empty()) {
            let goroot = PathBuf::from(goroot);
            tracing::debug!("using GOROOT from environment: {}", goroot.display());
            return Some(goroot);
        }

        match self.query_go() {
            Ok(goroot) => {
                tracing::debug!("using GOROOT reported by go: {}", goroot.display());
                Some(goroot)
            }
            Err(e) => {
                tracing::warn!(
                    "cannot locate the Go standard library, standard packages will be reported as external: {:#}",
                    e
                );
                tracing::warn!("{}", suggestions::SET_GOROOT);
                None
            }
        }
    }

    fn query_go(&self) -> Result<PathBuf> {
        let go = match self.go {
            Some(ref go) => go.clone(),
            None => find_executable("go").context("`go` was not found on PATH")?,
        };

        let output = ProcessBuilder::new(&go)
            .args(["env", "GOROOT"])
            .exec_and_check()?;

        let goroot = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if goroot.is_empty() {
            bail!("`{} env GOROOT` printed nothing", go.display());
        }
        Ok(PathBuf::from(goroot))
    }
}

impl StdLookup for GorootLookup {
    fn is_standard(&self, path: &str) -> Result<bool> {
        if !is_plain_import_path(path) {
            bail!("`{}` is not a plain import path", path);
        }

        let goroot = self.goroot().ok_or_else(|| anyhow!("GOROOT is unknown"))?;
        Ok(goroot.join("src").join(path).is_dir())
    }
}

/// Slash-separated, relative, with no empty, `.` or `..` segments.
fn is_plain_import_path(path: &str) -> bool {
    !path.is_empty()
        && !path.contains('\\')
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fake_goroot;
    use tempfile::TempDir;

    #[test]
    fn test_lookup_under_goroot() {
        let tmp = TempDir::new().unwrap();
        let goroot = fake_goroot(tmp.path(), &["fmt", "net/http", "os"]);
        let lookup = GorootLookup::new().with_goroot(&goroot);

        assert!(lookup.is_standard("fmt").unwrap());
        assert!(lookup.is_standard("net/http").unwrap());
        assert!(lookup.is_standard("net").unwrap());
        assert!(!lookup.is_standard("github.com/acme/widget").unwrap());
        assert!(!lookup.is_standard("golang.org/x/tools").unwrap());
        assert_eq!(lookup.goroot(), Some(goroot.as_path()));
    }

    #[test]
    fn test_rejects_non_plain_paths() {
        let tmp = TempDir::new().unwrap();
        let goroot = fake_goroot(tmp.path(), &["fmt"]);
        let lookup = GorootLookup::new().with_goroot(goroot);

        assert!(lookup.is_standard("../fmt").is_err());
        assert!(lookup.is_standard("./fmt").is_err());
        assert!(lookup.is_standard("/fmt").is_err());
        assert!(lookup.is_standard("").is_err());
    }

    #[test]
    fn test_missing_go_binary_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let lookup = GorootLookup::new().with_go(tmp.path().join("no-such-go"));

        assert!(lookup.query_go().is_err());
    }

    #[test]
    fn test_from_config() {
        let config = ToolchainConfig {
            go: None,
            goroot: Some(PathBuf::from("/opt/go")),
        };
        let lookup = GorootLookup::from_config(&config);
        assert_eq!(lookup.goroot(), Some(Path::new("/opt/go")));
    }

    #[test]
    fn test_plain_import_paths() {
        assert!(is_plain_import_path("fmt"));
        assert!(is_plain_import_path("github.com/acme/widget/v2"));
        assert!(!is_plain_import_path("a//b"));
        assert!(!is_plain_import_path("a/"));
        assert!(!is_plain_import_path("a\\b"));
    }
}
