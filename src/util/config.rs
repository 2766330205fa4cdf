//! Configuration file support for wuw.
//!
//! wuw reads two optional configuration files:
//! - Global: `~/.wuw/config.toml` - User-wide defaults
//! - Project: `.wuw/config.toml` - Overrides for the current directory
//!
//! Project config takes precedence over global config. Command-line flags
//! can switch a filter on even when the config leaves it off.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// wuw configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan settings
    pub scan: ScanConfig,

    /// Go toolchain settings
    pub toolchain: ToolchainConfig,
}

/// Defaults for the scan flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Exclude standard library packages (same as `--no-std`)
    pub no_std: bool,

    /// Exclude non-standard packages (same as `--no-external`)
    pub no_external: bool,

    /// Sort dependencies instead of keeping first-seen order (same as `--sort`)
    pub sort: bool,
}

/// Where to find the Go installation used to classify imports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Path to the `go` binary queried with `go env GOROOT`
    pub go: Option<PathBuf>,

    /// Explicit GOROOT; when set, `go` is never run
    pub goroot: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.scan.no_std {
            self.scan.no_std = true;
        }
        if other.scan.no_external {
            self.scan.no_external = true;
        }
        if other.scan.sort {
            self.scan.sort = true;
        }

        if other.toolchain.go.is_some() {
            self.toolchain.go = other.toolchain.go;
        }
        if other.toolchain.goroot.is_some() {
            self.toolchain.goroot = other.toolchain.goroot;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.wuw/config.toml)
/// 2. Global config (~/.wuw/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global wuw config directory (~/.wuw).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".wuw"))
}

/// Get the global config path (~/.wuw/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.wuw/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".wuw").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.scan.no_std);
        assert!(!config.scan.no_external);
        assert!(!config.scan.sort);
        assert!(config.toolchain.go.is_none());
        assert!(config.toolchain.goroot.is_none());
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(
            &config_path,
            r#"
[scan]
no_std = true
sort = true

[toolchain]
go = "/usr/local/go/bin/go"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert!(config.scan.no_std);
        assert!(!config.scan.no_external);
        assert!(config.scan.sort);
        assert_eq!(
            config.toolchain.go,
            Some(PathBuf::from("/usr/local/go/bin/go"))
        );
        assert!(config.toolchain.goroot.is_none());
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(&config_path, "[scan]\nno_std = \"maybe\"\n").unwrap();

        assert!(Config::load(&config_path).is_err());
        assert!(!Config::load_or_default(&config_path).scan.no_std);
    }

    #[test]
    fn test_config_merge() {
        let mut base = Config::default();
        base.scan.no_std = true;
        base.toolchain.go = Some(PathBuf::from("/usr/bin/go"));
        base.toolchain.goroot = Some(PathBuf::from("/usr/lib/go"));

        let mut override_cfg = Config::default();
        override_cfg.toolchain.goroot = Some(PathBuf::from("/opt/go"));

        base.merge(override_cfg);

        assert!(base.scan.no_std); // Not overridden
        assert_eq!(base.toolchain.go, Some(PathBuf::from("/usr/bin/go")));
        assert_eq!(base.toolchain.goroot, Some(PathBuf::from("/opt/go")));
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_root = tmp.path().join("project");
        let project_path = project_config_path(&project_root);
        std::fs::create_dir_all(project_path.parent().unwrap()).unwrap();

        std::fs::write(
            &global_path,
            r#"
[scan]
no_external = true

[toolchain]
go = "/usr/bin/go"
goroot = "/usr/lib/go"
"#,
        )
        .unwrap();

        std::fs::write(
            &project_path,
            r#"
[toolchain]
goroot = "/home/me/sdk/go1.22"
"#,
        )
        .unwrap();

        let config = load_config(Some(&global_path), &project_path);

        assert!(config.scan.no_external);
        assert_eq!(config.toolchain.go, Some(PathBuf::from("/usr/bin/go")));
        assert_eq!(
            config.toolchain.goroot,
            Some(PathBuf::from("/home/me/sdk/go1.22"))
        );
    }

    #[test]
    fn test_load_config_without_files() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, &project_config_path(tmp.path()));
        assert!(!config.scan.no_std);
    }
}
