//! Standard-library classification of import paths.
//!
//! Whether a path is standard is answered by a [`StdLookup`]. The real
//! implementation, [`GorootLookup`], checks the local Go installation; tests
//! substitute a fake.

pub mod goroot;

pub use goroot::GorootLookup;

use anyhow::Result;

/// Namespace shipped alongside the standard library and treated as part of it.
pub const EXTENDED_STD_PREFIX: &str = "golang.org/x/";

/// Answers whether an import path belongs to the root Go installation.
pub trait StdLookup {
    /// `Ok(true)` if `path` is a standard package, `Ok(false)` if it is not,
    /// `Err` if the question cannot be answered.
    fn is_standard(&self, path: &str) -> Result<bool>;
}

/// Which dependencies to leave out of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DependencyFilter {
    /// Drop standard packages, including [`EXTENDED_STD_PREFIX`].
    pub exclude_std: bool,
    /// Drop everything that is not standard.
    pub exclude_external: bool,
}

impl DependencyFilter {
    /// Check whether this filter keeps everything without consulting a lookup.
    pub fn is_noop(&self) -> bool {
        !self.exclude_std && !self.exclude_external
    }
}

/// Decide whether `path` is part of the standard distribution.
///
/// Lookup failures count as "not standard", so an unresolvable path is
/// never dropped by `exclude_std`.
pub fn is_standard(path: &str, lookup: &dyn StdLookup) -> bool {
    if path.starts_with(EXTENDED_STD_PREFIX) {
        return true;
    }

    match lookup.is_standard(path) {
        Ok(standard) => standard,
        Err(e) => {
            tracing::debug!("cannot classify `{}`, keeping it as external: {:#}", path, e);
            false
        }
    }
}

/// Apply `filter` to `deps`, preserving their order.
pub fn classify(deps: &[String], filter: DependencyFilter, lookup: &dyn StdLookup) -> Vec<String> {
    if filter.is_noop() {
        return deps.to_vec();
    }

    deps.iter()
        .filter(|dep| {
            let standard = is_standard(dep, lookup);
            if standard {
                !filter.exclude_std
            } else {
                !filter.exclude_external
            }
        })
        .cloned()
        .collect()
}
