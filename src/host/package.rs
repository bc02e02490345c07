//! Package metadata lookup.
//!
//! The loader stamps fallback cards with the host application's own version
//! code. Lookup failure is survivable: the loader logs it and substitutes
//! -1, so downstream code never special-cases a missing version.

use rustc_hash::FxHashMap;

use crate::error::PackageLookupError;

/// Resolves an installed package's version code.
pub trait PackageInfoSource: Send + Sync {
    /// Version code of `package`, or `NotFound` if it is not installed.
    fn version_code(&self, package: &str) -> Result<i64, PackageLookupError>;
}

/// An in-memory package table.
#[derive(Clone, Default)]
pub struct MemoryPackageSource {
    versions: FxHashMap<String, i64>,
}

impl MemoryPackageSource {
    /// Create an empty package table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package version (builder pattern).
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>, version: i64) -> Self {
        self.register(package, version);
        self
    }

    /// Register a package version.
    pub fn register(&mut self, package: impl Into<String>, version: i64) {
        self.versions.insert(package.into(), version);
    }
}

impl PackageInfoSource for MemoryPackageSource {
    fn version_code(&self, package: &str) -> Result<i64, PackageLookupError> {
        self.versions
            .get(package)
            .copied()
            .ok_or_else(|| PackageLookupError::NotFound(package.to_string()))
    }
}
