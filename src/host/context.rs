//! Shared host context.
//!
//! `HostContext` bundles the host identity and the four external
//! collaborators the pipeline consults: the candidate source, the provider
//! resolver, the resource binder, and the package table. The loader and the
//! eligibility checker share one context (via `Arc`); neither owns any
//! collaborator state of its own.

use crate::host::package::{MemoryPackageSource, PackageInfoSource};
use crate::resource::{
    MemoryProviderResolver, MemoryResourceBinder, ProviderResolver, ResourceBinder,
};
use crate::source::{CardSource, MemoryCardSource};

/// Host identity plus external collaborators.
///
/// Defaults to empty in-memory collaborators; swap in real ones with the
/// `with_*` setters.
///
/// ## Example
///
/// ```
/// use contextual_cards::host::HostContext;
/// use contextual_cards::source::{CardRow, MemoryCardSource};
///
/// let context = HostContext::new("com.example.host")
///     .with_source(MemoryCardSource::new(vec![
///         CardRow::resource_backed("content://com.example.host.cards/wifi", "wifi", "com.example.host"),
///     ]));
///
/// assert_eq!(context.package_name(), "com.example.host");
/// ```
pub struct HostContext {
    /// The host application's own package name.
    package_name: String,

    /// Dynamic candidate source.
    source: Box<dyn CardSource>,

    /// Provider resolver for eligibility checks.
    providers: Box<dyn ProviderResolver>,

    /// Resource binder for eligibility checks.
    binder: Box<dyn ResourceBinder>,

    /// Package version table.
    packages: Box<dyn PackageInfoSource>,
}

impl HostContext {
    /// Create a context with empty in-memory collaborators.
    #[must_use]
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            source: Box::new(MemoryCardSource::empty()),
            providers: Box::new(MemoryProviderResolver::new()),
            binder: Box::new(MemoryResourceBinder::new()),
            packages: Box::new(MemoryPackageSource::new()),
        }
    }

    /// Set the candidate source (builder pattern).
    #[must_use]
    pub fn with_source<S: CardSource + 'static>(mut self, source: S) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Set the provider resolver (builder pattern).
    #[must_use]
    pub fn with_providers<P: ProviderResolver + 'static>(mut self, providers: P) -> Self {
        self.providers = Box::new(providers);
        self
    }

    /// Set the resource binder (builder pattern).
    #[must_use]
    pub fn with_binder<B: ResourceBinder + 'static>(mut self, binder: B) -> Self {
        self.binder = Box::new(binder);
        self
    }

    /// Set the package table (builder pattern).
    #[must_use]
    pub fn with_packages<P: PackageInfoSource + 'static>(mut self, packages: P) -> Self {
        self.packages = Box::new(packages);
        self
    }

    /// The host application's package name.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// The dynamic candidate source.
    #[must_use]
    pub fn source(&self) -> &dyn CardSource {
        self.source.as_ref()
    }

    /// The provider resolver.
    #[must_use]
    pub fn providers(&self) -> &dyn ProviderResolver {
        self.providers.as_ref()
    }

    /// The resource binder.
    #[must_use]
    pub fn binder(&self) -> &dyn ResourceBinder {
        self.binder.as_ref()
    }

    /// The package table.
    #[must_use]
    pub fn packages(&self) -> &dyn PackageInfoSource {
        self.packages.as_ref()
    }
}
