//! In-memory provider resolver and resource binder.
//!
//! Reference implementations of the resource collaborators, used by
//! embedding applications serving fixed content and by tests that need to
//! script provider presence, binding outcomes, and hint states. The
//! resolver counts acquires and releases per authority so tests can assert
//! handles never leak.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use url::Url;

use super::binder::{ContentDescriptor, NegotiationSpec, ResourceBinder};
use super::provider::{ProviderHandle, ProviderResolver};

#[derive(Default)]
struct HandleCounters {
    acquired: AtomicUsize,
    released: AtomicUsize,
}

/// A provider resolver over a fixed set of registered authorities.
///
/// ## Example
///
/// ```
/// use contextual_cards::resource::{MemoryProviderResolver, ProviderResolver};
/// use url::Url;
///
/// let resolver = MemoryProviderResolver::new().with_authority("com.test.cards");
///
/// let known = Url::parse("content://com.test.cards/wifi").unwrap();
/// let unknown = Url::parse("content://com.other/wifi").unwrap();
/// assert!(resolver.acquire_provider(&known).is_some());
/// assert!(resolver.acquire_provider(&unknown).is_none());
/// ```
#[derive(Clone, Default)]
pub struct MemoryProviderResolver {
    providers: FxHashMap<String, Arc<HandleCounters>>,
}

impl MemoryProviderResolver {
    /// Create a resolver with no registered authorities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an authority (builder pattern).
    #[must_use]
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.register(authority);
        self
    }

    /// Register an authority.
    pub fn register(&mut self, authority: impl Into<String>) {
        self.providers
            .insert(authority.into(), Arc::new(HandleCounters::default()));
    }

    /// Handles acquired so far for an authority.
    #[must_use]
    pub fn acquired(&self, authority: &str) -> usize {
        self.providers
            .get(authority)
            .map_or(0, |c| c.acquired.load(Ordering::SeqCst))
    }

    /// Handles released so far for an authority.
    #[must_use]
    pub fn released(&self, authority: &str) -> usize {
        self.providers
            .get(authority)
            .map_or(0, |c| c.released.load(Ordering::SeqCst))
    }
}

impl ProviderResolver for MemoryProviderResolver {
    fn acquire_provider(&self, uri: &Url) -> Option<Box<dyn ProviderHandle>> {
        let authority = uri.host_str()?;
        let counters = self.providers.get(authority)?;

        counters.acquired.fetch_add(1, Ordering::SeqCst);
        Some(Box::new(MemoryProviderHandle {
            counters: Arc::clone(counters),
        }))
    }
}

struct MemoryProviderHandle {
    counters: Arc<HandleCounters>,
}

impl ProviderHandle for MemoryProviderHandle {
    fn release(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// A resource binder over a fixed URI -> descriptor map.
///
/// Negotiation is not modeled: a registered URI binds to its descriptor for
/// any non-empty spec set.
#[derive(Clone, Default)]
pub struct MemoryResourceBinder {
    entries: FxHashMap<Url, ContentDescriptor>,
}

impl MemoryResourceBinder {
    /// Create a binder with no content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bindable content (builder pattern).
    #[must_use]
    pub fn with_content(mut self, uri: Url, descriptor: ContentDescriptor) -> Self {
        self.register(uri, descriptor);
        self
    }

    /// Register bindable content.
    pub fn register(&mut self, uri: Url, descriptor: ContentDescriptor) {
        self.entries.insert(uri, descriptor);
    }
}

impl ResourceBinder for MemoryResourceBinder {
    fn bind(&self, uri: &Url, specs: &[NegotiationSpec]) -> Option<ContentDescriptor> {
        if specs.is_empty() {
            return None;
        }
        self.entries.get(uri).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::binder::{DescriptorHint, SUPPORTED_SPECS};
    use crate::resource::provider::ProviderGuard;

    fn uri(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_resolver_counts_acquire_release() {
        let resolver = MemoryProviderResolver::new().with_authority("com.test.cards");
        let target = uri("content://com.test.cards/wifi");

        {
            let handle = resolver.acquire_provider(&target).unwrap();
            let _guard = ProviderGuard::new(handle);
            assert_eq!(resolver.acquired("com.test.cards"), 1);
            assert_eq!(resolver.released("com.test.cards"), 0);
        }

        assert_eq!(resolver.released("com.test.cards"), 1);
    }

    #[test]
    fn test_resolver_unknown_authority() {
        let resolver = MemoryProviderResolver::new();
        assert!(resolver
            .acquire_provider(&uri("content://com.unknown/x"))
            .is_none());
    }

    #[test]
    fn test_binder_returns_registered_descriptor() {
        let target = uri("content://com.test.cards/wifi");
        let binder = MemoryResourceBinder::new().with_content(
            target.clone(),
            ContentDescriptor::new().with_hint(DescriptorHint::Error),
        );

        let descriptor = binder.bind(&target, SUPPORTED_SPECS).unwrap();
        assert!(descriptor.has_hint(DescriptorHint::Error));
    }

    #[test]
    fn test_binder_unknown_uri() {
        let binder = MemoryResourceBinder::new();
        assert!(binder
            .bind(&uri("content://com.test.cards/wifi"), SUPPORTED_SPECS)
            .is_none());
    }

    #[test]
    fn test_binder_requires_specs() {
        let target = uri("content://com.test.cards/wifi");
        let binder =
            MemoryResourceBinder::new().with_content(target.clone(), ContentDescriptor::new());

        assert!(binder.bind(&target, &[]).is_none());
    }
}
