//! Provider resolution - is anything alive behind a URI?
//!
//! Acquiring a provider handle is a cross-process affair for real
//! resolvers, so a handle held too long is a leak. The checker never holds
//! a raw handle: `ProviderGuard` releases it exactly once when dropped,
//! covering every exit path of the check.

use url::Url;

/// Resolves a URI's authority to a live provider, if one exists.
pub trait ProviderResolver: Send + Sync {
    /// Acquire a handle to the provider serving `uri`.
    ///
    /// `None` means no provider is registered for the URI's authority,
    /// which makes a card backed by that URI ineligible.
    fn acquire_provider(&self, uri: &Url) -> Option<Box<dyn ProviderHandle>>;
}

/// A live, acquired provider handle.
pub trait ProviderHandle: Send {
    /// Give the handle back. Called exactly once by `ProviderGuard`.
    fn release(&mut self);
}

/// Owning guard that releases its provider handle exactly once on drop.
pub struct ProviderGuard {
    handle: Box<dyn ProviderHandle>,
    released: bool,
}

impl ProviderGuard {
    /// Take ownership of an acquired handle.
    #[must_use]
    pub fn new(handle: Box<dyn ProviderHandle>) -> Self {
        Self {
            handle,
            released: false,
        }
    }
}

impl Drop for ProviderGuard {
    fn drop(&mut self) {
        if !self.released {
            self.released = true;
            self.handle.release();
        }
    }
}
