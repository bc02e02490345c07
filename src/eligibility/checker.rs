//! Per-card eligibility checks.
//!
//! A card is eligible when its backing resource is present, reachable, and
//! error-free. Custom cards have no backing resource and pass
//! unconditionally. Checks are stateless per invocation: the checker holds
//! only the shared host context it resolves resources through, and a
//! failing check affects no other card.

use std::sync::Arc;

use url::Url;

use crate::cards::{CardKind, CardRecord};
use crate::host::HostContext;
use crate::resource::{
    DescriptorHint, ProviderGuard, ProviderResolver, ResourceBinder, SCHEME_CONTENT,
    SUPPORTED_SPECS,
};

/// Decides, per card, whether it is safe to render.
#[derive(Clone)]
pub struct EligibilityChecker {
    context: Arc<HostContext>,
}

impl EligibilityChecker {
    /// Create a checker over the given host context.
    #[must_use]
    pub fn new(context: Arc<HostContext>) -> Self {
        Self { context }
    }

    /// Is this card safe to render?
    ///
    /// Resource-backed cards must pass, in order: the `content` scheme
    /// check, a live-provider check, and an error-free bind. The first
    /// failing check decides; later ones are not consulted.
    #[must_use]
    pub fn is_eligible(&self, card: &CardRecord) -> bool {
        match card.kind() {
            CardKind::Custom { .. } => true,
            CardKind::ResourceBacked { uri } => self.resource_eligible(uri),
        }
    }

    fn resource_eligible(&self, uri: &Url) -> bool {
        if uri.scheme() != SCHEME_CONTENT {
            log::debug!("non-content scheme '{}', not eligible: {uri}", uri.scheme());
            return false;
        }

        // The provider handle is a cross-process resource; release it as
        // soon as the liveness check is done.
        match self.context.providers().acquire_provider(uri) {
            Some(handle) => drop(ProviderGuard::new(handle)),
            None => {
                log::warn!("no provider serves {uri}, not eligible for display");
                return false;
            }
        }

        match self.context.binder().bind(uri, SUPPORTED_SPECS) {
            Some(descriptor) if !descriptor.has_hint(DescriptorHint::Error) => true,
            Some(_) | None => {
                log::warn!("failed to bind content, not eligible for display: {uri}");
                false
            }
        }
    }
}
