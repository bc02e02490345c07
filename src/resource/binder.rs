//! Resource binding - resolving a URI into displayable content.
//!
//! Binding negotiates a content format with the provider: the caller offers
//! the specs it can render, the provider answers with a descriptor (or
//! nothing). A descriptor can still carry hints - notably the error hint,
//! which marks content that resolved but must not be displayed.

use smallvec::SmallVec;
use url::Url;

/// One content format the caller can render, as a name/revision pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NegotiationSpec {
    /// Format name.
    pub name: &'static str,

    /// Format revision. Providers may answer with any revision <= this.
    pub revision: u32,
}

impl NegotiationSpec {
    /// Create a spec.
    #[must_use]
    pub const fn new(name: &'static str, revision: u32) -> Self {
        Self { name, revision }
    }
}

/// The fixed set of content formats this crate negotiates with.
///
/// Every bind uses this set; there is no per-card negotiation.
pub const SUPPORTED_SPECS: &[NegotiationSpec] = &[
    NegotiationSpec::new("cards/basic", 1),
    NegotiationSpec::new("cards/list", 1),
];

/// Hints a bound descriptor may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptorHint {
    /// The content resolved but is in an error state; do not display.
    Error,

    /// The content is still being produced; a later bind may complete it.
    Partial,
}

/// Result of binding a URI: a handle on resolved content plus its hints.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentDescriptor {
    hints: SmallVec<[DescriptorHint; 2]>,
}

impl ContentDescriptor {
    /// A descriptor with no hints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hint (builder pattern).
    #[must_use]
    pub fn with_hint(mut self, hint: DescriptorHint) -> Self {
        if !self.hints.contains(&hint) {
            self.hints.push(hint);
        }
        self
    }

    /// Does the descriptor carry the given hint?
    #[must_use]
    pub fn has_hint(&self, hint: DescriptorHint) -> bool {
        self.hints.contains(&hint)
    }
}

/// Resolves a URI into a content descriptor.
pub trait ResourceBinder: Send + Sync {
    /// Bind `uri` using the offered negotiation specs.
    ///
    /// `None` means the provider could not produce content for any offered
    /// spec; a card backed by that URI is ineligible.
    fn bind(&self, uri: &Url, specs: &[NegotiationSpec]) -> Option<ContentDescriptor>;
}
