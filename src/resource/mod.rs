//! Resource collaborators: provider resolution and content binding.
//!
//! ## Key Types
//!
//! - `ProviderResolver` / `ProviderHandle` / `ProviderGuard`: is a live
//!   provider serving a URI, with leak-proof handle release
//! - `ResourceBinder` / `ContentDescriptor`: resolve a URI into content,
//!   with hint flags (notably the error hint)
//! - `NegotiationSpec` / `SUPPORTED_SPECS`: the fixed format set offered on
//!   every bind
//! - `MemoryProviderResolver` / `MemoryResourceBinder`: in-memory
//!   implementations for embedding and tests

pub mod binder;
pub mod memory;
pub mod provider;

pub use binder::{
    ContentDescriptor, DescriptorHint, NegotiationSpec, ResourceBinder, SUPPORTED_SPECS,
};
pub use memory::{MemoryProviderResolver, MemoryResourceBinder};
pub use provider::{ProviderGuard, ProviderHandle, ProviderResolver};

/// URI scheme of content-addressable resources. Cards backed by any other
/// scheme are never eligible.
pub const SCHEME_CONTENT: &str = "content";
