//! # contextual-cards
//!
//! A contextual-card acquisition and eligibility-filtering pipeline.
//!
//! ## Design Principles
//!
//! 1. **Collaborators Are Seams**: The candidate source, provider resolver,
//!    resource binder, and package table are traits. Hosts plug in real
//!    implementations; the crate ships in-memory ones.
//!
//! 2. **Failures Stay Local**: A bad row, a dead provider, or a failed bind
//!    costs exactly one card. Nothing short of a source failure aborts a
//!    load, and the background layer contains even that.
//!
//! 3. **Handles Never Leak**: Source cursors and provider handles are
//!    scoped behind guard types that release them on every exit path.
//!
//! ## Architecture
//!
//! - **Fallback, Then Filter**: An empty dynamic source yields the fixed
//!   static catalog; whatever the origin, every candidate passes through
//!   the eligibility checker, in order, before display.
//!
//! - **Supersede-and-Discard Delivery**: Loads run on background workers.
//!   Only the latest started load may deliver; stale results go to a
//!   dedicated discard hook, never to the listener.
//!
//! ## Modules
//!
//! - `cards`: Card records and the static fallback catalog
//! - `source`: Dynamic candidate source, rows, scoped cursors
//! - `resource`: Provider resolution and content binding
//! - `host`: Host identity, package lookup, the shared context
//! - `eligibility`: Per-card safety checks
//! - `loader`: The load pipeline and background delivery
//! - `error`: Contained failure types

pub mod cards;
pub mod eligibility;
pub mod error;
pub mod host;
pub mod loader;
pub mod resource;
pub mod source;

// Re-export commonly used types
pub use crate::cards::{
    CardKind, CardRecord, StaticCardCatalog, PATH_BATTERY, PATH_DATA_USAGE, PATH_DEVICE_INFO,
    STATIC_CARD_COUNT,
};

pub use crate::source::{
    CardCursor, CardRow, CardSource, CursorGuard, MemoryCardSource, CARD_TYPE_CUSTOM,
    CARD_TYPE_RESOURCE_BACKED,
};

pub use crate::resource::{
    ContentDescriptor, DescriptorHint, MemoryProviderResolver, MemoryResourceBinder,
    NegotiationSpec, ProviderGuard, ProviderHandle, ProviderResolver, ResourceBinder,
    SCHEME_CONTENT, SUPPORTED_SPECS,
};

pub use crate::host::{HostContext, MemoryPackageSource, PackageInfoSource};

pub use crate::eligibility::EligibilityChecker;

pub use crate::loader::{BackgroundLoader, CardLoadListener, CardLoader, LoadHandle};

pub use crate::error::{PackageLookupError, RowError, SourceError};
