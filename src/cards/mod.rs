//! Card data types: records and the static fallback catalog.
//!
//! ## Key Types
//!
//! - `CardRecord`: immutable descriptor of one displayable card
//! - `CardKind`: what backs a card (external resource vs. custom)
//! - `StaticCardCatalog`: fixed fallback set for empty sources
//!
//! Records are leaf values: the loader produces them, the eligibility
//! checker reads them, nothing mutates them.

pub mod catalog;
pub mod record;

pub use catalog::{
    StaticCardCatalog, PATH_BATTERY, PATH_DATA_USAGE, PATH_DEVICE_INFO, STATIC_CARD_COUNT,
};
pub use record::{CardKind, CardRecord};
