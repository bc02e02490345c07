//! Eligibility: deciding which cards are safe to render.
//!
//! ## Key Types
//!
//! - `EligibilityChecker`: per-card pass/fail against the host's resource
//!   collaborators
//!
//! The verdict itself is just a `bool`; reasons are logged on failure and
//! discarded on success.

pub mod checker;

pub use checker::EligibilityChecker;
