//! Dynamic candidate source: rows, cursors, and the in-memory source.
//!
//! ## Key Types
//!
//! - `CardSource`: trait the loader queries for candidates
//! - `CardCursor`: forward-only iteration over queried rows
//! - `CursorGuard`: closes a cursor exactly once, on every exit path
//! - `CardRow`: one raw row in the defined column layout
//! - `MemoryCardSource`: `Vec`-backed source for embedding and tests

pub mod cursor;
pub mod memory;
pub mod row;

pub use cursor::{CardCursor, CardSource, CursorGuard};
pub use memory::MemoryCardSource;
pub use row::{CardRow, CARD_TYPE_CUSTOM, CARD_TYPE_RESOURCE_BACKED};
