//! Scoped cursors over the dynamic candidate source.
//!
//! A cursor is a forward-only iteration handle that may hold an external
//! resource (a connection, a cross-process handle) until closed. The loader
//! never touches a raw cursor: it wraps every cursor in a `CursorGuard`,
//! which closes it exactly once on drop, so release happens on every exit
//! path - empty result, full iteration, or an error mid-step.

use crate::error::SourceError;

use super::row::CardRow;

/// The dynamic candidate source.
///
/// Implementations own whatever backing store holds candidate rows and hand
/// out one cursor per query.
pub trait CardSource: Send + Sync {
    /// Open a cursor over the current candidate set.
    fn query(&self) -> Result<Box<dyn CardCursor>, SourceError>;
}

/// Forward-only iteration over queried rows.
pub trait CardCursor: Send {
    /// Total number of rows this cursor will yield.
    fn count(&self) -> usize;

    /// Advance and return the next row, or `None` after the last one.
    fn step(&mut self) -> Result<Option<CardRow>, SourceError>;

    /// Release the cursor's backing resources.
    ///
    /// Called exactly once by `CursorGuard`; implementations need not be
    /// re-entrant.
    fn close(&mut self);
}

/// Owning guard that closes its cursor exactly once on drop.
pub struct CursorGuard {
    cursor: Box<dyn CardCursor>,
    closed: bool,
}

impl CursorGuard {
    /// Take ownership of a cursor.
    #[must_use]
    pub fn new(cursor: Box<dyn CardCursor>) -> Self {
        Self {
            cursor,
            closed: false,
        }
    }

    /// Row count of the underlying cursor.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cursor.count()
    }

    /// Step the underlying cursor.
    pub fn step(&mut self) -> Result<Option<CardRow>, SourceError> {
        self.cursor.step()
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        if !self.closed {
            self.closed = true;
            self.cursor.close();
        }
    }
}
