//! In-memory candidate source.
//!
//! `MemoryCardSource` serves rows straight from a `Vec`. Embedding
//! applications use it to feed a fixed candidate set without standing up a
//! real store; tests use it to script source behavior, including failure
//! injection and close accounting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::SourceError;

use super::cursor::{CardCursor, CardSource};
use super::row::CardRow;

/// A candidate source backed by an in-memory row list.
///
/// ## Example
///
/// ```
/// use contextual_cards::source::{CardCursor, CardSource, MemoryCardSource, CardRow};
///
/// let source = MemoryCardSource::new(vec![
///     CardRow::resource_backed("content://com.test.cards/wifi", "wifi", "com.test"),
/// ]);
///
/// let mut cursor = source.query().unwrap();
/// assert_eq!(cursor.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MemoryCardSource {
    rows: Vec<CardRow>,
    fail_query: bool,
    fail_step_at: Option<usize>,
    close_count: Arc<AtomicUsize>,
}

impl MemoryCardSource {
    /// Create a source over the given rows.
    #[must_use]
    pub fn new(rows: Vec<CardRow>) -> Self {
        Self {
            rows,
            fail_query: false,
            fail_step_at: None,
            close_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create an empty source (triggers the loader's static fallback).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Make `query` fail (builder pattern).
    #[must_use]
    pub fn with_query_failure(mut self) -> Self {
        self.fail_query = true;
        self
    }

    /// Make cursor stepping fail at the given row index (builder pattern).
    #[must_use]
    pub fn with_step_failure_at(mut self, row: usize) -> Self {
        self.fail_step_at = Some(row);
        self
    }

    /// How many cursors from this source have been closed.
    #[must_use]
    pub fn closes(&self) -> usize {
        self.close_count.load(Ordering::SeqCst)
    }
}

impl CardSource for MemoryCardSource {
    fn query(&self) -> Result<Box<dyn CardCursor>, SourceError> {
        if self.fail_query {
            return Err(SourceError::Query("memory source set to fail".to_string()));
        }

        Ok(Box::new(MemoryCursor {
            rows: self.rows.clone(),
            pos: 0,
            fail_at: self.fail_step_at,
            close_count: Arc::clone(&self.close_count),
        }))
    }
}

struct MemoryCursor {
    rows: Vec<CardRow>,
    pos: usize,
    fail_at: Option<usize>,
    close_count: Arc<AtomicUsize>,
}

impl CardCursor for MemoryCursor {
    fn count(&self) -> usize {
        self.rows.len()
    }

    fn step(&mut self) -> Result<Option<CardRow>, SourceError> {
        if self.fail_at == Some(self.pos) {
            return Err(SourceError::Cursor {
                row: self.pos,
                message: "memory cursor set to fail".to_string(),
            });
        }

        let row = self.rows.get(self.pos).cloned();
        if row.is_some() {
            self.pos += 1;
        }
        Ok(row)
    }

    fn close(&mut self) {
        self.close_count.fetch_add(1, Ordering::SeqCst);
    }
}
