//! The card loader - acquisition, fallback, and filtering.
//!
//! One `load()` is one atomic unit of work: query the dynamic source, fall
//! back to the static catalog when it is empty, then filter every candidate
//! through the eligibility checker. Per-row and per-card failures are
//! contained (logged, row or card dropped); only a source failure surfaces,
//! and the background layer contains even that.

use std::sync::Arc;

use crate::cards::{CardKind, CardRecord, StaticCardCatalog};
use crate::eligibility::EligibilityChecker;
use crate::error::SourceError;
use crate::host::{HostContext, PackageInfoSource};
use crate::source::{CardSource, CursorGuard};

/// Produces the final, filtered, ordered card list.
#[derive(Clone)]
pub struct CardLoader {
    context: Arc<HostContext>,
    checker: EligibilityChecker,
}

impl CardLoader {
    /// Create a loader over the given host context.
    #[must_use]
    pub fn new(context: Arc<HostContext>) -> Self {
        let checker = EligibilityChecker::new(Arc::clone(&context));
        Self { context, checker }
    }

    /// Load the cards to display.
    ///
    /// Returns the eligible candidates in source order, or the filtered
    /// static fallback set when the source has no rows. The source cursor
    /// is released on every exit path, including a mid-iteration error.
    pub fn load(&self) -> Result<Vec<CardRecord>, SourceError> {
        let mut result = Vec::new();
        let mut cursor = CursorGuard::new(self.context.source().query()?);

        if cursor.count() == 0 {
            result.extend(self.create_static_cards());
        } else {
            while let Some(row) = cursor.step()? {
                match CardRecord::from_row(&row) {
                    Ok(card) => match card.kind() {
                        // TODO: load and generate custom cards, then add
                        // them to the result.
                        CardKind::Custom { .. } => {}
                        CardKind::ResourceBacked { .. } => result.push(card),
                    },
                    Err(err) => {
                        log::warn!("skipping malformed candidate row '{}': {err}", row.name);
                    }
                }
            }
        }

        Ok(self.filter_eligible_cards(result))
    }

    /// Keep only the candidates that pass the eligibility check.
    ///
    /// Preserves relative order; never reorders or deduplicates. The result
    /// is a subsequence of the input.
    #[must_use]
    pub fn filter_eligible_cards(&self, candidates: Vec<CardRecord>) -> Vec<CardRecord> {
        candidates
            .into_iter()
            .filter(|card| self.checker.is_eligible(card))
            .collect()
    }

    /// Hook invoked with a result that was superseded before delivery.
    ///
    /// Intentionally empty: stale results need a terminal destination other
    /// than the listener, nothing more.
    pub fn on_discard_result(&self, _result: Vec<CardRecord>) {}

    /// The checker this loader filters through.
    #[must_use]
    pub fn checker(&self) -> &EligibilityChecker {
        &self.checker
    }

    fn create_static_cards(&self) -> Vec<CardRecord> {
        let package_name = self.context.package_name();
        StaticCardCatalog::cards(package_name, self.app_version_code())
    }

    /// The host's own version code, or -1 when the package table cannot
    /// resolve it. Always available, so callers never special-case it.
    fn app_version_code(&self) -> i64 {
        match self
            .context
            .packages()
            .version_code(self.context.package_name())
        {
            Ok(version) => version,
            Err(err) => {
                log::error!("invalid host package for version lookup: {err}");
                -1
            }
        }
    }
}
