//! Card records - immutable card descriptors.
//!
//! `CardRecord` holds everything the display layer needs to know about one
//! contextual card: what backs it, who owns it, and how to lay it out.
//! Records are constructed once (from a source row or by the static
//! catalog) and never mutated afterwards.
//!
//! ## Card Kinds
//!
//! The backing of a card is a sum type, not a flag plus optional fields:
//!
//! - `ResourceBacked`: the card renders content resolved through a
//!   provider/binder pair; the URI is always present and schemed.
//! - `Custom`: the card supplies its own rendering; a URI may or may not
//!   exist. Loading custom cards is not implemented yet and rows of this
//!   kind are skipped by the loader.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RowError;
use crate::source::row::{CardRow, CARD_TYPE_CUSTOM, CARD_TYPE_RESOURCE_BACKED};

/// What backs a card's content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardKind {
    /// Content comes from an external resource resolved via its URI.
    ResourceBacked {
        /// The card's resource URI. Always schemed (`Url` guarantees it).
        uri: Url,
    },

    /// The card renders itself; no external resource to validate.
    Custom {
        /// Optional URI for custom cards that still reference a resource.
        uri: Option<Url>,
    },
}

/// An immutable contextual card descriptor.
///
/// ## Example
///
/// ```
/// use contextual_cards::cards::CardRecord;
/// use url::Url;
///
/// let uri = Url::parse("content://com.example.cards/battery").unwrap();
/// let card = CardRecord::resource_backed(uri, "battery", "com.example")
///     .with_ranking_score(0.7)
///     .with_app_version(42);
///
/// assert_eq!(card.name(), "battery");
/// assert!(!card.is_custom());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// What backs this card.
    kind: CardKind,

    /// Display name (also used as a stable identity within a package).
    name: String,

    /// Package that owns the card's content.
    package_name: String,

    /// Ranking score assigned by the source. Passthrough; this crate never
    /// computes or reorders by it.
    ranking_score: f64,

    /// Version code of the owning application. -1 when unknown.
    app_version: i64,

    /// Render at half width instead of full width.
    half_width: bool,
}

impl CardRecord {
    /// Create a resource-backed card.
    #[must_use]
    pub fn resource_backed(uri: Url, name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            kind: CardKind::ResourceBacked { uri },
            name: name.into(),
            package_name: package.into(),
            ranking_score: 0.0,
            app_version: -1,
            half_width: false,
        }
    }

    /// Create a custom card.
    ///
    /// Custom cards are currently skipped by the loader; this constructor
    /// exists for sources that already emit them.
    #[must_use]
    pub fn custom(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            kind: CardKind::Custom { uri: None },
            name: name.into(),
            package_name: package.into(),
            ranking_score: 0.0,
            app_version: -1,
            half_width: false,
        }
    }

    /// Set the ranking score (builder pattern).
    #[must_use]
    pub fn with_ranking_score(mut self, score: f64) -> Self {
        self.ranking_score = score;
        self
    }

    /// Set the owning application's version code (builder pattern).
    #[must_use]
    pub fn with_app_version(mut self, version: i64) -> Self {
        self.app_version = version;
        self
    }

    /// Set the half-width display flag (builder pattern).
    #[must_use]
    pub fn with_half_width(mut self, half_width: bool) -> Self {
        self.half_width = half_width;
        self
    }

    /// Parse one raw source row into a record.
    ///
    /// Fails when a resource-backed row has a missing or malformed URI, or
    /// when the card-type code is unknown. The loader logs and skips such
    /// rows rather than aborting the load.
    pub fn from_row(row: &CardRow) -> Result<Self, RowError> {
        let uri = match row.uri.as_deref() {
            Some(raw) => Some(Url::parse(raw)?),
            None => None,
        };

        let kind = match row.card_type {
            CARD_TYPE_RESOURCE_BACKED => match uri {
                Some(uri) => CardKind::ResourceBacked { uri },
                None => {
                    return Err(RowError::MissingUri {
                        name: row.name.clone(),
                    })
                }
            },
            CARD_TYPE_CUSTOM => CardKind::Custom { uri },
            other => return Err(RowError::UnknownCardType(other)),
        };

        Ok(Self {
            kind,
            name: row.name.clone(),
            package_name: row.package_name.clone(),
            ranking_score: row.ranking_score,
            app_version: row.app_version,
            half_width: row.half_width,
        })
    }

    /// The card's backing kind.
    #[must_use]
    pub fn kind(&self) -> &CardKind {
        &self.kind
    }

    /// The card's resource URI, if it has one.
    #[must_use]
    pub fn uri(&self) -> Option<&Url> {
        match &self.kind {
            CardKind::ResourceBacked { uri } => Some(uri),
            CardKind::Custom { uri } => uri.as_ref(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning package name.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Ranking score assigned by the source.
    #[must_use]
    pub fn ranking_score(&self) -> f64 {
        self.ranking_score
    }

    /// Owning application version code, -1 when unknown.
    #[must_use]
    pub fn app_version(&self) -> i64 {
        self.app_version
    }

    /// Whether the card renders at half width.
    #[must_use]
    pub fn is_half_width(&self) -> bool {
        self.half_width
    }

    /// Whether this is a custom (self-rendering) card.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self.kind, CardKind::Custom { .. })
    }
}

impl std::fmt::Display for CardRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({}/{})", self.package_name, self.name)
    }
}
