//! Static fallback catalog.
//!
//! When the dynamic source yields no candidates, the loader falls back to a
//! fixed set of three resource-backed cards: data usage, battery, and device
//! info, in that order. The catalog is a pure constructor - it returns fresh
//! records on every call and holds no state of its own.

use url::Url;

use super::record::CardRecord;
use crate::resource::SCHEME_CONTENT;

/// Card name (and URI path) of the data-usage fallback card.
pub const PATH_DATA_USAGE: &str = "data_usage";
/// Card name (and URI path) of the battery fallback card.
pub const PATH_BATTERY: &str = "battery";
/// Card name (and URI path) of the device-info fallback card.
pub const PATH_DEVICE_INFO: &str = "device_info";

/// Number of cards the catalog produces.
pub const STATIC_CARD_COUNT: usize = 3;

/// The fixed fallback card set.
///
/// ## Example
///
/// ```
/// use contextual_cards::cards::StaticCardCatalog;
///
/// let cards = StaticCardCatalog::cards("com.example.host", 12);
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[0].name(), "data_usage");
/// assert_eq!(cards[0].app_version(), 12);
/// ```
pub struct StaticCardCatalog;

impl StaticCardCatalog {
    /// Build the three fallback cards for the given host identity.
    ///
    /// All three are resource-backed, full width, with ranking score 0.0.
    /// Order is fixed: data usage, battery, device info.
    #[must_use]
    pub fn cards(package_name: &str, app_version: i64) -> Vec<CardRecord> {
        [PATH_DATA_USAGE, PATH_BATTERY, PATH_DEVICE_INFO]
            .into_iter()
            .map(|path| {
                CardRecord::resource_backed(Self::card_uri(package_name, path), path, package_name)
                    .with_ranking_score(0.0)
                    .with_app_version(app_version)
                    .with_half_width(false)
            })
            .collect()
    }

    /// The content URI a fallback card resolves through.
    ///
    /// Hosted under the package's own card authority, so the host's provider
    /// serves them.
    #[must_use]
    pub fn card_uri(package_name: &str, path: &str) -> Url {
        Url::parse(&format!("{SCHEME_CONTENT}://{package_name}.cards/{path}"))
            .expect("static card URI is well-formed")
    }
}
