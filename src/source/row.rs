//! Raw candidate rows and their column layout.
//!
//! The dynamic source speaks in rows, one per card candidate. The layout is
//! fixed; sources that persist candidates elsewhere map their own schema
//! onto these columns before handing rows to the loader.
//!
//! ## Columns
//!
//! | Column          | Type            | Notes                              |
//! |-----------------|-----------------|------------------------------------|
//! | `uri`           | text, nullable  | resource URI                       |
//! | `name`          | text            | display name                       |
//! | `package_name`  | text            | owning package                     |
//! | `ranking_score` | real            | passthrough score                  |
//! | `app_version`   | integer         | owning app version, -1 unknown     |
//! | `card_type`     | integer         | 1 resource-backed, 2 custom        |
//! | `half_width`    | integer (0/1)   | layout flag                        |

use serde::{Deserialize, Serialize};

/// `card_type` code for resource-backed rows.
pub const CARD_TYPE_RESOURCE_BACKED: i64 = 1;
/// `card_type` code for custom rows.
pub const CARD_TYPE_CUSTOM: i64 = 2;

/// Column names, for sources backed by a keyed or relational store.
pub mod columns {
    pub const URI: &str = "uri";
    pub const NAME: &str = "name";
    pub const PACKAGE_NAME: &str = "package_name";
    pub const RANKING_SCORE: &str = "ranking_score";
    pub const APP_VERSION: &str = "app_version";
    pub const CARD_TYPE: &str = "card_type";
    pub const HALF_WIDTH: &str = "half_width";
}

/// One raw row from the dynamic candidate source.
///
/// Parsing into a validated `CardRecord` happens via
/// `CardRecord::from_row`; a `CardRow` itself carries no invariants beyond
/// the column types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardRow {
    /// Resource URI, absent for rows that never reference a resource.
    pub uri: Option<String>,

    /// Display name.
    pub name: String,

    /// Owning package name.
    pub package_name: String,

    /// Ranking score assigned upstream.
    pub ranking_score: f64,

    /// Owning application version code.
    pub app_version: i64,

    /// Card type code (`CARD_TYPE_*`).
    pub card_type: i64,

    /// Half-width layout flag.
    pub half_width: bool,
}

impl CardRow {
    /// Convenience constructor for a resource-backed row.
    #[must_use]
    pub fn resource_backed(
        uri: impl Into<String>,
        name: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            uri: Some(uri.into()),
            name: name.into(),
            package_name: package.into(),
            ranking_score: 0.0,
            app_version: -1,
            card_type: CARD_TYPE_RESOURCE_BACKED,
            half_width: false,
        }
    }

    /// Convenience constructor for a custom row.
    #[must_use]
    pub fn custom(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            uri: None,
            name: name.into(),
            package_name: package.into(),
            ranking_score: 0.0,
            app_version: -1,
            card_type: CARD_TYPE_CUSTOM,
            half_width: false,
        }
    }

    /// Set the ranking score (builder pattern).
    #[must_use]
    pub fn with_ranking_score(mut self, score: f64) -> Self {
        self.ranking_score = score;
        self
    }

    /// Set the app version (builder pattern).
    #[must_use]
    pub fn with_app_version(mut self, version: i64) -> Self {
        self.app_version = version;
        self
    }
}
