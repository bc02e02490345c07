//! Error types for the card pipeline.
//!
//! Failures here are deliberately narrow: each error concerns exactly one
//! candidate row or one lookup, and the loader contains them rather than
//! aborting a whole load. Only `SourceError` ever crosses the public API,
//! and the background layer swallows even that (logged, empty delivery).

use thiserror::Error;

/// Failure querying or iterating the dynamic candidate source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source rejected the query outright.
    #[error("card source query failed: {0}")]
    Query(String),

    /// The cursor failed while stepping to the next row.
    #[error("card source cursor failed at row {row}: {message}")]
    Cursor { row: usize, message: String },
}

/// Failure parsing one raw row into a `CardRecord`.
#[derive(Error, Debug)]
pub enum RowError {
    /// A resource-backed row carried no URI.
    #[error("resource-backed row '{name}' has no URI")]
    MissingUri { name: String },

    /// The URI column did not parse.
    #[error("malformed card URI: {0}")]
    MalformedUri(#[from] url::ParseError),

    /// The card-type column held a code this crate does not know.
    #[error("unknown card type code {0}")]
    UnknownCardType(i64),
}

/// Failure resolving a package's version code.
#[derive(Error, Debug)]
pub enum PackageLookupError {
    /// No package with that name is installed.
    #[error("package not found: {0}")]
    NotFound(String),
}
