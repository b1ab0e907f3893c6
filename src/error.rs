//! Error types for rs-newspost.
//!
//! Only whole-article failures are errors. Per-node classification problems
//! (unresolvable links, already attributed nodes) are recovered locally and
//! never reach the caller.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A CSS selector supplied through `Options` could not be parsed.
    #[error("Invalid selector: {0}")]
    ParseError(String),

    /// The canonical article URI is not an absolute http(s) URI.
    #[error("Invalid article URI: {0}")]
    InvalidUri(String),

    /// A field the news post cannot exist without is missing.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// No content root was found in the document.
    #[error("No extractable content found")]
    NoContent,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
