//! Why a media reference could not be turned into a URL.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Input was empty or only whitespace.
    #[error("empty media reference")]
    Empty,
    /// The string built from the reference is not an absolute URL.
    #[error("malformed media URL {candidate:?}: {source}")]
    Malformed {
        candidate: String,
        #[source]
        source: url::ParseError,
    },
}
