// ABOUTME: Error types for the WikiSearch core helpers.
// ABOUTME: Provides the Error enum with tagged kinds; failure policy is decided at each call site.

use thiserror::Error;

/// Errors produced by the core helpers.
///
/// The variants tag the failure kind only. Whether a failure is
/// propagated, degraded to an empty result, or treated as fatal is the
/// caller's decision: the manifest fetcher propagates, the table
/// extractor degrades, and a missing bundled asset is fatal at the
/// application top level.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure, timeout, or non-success HTTP status.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A body or file that should contain JSON could not be parsed.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    /// A file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A required bundled file is absent.
    #[error("required file missing: {0}")]
    MissingAsset(String),

    /// A language code with no entry in the language catalog.
    #[error("unknown language code: {0}")]
    UnknownLanguageCode(String),

    /// A URL that cannot be decomposed into an article reference.
    #[error("invalid article url: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Returns true if this is a network-level failure (including
    /// timeouts and HTTP status errors).
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Returns true if the underlying request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Http(err) => err.is_timeout(),
            _ => false,
        }
    }

    /// Returns true if a required bundled file is missing.
    pub fn is_missing_asset(&self) -> bool {
        matches!(self, Error::MissingAsset(_))
    }

    /// Returns true if a language code was not found in the catalog.
    pub fn is_unknown_language_code(&self) -> bool {
        matches!(self, Error::UnknownLanguageCode(_))
    }
}
