//! Error type shared by the library.
//!
//! Two families matter to the page loader: transport failures (the request
//! never produced a usable body) and application failures (the CMS answered
//! with `success: false`). Both end up as a user-visible message; nothing is
//! retried.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while fetching or interpreting content.
#[derive(Debug, Error)]
pub enum ExploreError {
    /// The HTTP request failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
    },

    /// The CMS answered `success: false`.
    #[error("{message}")]
    Application {
        /// Message from the response body, or a generic fallback
        message: String,
    },

    /// The body was not the JSON shape we expect.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading a local response or tab file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("invalid config {path}: {message}")]
    Config {
        /// Config file path
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A section type name outside the known set.
    #[error("unknown section type '{0}' (expected one of: themes, destinations, testimonials, offers, blogs, packages)")]
    UnknownSectionType(String),
}

impl From<reqwest::Error> for ExploreError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => ExploreError::Status {
                status: status.as_u16(),
            },
            None => ExploreError::Network(e.to_string()),
        }
    }
}

/// Library result alias.
pub type Result<T> = std::result::Result<T, ExploreError>;
