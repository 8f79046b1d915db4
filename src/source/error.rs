//! Error types for feed sources.

use thiserror::Error;

/// Errors that can occur while fetching the feed.
///
/// The controller treats every variant the same way: the gallery is replaced
/// by a single error message and the cause is logged.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure (DNS, connect, TLS, interrupted body).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("feed returned status {0}")]
    Status(reqwest::StatusCode),

    /// The body was not a JSON array of records.
    #[error("failed to parse feed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A local feed file could not be read.
    #[error("failed to read feed file: {0}")]
    Io(#[from] std::io::Error),
}
