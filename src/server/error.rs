//! Error types for the HTTP server.

use thiserror::Error;

use crate::http::ParseError;

/// Errors that can occur while serving connections.
#[derive(Debug, Error)]
pub enum Error {
    /// The request head could not be parsed.
    #[error("request parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O error on the listener or a connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed while building a response.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
