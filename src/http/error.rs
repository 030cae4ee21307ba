//! Error types for HTTP head parsing.

use thiserror::Error;

/// Errors that can occur while parsing an HTTP request head.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The HTTP method token is not recognized.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The HTTP version is not one the listener speaks.
    #[error("unsupported HTTP version: {0}")]
    UnsupportedVersion(String),

    /// The request line is missing components or not valid text.
    #[error("malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The request path is empty or not origin-form.
    #[error("invalid request path")]
    InvalidPath,

    /// A header line has no name/value separator.
    #[error("malformed header line")]
    MalformedHeader,

    /// A header required by the protocol version is absent.
    #[error("required header is missing: {0}")]
    MissingHeader(&'static str),

    /// The request is empty.
    #[error("empty request")]
    EmptyRequest,
}
