//! HTTP request head parsing and representation.

use std::collections::HashMap;
use std::str::FromStr;

use crate::http::error::ParseError;
use crate::http::method::Method;
use crate::http::version::HttpVersion;

/// The parsed head of an inbound HTTP request.
///
/// Header names are lowercased during parsing so lookups are
/// case-insensitive. Any query string is stripped from the path: routing is
/// exact-path only and no handler reads parameters.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, ...)
    pub method: Method,
    /// The request path, without any query string
    pub path: String,
    /// The HTTP version
    pub version: HttpVersion,
    /// Header names (lowercase) mapped to their values
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Look up a header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Check whether a header is present, case-insensitively.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_ascii_lowercase())
    }
}

/// Parse the head of an HTTP request from a byte slice.
///
/// Expects a request line (`METHOD SP PATH SP VERSION`) followed by zero or
/// more header lines. HTTP/1.1 requests must carry a `Host` header.
pub fn parse_head(input: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(input)
        .map_err(|_| ParseError::MalformedRequestLine("invalid UTF-8".to_string()))?;

    let mut lines = text.lines();

    let request_line = lines.next().ok_or(ParseError::EmptyRequest)?;
    if request_line.is_empty() {
        return Err(ParseError::EmptyRequest);
    }

    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ParseError::MalformedRequestLine(request_line.to_string()));
    }

    let method = Method::from_str(parts[0])?;

    // Drop the query string; handlers never read parameters.
    let path = match parts[1].split_once('?') {
        Some((path, _)) => path,
        None => parts[1],
    };
    if path.is_empty() || !path.starts_with('/') {
        return Err(ParseError::InvalidPath);
    }

    let version = HttpVersion::from_str(parts[2])?;

    let mut headers = HashMap::new();
    for line in lines {
        // Empty line indicates the end of headers
        if line.is_empty() {
            break;
        }

        let (name, value) = line.split_once(':').ok_or(ParseError::MalformedHeader)?;
        headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    if version == HttpVersion::Http11 && !headers.contains_key("host") {
        return Err(ParseError::MissingHeader("Host"));
    }

    Ok(Request {
        method,
        path: path.to_string(),
        version,
        headers,
    })
}
