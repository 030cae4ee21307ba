//! HTTP wire types.
//!
//! Request head parsing and response building for the HTTP/1.x subset this
//! server speaks.

mod error;
mod method;
mod request;
mod response;
mod tests;
mod version;

// Re-export public items
pub use error::ParseError;
pub use method::Method;
pub use request::{parse_head, Request};
pub use response::{Response, StatusCode};
pub use version::HttpVersion;
