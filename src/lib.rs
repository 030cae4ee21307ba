//! A tiny HTTP API that serves greetings from Nairobi.
//!
//! The crate wires a small HTTP/1.x listener to four fixed routes:
//!
//! - `/` — plain-text welcome pointing at the other routes
//! - `/api` — a JSON payload with a fresh local timestamp
//! - `/about` — plain-text project information
//! - `/time` — the current local time, human-formatted
//!
//! Handlers are pure functions of process constants and the wall clock;
//! there is no state anywhere in the crate. Each accepted connection is
//! served by its own tokio task and answered with exactly one response.
//! Paths that match no route get the listener's default empty 404.
//!
//! # Examples
//!
//! Building the route table and serving it:
//!
//! ```no_run
//! use nairobi_api::routes;
//! use nairobi_api::{HttpServer, ServerConfig};
//!
//! # async fn run() -> Result<(), nairobi_api::ServerError> {
//! let server = HttpServer::new(ServerConfig::default(), routes::router());
//! server.start().await
//! # }
//! ```
//!
//! Responses are built with a small builder:
//!
//! ```
//! use nairobi_api::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_content_type("text/plain")
//!     .with_body("Karibu!");
//!
//! assert!(response.to_bytes().starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

// Export the HTTP wire types
pub mod http;

// Export the route handlers
pub mod routes;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use http::{parse_head, HttpVersion, Method, ParseError, Request, Response, StatusCode};
pub use server::{Error as ServerError, HttpServer, Router, ServerConfig};
