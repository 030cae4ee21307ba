//! HTTP listener, routing, and request dispatch.
//!
//! The listener accepts TCP connections, hands each one to its own tokio
//! task, parses the request head, and dispatches on the exact request path.

mod config;
mod error;
mod listener;
mod router;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use listener::HttpServer;
pub use router::{Handler, HandlerFuture, Router};
