//! Exact-match routing from path strings to handler functions.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::http::{Request, Response};
use crate::server::error::Error;

/// Type alias for a boxed future produced by a handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Response, Error>> + Send>>;

/// Type alias for a handler function bound to one route.
pub type Handler = Arc<dyn Fn(Request) -> HandlerFuture + Send + Sync>;

/// A static table mapping exact path strings to handlers.
///
/// There is no pattern matching, no wildcards, and no per-method dispatch:
/// a request matches a route when its path equals the registered string.
/// The table is built once before the server starts and never mutated.
#[derive(Clone, Default)]
pub struct Router {
    routes: HashMap<String, Handler>,
}

impl Router {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handler to an exact path, returning the router for chaining.
    pub fn route<F, Fut>(mut self, path: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response, Error>> + Send + 'static,
    {
        let handler: Handler =
            Arc::new(move |request: Request| -> HandlerFuture { Box::pin(handler(request)) });
        self.routes.insert(path.into(), handler);
        self
    }

    /// Look up the handler for a path.
    pub fn lookup(&self, path: &str) -> Option<&Handler> {
        self.routes.get(path)
    }

    /// Iterate over the registered paths.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// The number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the router has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
