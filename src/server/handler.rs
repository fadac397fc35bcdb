//! Request handlers and route matching.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::parser::{HttpRequest, Method};
use crate::server::{HttpResponse, Error};

/// Type alias for a boxed future that returns a Result<HttpResponse, Error>.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>;

/// Type alias for a handler function that takes an HttpRequest and returns a HandlerFuture.
pub type HandlerFn = Arc<dyn Fn(HttpRequest) -> HandlerFuture + Send + Sync>;

/// Represents a route in the HTTP server.
///
/// A path ending in `*` matches every request path starting with the part
/// before the `*`, so `/*` is a catch-all. Any other path matches exactly.
#[derive(Clone)]
pub struct Route {
    /// The path pattern to match.
    pub path: String,
    /// The HTTP methods to match.
    pub methods: Vec<Method>,
    /// The handler function.
    pub handler: HandlerFn,
}

impl Route {
    /// Whether this route's pattern matches the given request path.
    pub fn matches_path(&self, path: &str) -> bool {
        match self.path.strip_suffix('*') {
            // "/*" also takes targets that do not start with a slash
            Some("/") => true,
            Some(prefix) => path.starts_with(prefix),
            None => self.path == path,
        }
    }
}
