//! A small HTTP/1.x server on top of tokio.
//!
//! One request is read per connection, dispatched to the first route whose
//! pattern matches, and answered before the connection is closed.

mod response;
mod config;
mod error;
mod handler;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode, DEFAULT_SERVER_NAME};
pub use config::ServerConfig;
pub use error::Error;
pub use handler::{HandlerFn, HandlerFuture, Route};
pub use http_server::HttpServer;
