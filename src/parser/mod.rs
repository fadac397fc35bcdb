//! HTTP/1.x request parsing.
//!
//! The mock only needs the request line and headers: the method to pick a
//! route, and the path (without its query string) to resolve a file and
//! look up a per-path delay.

mod request;
mod method;
mod version;
mod error;
mod tests;

// Re-export public items
pub use request::{HttpRequest, parse_request};
pub use method::Method;
pub use version::HttpVersion;
pub use error::Error;
