//! A mock content repository served over HTTP.
//!
//! Files under a catalogue directory are served as if they came from a
//! remote content repository. Responses can be held back by a global delay
//! or by per-path delays to simulate slow endpoints, and text files get a
//! UTF-8 charset on their `Content-Type`.
//!
//! # Examples
//!
//! ## Serving a catalogue
//!
//! ```no_run
//! use repository_mock::{mock_server, PathDelay, RepositoryMockConfig, ServerConfig};
//!
//! # async fn serve() -> Result<(), repository_mock::ServerError> {
//! let mock = RepositoryMockConfig::new("mocks/repository")
//!     .with_path_delay("/slow.html", PathDelay::new(500));
//!
//! let server = mock_server(ServerConfig::on_port(3001), &mock).await;
//! server.start().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Delay rules
//!
//! ```
//! use repository_mock::{DelayPolicy, PathDelay, RepositoryMockConfig};
//!
//! let config = RepositoryMockConfig::new("mocks")
//!     .with_path_delay("/foo", PathDelay::new(50));
//! let delays = DelayPolicy::from_config(&config);
//!
//! assert_eq!(delays.delay_ms("/foo"), 50);
//! assert_eq!(delays.delay_ms("/bar"), 0);
//!
//! // A positive global delay overrides every per-path entry
//! let delays = DelayPolicy::from_config(&config.with_delay_all(100));
//! assert_eq!(delays.delay_ms("/foo"), 100);
//! ```

pub mod parser;

pub mod server;

pub mod mock;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, HttpVersion, Method, parse_request};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
pub use mock::{
    mock_server, DelayPolicy, MimeTable, MockAppConfig, MockContentHandler, MockServiceSettings,
    PathDelay, RepositoryMockConfig,
};
