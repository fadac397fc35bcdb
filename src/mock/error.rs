//! Error types for loading mock configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or applying mock configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Unable to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for the expected shape.
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A port override from the environment is not a valid port number.
    #[error("Invalid port in {name}: {value:?}")]
    InvalidPort { name: String, value: String },

    /// The configured host does not parse as an IP address.
    #[error("Invalid host address: {0}")]
    InvalidAddress(String),

    /// A mock server stopped with an error.
    #[error("Mock server error: {0}")]
    Server(#[from] crate::server::Error),
}
