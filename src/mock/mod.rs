//! The content mock: static files from a catalogue directory, served with
//! optional artificial latency.

mod app;
mod config;
mod delay;
mod error;
mod handler;
mod mime;
mod settings;

pub use app::{mock_server, run, MockAppConfig};
pub use config::{PathDelay, RepositoryMockConfig};
pub use delay::DelayPolicy;
pub use error::Error;
pub use handler::{MockContentHandler, MOCK_SERVER_NAME};
pub use mime::{file_extension, is_text_extension, MimeTable, TEXT_CHARSET, TEXT_FILE_EXTENSIONS};
pub use settings::{MockServiceSettings, REPOSITORY_MOCK_PORT_ENV, SERVICE_MOCK_PORT_ENV};
