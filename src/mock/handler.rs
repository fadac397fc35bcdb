//! Serves files from a catalogue directory as a mocked remote repository.

use log::{error, info};

use crate::mock::config::RepositoryMockConfig;
use crate::mock::delay::DelayPolicy;
use crate::mock::mime::{self, MimeTable, TEXT_CHARSET};
use crate::parser::HttpRequest;
use crate::server::{Error, HttpResponse, StatusCode};

/// `Server` header value on mocked responses.
pub const MOCK_SERVER_NAME: &str = "Repository Mock Server";

const SEPARATOR: &str = "/";

/// Answers every request with the file at `<catalogue>/<request path>`.
///
/// All state is fixed at construction, so one handler can be shared by any
/// number of connections.
#[derive(Debug, Clone)]
pub struct MockContentHandler {
    catalogue: String,
    delays: DelayPolicy,
    mime_types: MimeTable,
}

impl MockContentHandler {
    pub fn new(config: &RepositoryMockConfig) -> Self {
        Self {
            catalogue: config.catalogue.clone(),
            delays: DelayPolicy::from_config(config),
            mime_types: MimeTable::default(),
        }
    }

    /// Replace the MIME table used to guess content types.
    pub fn with_mime_types(mut self, mime_types: MimeTable) -> Self {
        self.mime_types = mime_types;
        self
    }

    pub fn catalogue(&self) -> &str {
        &self.catalogue
    }

    /// File path a request path resolves to. Only the first leading `/` is
    /// dropped, so `//a` resolves to `<catalogue>//a`.
    pub fn resource_path(&self, request_path: &str) -> String {
        let content_path = request_path.strip_prefix('/').unwrap_or(request_path);
        format!("{}{SEPARATOR}{content_path}", self.catalogue)
    }

    /// `Content-Type` header value for a resource, if its type is known.
    pub fn content_type(&self, resource_path: &str) -> Option<String> {
        let detected = self.mime_types.for_path(resource_path)?;
        let is_text_file = mime::file_extension(resource_path).is_some_and(mime::is_text_extension);

        if is_text_file {
            Some(format!("{detected}{TEXT_CHARSET}"))
        } else {
            Some(detected.to_string())
        }
    }

    /// Serve one request.
    ///
    /// A file that cannot be read, for whatever reason, yields
    /// [`Error::NotFound`]; the server renders it as a 404.
    pub async fn handle(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let path = request.path.as_str();
        let resource_path = self.resource_path(path);
        let content_type = self.content_type(&resource_path);

        let content = match tokio::fs::read(&resource_path).await {
            Ok(content) => content,
            Err(e) => {
                error!("Unable to read file [{resource_path}]: {e}");
                return Err(Error::NotFound(path.to_string()));
            }
        };

        info!("Mocked request [{path}] fetch data from file [{resource_path}]");

        if let Some(delay) = self.delays.delay_for(path) {
            info!("Delaying response for path {path} by {ms} ms", ms = delay.as_millis());
            tokio::time::sleep(delay).await;
        }

        let mut response = HttpResponse::new(StatusCode::Ok)
            .with_header("Access-Control-Allow-Origin", "*")
            .with_header("Server", MOCK_SERVER_NAME)
            .with_header("Cache-control", "no-cache, no-store, must-revalidate");

        if let Some(content_type) = content_type {
            response = response.with_content_type(content_type);
        }

        Ok(response.with_body_bytes(content))
    }
}
