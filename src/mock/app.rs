//! Application wiring: configuration file and the two mock servers.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;

use log::info;
use serde::Deserialize;

use crate::mock::config::RepositoryMockConfig;
use crate::mock::error::Error;
use crate::mock::handler::MockContentHandler;
use crate::mock::settings::MockServiceSettings;
use crate::parser::Method;
use crate::server::{HttpServer, ServerConfig};

fn default_host() -> String {
    Ipv4Addr::LOCALHOST.to_string()
}

/// Whole-application configuration file.
///
/// ```json
/// {
///   "mockServicePort": 3000,
///   "repositoryServicePort": 3001,
///   "service": { "catalogue": "mocks/service" },
///   "repository": { "catalogue": "mocks/repository", "delayAllMs": 0 }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct MockAppConfig {
    #[serde(flatten)]
    pub settings: MockServiceSettings,
    #[serde(default = "default_host")]
    pub host: String,
    pub service: RepositoryMockConfig,
    pub repository: RepositoryMockConfig,
}

impl MockAppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the configuration file, then apply port overrides from the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_json_str(&json)?;
        config.settings = config.settings.with_env_overrides()?;
        Ok(config)
    }

    fn socket_addr(&self, port: u16) -> Result<SocketAddr, Error> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| Error::InvalidAddress(self.host.clone()))?;
        Ok(SocketAddr::new(ip, port))
    }

    /// Server configuration for the service mock.
    pub fn service_server_config(&self) -> Result<ServerConfig, Error> {
        Ok(ServerConfig {
            addr: self.socket_addr(self.settings.mock_service_port())?,
            ..ServerConfig::default()
        })
    }

    /// Server configuration for the repository mock.
    pub fn repository_server_config(&self) -> Result<ServerConfig, Error> {
        Ok(ServerConfig {
            addr: self.socket_addr(self.settings.repository_service_port())?,
            ..ServerConfig::default()
        })
    }
}

/// Build a server whose catch-all route is answered by a [`MockContentHandler`].
pub async fn mock_server(config: ServerConfig, mock: &RepositoryMockConfig) -> HttpServer {
    let handler = Arc::new(MockContentHandler::new(mock));
    let server = HttpServer::new(config);

    server.add_route("/*", Method::ALL.to_vec(), move |request| {
        let handler = handler.clone();
        async move { handler.handle(&request).await }
    }).await;

    server
}

/// Run the service mock and the repository mock until Ctrl+C.
pub async fn run(app: &MockAppConfig) -> Result<(), Error> {
    let service = mock_server(app.service_server_config()?, &app.service).await;
    let repository = mock_server(app.repository_server_config()?, &app.repository).await;

    info!(
        "Serving service mock from [{}] and repository mock from [{}]",
        app.service.catalogue, app.repository.catalogue
    );

    tokio::try_join!(service.start(), repository.start())?;
    Ok(())
}
