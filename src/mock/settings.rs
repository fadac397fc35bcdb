//! Port settings of the two mock services.

use serde::Deserialize;

use crate::mock::error::Error;

/// Environment variable overriding [`MockServiceSettings::mock_service_port`].
pub const SERVICE_MOCK_PORT_ENV: &str = "SERVICE_MOCK_PORT";
/// Environment variable overriding [`MockServiceSettings::repository_service_port`].
pub const REPOSITORY_MOCK_PORT_ENV: &str = "REPOSITORY_MOCK_PORT";

/// Ports the service mock and the repository mock listen on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockServiceSettings {
    pub mock_service_port: u16,
    pub repository_service_port: u16,
}

impl MockServiceSettings {
    pub fn new(mock_service_port: u16, repository_service_port: u16) -> Self {
        Self {
            mock_service_port,
            repository_service_port,
        }
    }

    pub fn mock_service_port(&self) -> u16 {
        self.mock_service_port
    }

    pub fn repository_service_port(&self) -> u16 {
        self.repository_service_port
    }

    /// Apply `SERVICE_MOCK_PORT` / `REPOSITORY_MOCK_PORT` from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, Error> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply port overrides from `lookup`, keyed by environment variable name.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        if let Some(port) = Self::port_override(&lookup, SERVICE_MOCK_PORT_ENV)? {
            self.mock_service_port = port;
        }
        if let Some(port) = Self::port_override(&lookup, REPOSITORY_MOCK_PORT_ENV)? {
            self.repository_service_port = port;
        }
        Ok(self)
    }

    fn port_override(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<u16>, Error> {
        lookup(name)
            .map(|value| {
                value.trim().parse::<u16>().map_err(|_| Error::InvalidPort {
                    name: name.to_string(),
                    value,
                })
            })
            .transpose()
    }
}
