//! Runs the service mock and the repository mock from a JSON configuration file.
//!
//! Usage: `repository-mock [CONFIG]`, CONFIG defaulting to `mock-config.json`.
//! Ports can be overridden with `SERVICE_MOCK_PORT` and `REPOSITORY_MOCK_PORT`;
//! the log level is taken from `RUST_LOG` (default `info`).

use std::process::ExitCode;

use log::error;
use repository_mock::MockAppConfig;

const DEFAULT_CONFIG_PATH: &str = "mock-config.json";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match MockAppConfig::from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match repository_mock::mock::run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
