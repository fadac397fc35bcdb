//! Construction-time configuration of a content mock.

use std::collections::HashMap;

use serde::Deserialize;

/// Per-path delay entry.
///
/// A missing `delayMs` falls back to the mock's global delay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDelay {
    #[serde(default)]
    pub delay_ms: Option<i64>,
}

impl PathDelay {
    pub fn new(delay_ms: i64) -> Self {
        Self { delay_ms: Some(delay_ms) }
    }
}

/// Configuration of one [`MockContentHandler`](crate::mock::MockContentHandler).
///
/// ```json
/// {
///   "catalogue": "mocks/repository",
///   "delayAllMs": 0,
///   "delayPerPath": { "/slow.html": { "delayMs": 500 } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryMockConfig {
    /// Directory served as the root of the mocked repository.
    pub catalogue: String,
    /// Delay applied to every response; zero or negative disables it.
    #[serde(default)]
    pub delay_all_ms: i64,
    /// Delays keyed by exact request path.
    #[serde(default)]
    pub delay_per_path: HashMap<String, PathDelay>,
}

impl RepositoryMockConfig {
    pub fn new(catalogue: impl Into<String>) -> Self {
        Self {
            catalogue: catalogue.into(),
            ..Self::default()
        }
    }

    /// Delay every response by `delay_ms`.
    pub fn with_delay_all(mut self, delay_ms: i64) -> Self {
        self.delay_all_ms = delay_ms;
        self
    }

    /// Delay responses for one exact request path.
    pub fn with_path_delay(mut self, path: impl Into<String>, delay: PathDelay) -> Self {
        self.delay_per_path.insert(path.into(), delay);
        self
    }
}
