//! Artificial response latency.

use std::collections::HashMap;
use std::time::Duration;

use crate::mock::config::{PathDelay, RepositoryMockConfig};

/// Decides how long a response for a given request path is held back.
///
/// A positive global delay wins over everything. Otherwise the exact-path
/// entry is consulted, and an entry (or an entry without `delayMs`) falls
/// back to the global value, which is then clamped to zero.
#[derive(Debug, Clone, Default)]
pub struct DelayPolicy {
    delay_all_ms: i64,
    delay_per_path: HashMap<String, PathDelay>,
}

impl DelayPolicy {
    pub fn new(delay_all_ms: i64, delay_per_path: HashMap<String, PathDelay>) -> Self {
        Self { delay_all_ms, delay_per_path }
    }

    pub fn from_config(config: &RepositoryMockConfig) -> Self {
        Self::new(config.delay_all_ms, config.delay_per_path.clone())
    }

    /// Delay in milliseconds for `path`, never negative.
    pub fn delay_ms(&self, path: &str) -> u64 {
        if self.delay_all_ms > 0 {
            return self.delay_all_ms.unsigned_abs();
        }

        let delay = self
            .delay_per_path
            .get(path)
            .and_then(|entry| entry.delay_ms)
            .unwrap_or(self.delay_all_ms);

        u64::try_from(delay).unwrap_or(0)
    }

    /// The delay to wait for `path`, or `None` to respond immediately.
    pub fn delay_for(&self, path: &str) -> Option<Duration> {
        match self.delay_ms(path) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
