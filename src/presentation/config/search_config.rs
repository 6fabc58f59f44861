use std::time::Duration;

use super::{DEFAULT_RESPONSE_DELAY_MS, SearchSettings};

/// Runtime knobs for the job search endpoint.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Simulated processing latency applied before every parsed request is answered.
    pub response_delay_ms: u64,
}

impl SearchConfig {
    pub fn without_delay() -> Self {
        Self {
            response_delay_ms: 0,
        }
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            response_delay_ms: settings.response_delay_ms,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
        }
    }
}
