//! Simulated dealer configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulated dealer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealerConfig {
    /// Instrument codes the dealer offers.
    #[serde(default = "default_catalog")]
    pub catalog: Vec<String>,
    /// Interval between simulated ticks in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl DealerConfig {
    /// Tick interval as a `Duration`.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

fn default_catalog() -> Vec<String> {
    vec!["TXFJ4".to_string(), "MXFJ4".to_string()]
}

const fn default_tick_interval_ms() -> u64 {
    500
}
