//! Dispatch queue configuration.

use serde::Deserialize;

/// Payload size, in bytes, from which a task is routed to the large lane.
pub const DEFAULT_LANE_THRESHOLD_BYTES: usize = 100 * 1024;

/// Settings for the [`Dispatcher`](super::Dispatcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Payloads of at least this many bytes go to the large lane.
    pub lane_threshold_bytes: usize,
}

impl DispatchConfig {
    /// Creates a configuration with the given lane threshold.
    #[must_use]
    pub const fn with_threshold(lane_threshold_bytes: usize) -> Self {
        Self {
            lane_threshold_bytes,
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_LANE_THRESHOLD_BYTES)
    }
}
