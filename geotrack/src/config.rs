//! Tracking configuration.

use std::time::Duration;

/// Default sampling interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10_000);

/// Configuration for the tracking supervisor.
#[derive(Debug, Clone)]
pub struct TrackingConfig {
    /// Sampling cadence requested from the position source.
    ///
    /// One value drives both the requested delivery interval and the
    /// minimum acceptable interval.
    pub interval: Duration,

    /// Capacity of the external command channel.
    pub command_capacity: usize,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            command_capacity: 16,
        }
    }
}

impl TrackingConfig {
    /// Set the sampling interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the command channel capacity.
    pub fn with_command_capacity(mut self, capacity: usize) -> Self {
        self.command_capacity = capacity;
        self
    }
}
