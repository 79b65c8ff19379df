//! Core position sample type.

use std::time::{Duration, Instant};

/// A single position sample.
///
/// Produced by the external position source and immutable once produced.
/// Each emission is consumed exactly once per subscriber.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,

    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,

    /// When this fix was measured.
    ///
    /// Monotonic; consumers use this to judge freshness and ordering.
    pub timestamp: Instant,
}

impl PositionFix {
    /// Create a fix stamped with the current instant.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            timestamp: Instant::now(),
        }
    }

    /// Get the age of this fix (time since it was measured).
    pub fn age(&self) -> Duration {
        self.timestamp.elapsed()
    }
}
