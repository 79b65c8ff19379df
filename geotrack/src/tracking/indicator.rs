//! Status indicator collaborator.
//!
//! A persistent, externally visible record showing the latest known
//! position. The supervisor creates one indicator when tracking starts,
//! updates it in place on every fix (same identity, never recreated) and
//! retracts it when tracking stops.

use thiserror::Error;

use crate::location::PositionFix;

/// Indicator text shown before the first fix arrives.
pub const UNKNOWN_POSITION_TEXT: &str = "Location: unknown";

/// Identity of one visible indicator, reused across updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorId(u64);

impl IndicatorId {
    /// Wrap a raw indicator id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Failure to apply an indicator update.
///
/// Updates are best-effort; a failed update never stalls the sample
/// pipeline. The indicator may freeze at its last value.
#[derive(Debug, Clone, Error)]
#[error("indicator update failed: {reason}")]
pub struct IndicatorError {
    /// Renderer-reported reason.
    pub reason: String,
}

impl IndicatorError {
    /// Create an indicator error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The externally rendered status indicator.
pub trait StatusIndicator: Send + Sync {
    /// Create a new visible indicator showing `text`.
    fn create(&self, text: &str) -> IndicatorId;

    /// Replace the text of an existing indicator.
    fn update(&self, id: IndicatorId, text: &str) -> Result<(), IndicatorError>;

    /// Remove the indicator from view.
    fn retract(&self, id: IndicatorId);
}

/// Indicator text for one fix.
pub fn format_fix(fix: &PositionFix) -> String {
    format!("Location: ({:.5}, {:.5})", fix.latitude, fix.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fix() {
        let fix = PositionFix::new(53.630278, 9.988333);
        assert_eq!(format_fix(&fix), "Location: (53.63028, 9.98833)");
    }

    #[test]
    fn test_format_fix_negative_coordinates() {
        let fix = PositionFix::new(-33.8688, -151.2093);
        assert_eq!(format_fix(&fix), "Location: (-33.86880, -151.20930)");
    }

    #[test]
    fn test_unknown_text_differs_from_fix_text() {
        let fix = PositionFix::new(0.0, 0.0);
        assert_ne!(format_fix(&fix), UNKNOWN_POSITION_TEXT);
    }

    #[test]
    fn test_indicator_id_round_trip() {
        let id = IndicatorId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id, IndicatorId::new(7));
    }
}
