//! Error types for the location stream.

use thiserror::Error;

/// Registration with the position source was rejected or faulted.
#[derive(Debug, Clone, Error)]
#[error("position source rejected the subscription: {reason}")]
pub struct SubscriptionError {
    /// Source-reported reason.
    pub reason: String,
}

impl SubscriptionError {
    /// Create a subscription error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors raised when opening a location stream.
///
/// All variants occur before any subscription exists; the adapter does not
/// retry. Retry policy, if any, belongs to the caller.
#[derive(Debug, Error)]
pub enum LocationError {
    /// Location-access capability is absent.
    #[error("missing location permission")]
    PermissionDenied,

    /// Neither satellite-based nor network-based positioning is enabled.
    #[error("no positioning mechanism enabled")]
    SourceUnavailable,

    /// The source rejected the subscription.
    #[error(transparent)]
    Subscription(#[from] SubscriptionError),
}
