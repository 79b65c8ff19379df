//! Collaborator seams around the external position source.
//!
//! These traits and types form the boundary to the device's positioning
//! engine. The engine itself is out of scope; it is consumed only through
//! subscribe/unsubscribe and a delivery callback.

use std::time::Duration;

use super::error::SubscriptionError;
use super::fix::PositionFix;

/// Capability check gating access to location data.
///
/// Consumed once per stream open, before any subscription attempt.
pub trait PermissionProbe: Send + Sync {
    /// Does the caller currently hold location-access rights?
    fn location_allowed(&self) -> bool;
}

/// Enablement of the underlying positioning mechanisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderStatus {
    /// Satellite-based positioning is enabled.
    pub satellite_enabled: bool,

    /// Network-based positioning is enabled.
    pub network_enabled: bool,
}

impl ProviderStatus {
    /// True if at least one positioning mechanism is enabled.
    ///
    /// An any-of gate: one enabled mechanism is enough to open a stream.
    /// Requiring both would reduce availability for no benefit.
    pub fn any_enabled(&self) -> bool {
        self.satellite_enabled || self.network_enabled
    }
}

/// Delivery cadence for one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionRequest {
    /// Requested interval between deliveries.
    pub interval: Duration,

    /// Minimum acceptable interval between deliveries.
    pub fastest_interval: Duration,
}

impl SubscriptionRequest {
    /// Periodic delivery at `interval`, requesting no faster cadence either.
    pub fn periodic(interval: Duration) -> Self {
        Self {
            interval,
            fastest_interval: interval,
        }
    }
}

/// Opaque token for one active registration with the position source.
///
/// Minted by the source. Owned by the stream's release guard for one
/// open→cancel cycle; never shared, never reused across cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

impl SubscriptionHandle {
    /// Wrap a raw handle value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw handle value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Delivery callback registered with the source.
///
/// Each invocation carries one batch of fixes in measurement order. The
/// source may coalesce several fixes into a single batch.
pub type PositionCallback = Box<dyn FnMut(Vec<PositionFix>) + Send>;

/// The external push-based position source.
pub trait PositionSource: Send + Sync {
    /// Current enablement of the underlying positioning mechanisms.
    fn provider_status(&self) -> ProviderStatus;

    /// Register a subscription delivering batches to `callback`.
    fn subscribe(
        &self,
        request: SubscriptionRequest,
        callback: PositionCallback,
    ) -> Result<SubscriptionHandle, SubscriptionError>;

    /// Release the subscription behind `handle`.
    ///
    /// Must tolerate handles that were already released.
    fn unsubscribe(&self, handle: SubscriptionHandle);
}
