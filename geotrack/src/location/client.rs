//! Callback-to-stream adapter over the external position source.
//!
//! Converts the source's push-based delivery into [`LocationUpdates`], a
//! cancellable pull sequence. The subscription is owned by a release guard
//! so it is released exactly once on every exit path, including the
//! consumer abandoning the stream without an explicit cancel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use super::error::LocationError;
use super::fix::PositionFix;
use super::source::{PermissionProbe, PositionSource, SubscriptionHandle, SubscriptionRequest};

/// One pending fix per delivery; the source callback never blocks.
const PENDING_FIX_SLOTS: usize = 1;

/// Pull interface over periodic position updates.
pub trait LocationClient: Send + Sync {
    /// Open a stream of fixes delivered at `interval`.
    ///
    /// Preconditions are checked synchronously, before any subscription is
    /// created: location permission first, then provider enablement.
    ///
    /// # Errors
    ///
    /// [`LocationError::PermissionDenied`] when location access is not
    /// granted, [`LocationError::SourceUnavailable`] when no positioning
    /// mechanism is enabled, [`LocationError::Subscription`] when the
    /// source rejects the registration.
    fn open(&self, interval: Duration) -> Result<LocationUpdates, LocationError>;
}

/// Releases the subscription exactly once, on drop at the latest.
struct SubscriptionGuard {
    source: Arc<dyn PositionSource>,
    handle: Option<SubscriptionHandle>,
}

impl SubscriptionGuard {
    /// Release the subscription with the source. Idempotent.
    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unsubscribe(handle);
            debug!(handle = handle.raw(), "location subscription released");
        }
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Ordered, lazily consumed sequence of position fixes.
///
/// Owns the subscription for one open→cancel cycle. Dropping the stream
/// releases the subscription just as [`cancel`](Self::cancel) does; both
/// paths release exactly once.
pub struct LocationUpdates {
    rx: mpsc::Receiver<PositionFix>,
    guard: SubscriptionGuard,
}

impl LocationUpdates {
    /// Wait for the next fix, in source-delivery order.
    ///
    /// Returns `None` once the source has terminated the subscription or
    /// the stream was cancelled.
    pub async fn next(&mut self) -> Option<PositionFix> {
        self.rx.recv().await
    }

    /// Release the subscription and terminate the sequence.
    ///
    /// Idempotent. A fix still pending in the slot is discarded.
    pub fn cancel(&mut self) {
        self.guard.release();
        self.rx.close();
    }
}

/// Adapter from the push-based source to [`LocationUpdates`].
pub struct StreamingLocationClient {
    permissions: Arc<dyn PermissionProbe>,
    source: Arc<dyn PositionSource>,
}

impl StreamingLocationClient {
    /// Create a client over the given collaborators.
    pub fn new(permissions: Arc<dyn PermissionProbe>, source: Arc<dyn PositionSource>) -> Self {
        Self {
            permissions,
            source,
        }
    }
}

impl LocationClient for StreamingLocationClient {
    fn open(&self, interval: Duration) -> Result<LocationUpdates, LocationError> {
        if !self.permissions.location_allowed() {
            return Err(LocationError::PermissionDenied);
        }
        if !self.source.provider_status().any_enabled() {
            return Err(LocationError::SourceUnavailable);
        }

        let (tx, rx) = mpsc::channel(PENDING_FIX_SLOTS);
        let callback = Box::new(move |batch: Vec<PositionFix>| {
            // The source may coalesce several fixes into one delivery;
            // only the most recent one is meaningful.
            let Some(fix) = batch.last().copied() else {
                return;
            };
            match tx.try_send(fix) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    debug!("pending fix slot full, dropping delivery");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {}
            }
        });

        let handle = self
            .source
            .subscribe(SubscriptionRequest::periodic(interval), callback)?;
        debug!(
            handle = handle.raw(),
            interval_ms = interval.as_millis() as u64,
            "location subscription opened"
        );

        Ok(LocationUpdates {
            rx,
            guard: SubscriptionGuard {
                source: Arc::clone(&self.source),
                handle: Some(handle),
            },
        })
    }
}
