//! Simulated position source.
//!
//! Walks a synthetic route, pushing one-fix batches through the registered
//! callback at the requested cadence. Each subscription gets its own
//! ticker task; unsubscribing cancels it.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;
use tracing::debug;

use geotrack::location::{
    PositionCallback, PositionFix, PositionSource, ProviderStatus, SubscriptionError,
    SubscriptionHandle, SubscriptionRequest,
};

/// Route parameters for the simulated walk.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Route origin (latitude, longitude).
    pub origin: (f64, f64),

    /// Per-tick displacement in degrees.
    pub step: (f64, f64),
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            origin: (53.630278, 9.988333),
            step: (0.00012, 0.00021),
        }
    }
}

/// Push-based position source fed by a synthetic route.
///
/// `subscribe` must be called from within a tokio runtime.
pub struct SimulatedPositionSource {
    config: SimConfig,
    providers: ProviderStatus,
    next_handle: AtomicU64,
    tickers: Mutex<HashMap<SubscriptionHandle, CancellationToken>>,
}

impl SimulatedPositionSource {
    /// Create a source walking from `config.origin` with the given
    /// provider enablement.
    pub fn new(config: SimConfig, providers: ProviderStatus) -> Self {
        Self {
            config,
            providers,
            next_handle: AtomicU64::new(0),
            tickers: Mutex::new(HashMap::new()),
        }
    }
}

impl PositionSource for SimulatedPositionSource {
    fn provider_status(&self) -> ProviderStatus {
        self.providers
    }

    fn subscribe(
        &self,
        request: SubscriptionRequest,
        mut callback: PositionCallback,
    ) -> Result<SubscriptionHandle, SubscriptionError> {
        let handle = SubscriptionHandle::new(self.next_handle.fetch_add(1, Ordering::SeqCst) + 1);
        let cancel = CancellationToken::new();
        self.tickers.lock().unwrap().insert(handle, cancel.clone());

        let (mut latitude, mut longitude) = self.config.origin;
        let (step_lat, step_lon) = self.config.step;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(request.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        latitude += step_lat;
                        longitude += step_lon;
                        callback(vec![PositionFix::new(latitude, longitude)]);
                    }
                }
            }
            debug!(handle = handle.raw(), "simulated subscription ended");
        });

        debug!(
            handle = handle.raw(),
            interval_ms = request.interval.as_millis() as u64,
            "simulated subscription opened"
        );
        Ok(handle)
    }

    fn unsubscribe(&self, handle: SubscriptionHandle) {
        if let Some(cancel) = self.tickers.lock().unwrap().remove(&handle) {
            cancel.cancel();
        }
    }
}
