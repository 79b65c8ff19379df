//! Location Update Stream
//!
//! This module converts the external push-based position source into a
//! cancellable, lazily consumed sequence of position fixes, owning the
//! subscription's lifetime for one open→cancel cycle.
//!
//! # Architecture
//!
//! The external source pushes batches of fixes through a registered
//! callback. The adapter keeps only the most recent fix of each batch and
//! forwards it into a bounded single-slot channel; the consumer pulls fixes
//! one at a time from the other end. A release guard ties the subscription
//! to the stream's lifetime, so the registration is released on every exit
//! path - explicit cancellation, source termination, or the consumer simply
//! dropping the stream.
//!
//! # Usage
//!
//! ```ignore
//! use geotrack::location::{LocationClient, StreamingLocationClient};
//!
//! let client = StreamingLocationClient::new(permissions, source);
//! let mut updates = client.open(Duration::from_secs(10))?;
//!
//! while let Some(fix) = updates.next().await {
//!     println!("Position: {}, {}", fix.latitude, fix.longitude);
//! }
//! ```
//!
//! # Components
//!
//! - [`fix`] - `PositionFix`, the immutable position sample
//! - [`source`] - collaborator seams: `PermissionProbe`, `PositionSource`
//! - [`client`] - `LocationClient` trait, the `StreamingLocationClient`
//!   adapter and the `LocationUpdates` pull sequence
//! - [`error`] - `LocationError` and `SubscriptionError`

mod client;
mod error;
mod fix;
mod source;

pub use client::{LocationClient, LocationUpdates, StreamingLocationClient};
pub use error::{LocationError, SubscriptionError};
pub use fix::PositionFix;
pub use source::{
    PermissionProbe, PositionCallback, PositionSource, ProviderStatus, SubscriptionHandle,
    SubscriptionRequest,
};
