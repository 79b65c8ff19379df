//! GeoTrack - continuous background position tracking
//!
//! This library samples a device's position at a configurable interval and
//! surfaces each sample to a long-running supervisor that keeps a
//! user-visible status indicator current.
//!
//! # High-Level API
//!
//! The [`tracking`] module provides the command-driven supervisor; the
//! [`location`] module provides the stream adapter it consumes:
//!
//! ```ignore
//! use geotrack::config::TrackingConfig;
//! use geotrack::location::StreamingLocationClient;
//! use geotrack::tracking::{TrackingCommand, TrackingSupervisor};
//!
//! let client = Arc::new(StreamingLocationClient::new(permissions, source));
//! let supervisor = TrackingSupervisor::new(client, indicator, keep_alive, config);
//!
//! let (tx, rx) = tokio::sync::mpsc::channel(16);
//! tokio::spawn(supervisor.run(rx));
//!
//! tx.send(TrackingCommand::Start).await?;
//! ```

pub mod config;
pub mod location;
pub mod logging;
pub mod tracking;

/// Version of the GeoTrack library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
