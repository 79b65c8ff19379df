//! Tracking Supervisor
//!
//! Command-driven lifecycle control for background position tracking. The
//! supervisor is a two-state machine (Idle ⇄ Running): a start command
//! opens one location stream, publishes a status indicator and marks the
//! hosting task non-terminable; a stop command (or external destruction)
//! cancels the stream, retracts the indicator and releases the keep-alive.
//!
//! A Running period owns exactly one open subscription and one visible
//! indicator; Idle owns neither.
//!
//! # Components
//!
//! - [`command`] - `TrackingCommand`, the external START/STOP intake
//! - [`supervisor`] - `TrackingSupervisor`, the lifecycle state machine
//! - [`indicator`] - `StatusIndicator` collaborator and indicator text
//! - [`keep_alive`] - `KeepAlive` collaborator

mod command;
mod indicator;
mod keep_alive;
mod supervisor;

pub use command::TrackingCommand;
pub use indicator::{
    IndicatorError, IndicatorId, StatusIndicator, UNKNOWN_POSITION_TEXT, format_fix,
};
pub use keep_alive::KeepAlive;
pub use supervisor::TrackingSupervisor;
