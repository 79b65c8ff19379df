//! Console-backed collaborators.
//!
//! Terminal stand-ins for the platform services the supervisor talks to:
//! the status indicator becomes a printed status line, the keep-alive
//! becomes a log entry, the permission probe answers from a launch flag.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

use geotrack::location::PermissionProbe;
use geotrack::tracking::{IndicatorError, IndicatorId, KeepAlive, StatusIndicator};

/// Status indicator rendered as console lines.
///
/// Updates reuse the id printed at creation, so the reader can follow one
/// indicator across its lifetime.
pub struct ConsoleIndicator {
    next_id: AtomicU64,
    active: Mutex<HashSet<IndicatorId>>,
}

impl ConsoleIndicator {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            active: Mutex::new(HashSet::new()),
        }
    }
}

impl StatusIndicator for ConsoleIndicator {
    fn create(&self, text: &str) -> IndicatorId {
        let id = IndicatorId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.active.lock().unwrap().insert(id);
        println!("[status {}] {}", id.raw(), text);
        id
    }

    fn update(&self, id: IndicatorId, text: &str) -> Result<(), IndicatorError> {
        if !self.active.lock().unwrap().contains(&id) {
            return Err(IndicatorError::new(format!(
                "no such indicator: {}",
                id.raw()
            )));
        }
        println!("[status {}] {}", id.raw(), text);
        Ok(())
    }

    fn retract(&self, id: IndicatorId) {
        if self.active.lock().unwrap().remove(&id) {
            println!("[status {}] retracted", id.raw());
        }
    }
}

/// Keep-alive that only records the transitions in the log.
pub struct LogKeepAlive;

impl KeepAlive for LogKeepAlive {
    fn acquire(&self) {
        info!("keep-alive acquired, task marked non-terminable");
    }

    fn release(&self) {
        info!("keep-alive released");
    }
}

/// Permission probe answering from a fixed grant.
pub struct StaticPermissionProbe {
    granted: bool,
}

impl StaticPermissionProbe {
    pub fn new(granted: bool) -> Self {
        Self { granted }
    }
}

impl PermissionProbe for StaticPermissionProbe {
    fn location_allowed(&self) -> bool {
        self.granted
    }
}
