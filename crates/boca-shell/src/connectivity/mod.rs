//! Connectivity monitor: collapses reachability reports into transitions.

mod probe;

pub use probe::{check_now, spawn_probe, HttpReachability, Reachability};

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityTransition {
    WentOffline,
    CameOnline,
}

/// Tracks the last reported state. Starts optimistic (connected).
#[derive(Debug)]
pub struct ConnectivityMonitor {
    connected: bool,
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self { connected: true }
    }
}

impl ConnectivityMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Record a report. Returns a transition only when the state changed.
    pub fn report(&mut self, connected: bool) -> Option<ConnectivityTransition> {
        if connected == self.connected {
            return None;
        }
        self.connected = connected;
        let transition = if connected {
            ConnectivityTransition::CameOnline
        } else {
            ConnectivityTransition::WentOffline
        };
        info!(?transition, "connectivity changed");
        Some(transition)
    }
}
