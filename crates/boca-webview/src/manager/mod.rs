//! WebView lifecycle management.
//!
//! `WebViewManager` builds the single `wry::WebView` and collects the
//! events its handlers fire, for the main event loop to drain.

use std::sync::{Arc, Mutex};

use boca_shell::OriginPolicy;

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

pub struct WebViewManager {
    /// Handlers push here; the main loop drains.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    policy: OriginPolicy,
}

impl WebViewManager {
    pub fn new(policy: OriginPolicy) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            policy,
        }
    }

    pub fn policy(&self) -> &OriginPolicy {
        &self.policy
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}
