//! View controller: owns the single embedded surface and decides what it
//! shows.
//!
//! The surface shows the live site when connected and the offline document
//! when not, never both. Navigation events from the surface update the
//! tracked URL only when they stay on an allowed origin.

mod state;


pub use state::{Content, ViewState};

use boca_common::{Alert, AlertChoice, BocaError, DeepLinkError};
use tracing::{debug, info, warn};

use crate::bridge::OFFLINE_HTML;
use crate::origin::OriginPolicy;
use crate::surface::{Prompter, Surface};

pub struct ViewController<S: Surface> {
    surface: Option<S>,
    state: ViewState,
    content: Content,
    connected: bool,
    policy: OriginPolicy,
}

impl<S: Surface> ViewController<S> {
    pub fn new(start_url: impl Into<String>, policy: OriginPolicy) -> Self {
        Self {
            surface: None,
            state: ViewState::new(start_url),
            content: Content::Live,
            connected: true,
            policy,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn content(&self) -> Content {
        self.content
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Attach the surface and render the initial content.
    pub fn mount(&mut self, surface: S) {
        self.surface = Some(surface);
        info!(url = %self.state.current_url, connected = self.connected, "view mounted");
        self.render();
    }

    /// Detach the surface, e.g. on shutdown.
    pub fn unmount(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Open `url` (a resolved deep link). Before mount this only replaces
    /// the initial URL; while offline it is loaded on reconnect.
    pub fn navigate(&mut self, url: &str) -> Result<(), BocaError> {
        if !self.policy.allows(url) {
            return Err(DeepLinkError::OriginRejected(url.to_string()).into());
        }
        self.state.current_url = url.to_string();
        self.state.can_go_back = false;
        if self.connected && self.surface.is_some() {
            self.load_live();
        }
        Ok(())
    }

    /// A navigation reported by the surface. Returns whether it was recorded.
    pub fn on_navigation(&mut self, url: &str, can_go_back: bool) -> bool {
        if self.content == Content::Offline || OriginPolicy::is_blank(url) {
            return false;
        }
        if !self.policy.allows(url) {
            debug!(url, "navigation outside allowed origins not tracked");
            return false;
        }
        debug!(url, can_go_back, "navigation tracked");
        self.state.current_url = url.to_string();
        self.state.can_go_back = can_go_back;
        true
    }

    pub fn on_load_started(&mut self) {
        self.state.is_loading = true;
    }

    pub fn on_load_finished(&mut self) {
        self.state.is_loading = false;
    }

    /// Ask the user whether to retry a failed load. Cancel leaves the failed
    /// content on screen.
    pub fn on_load_error<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> AlertChoice {
        self.state.is_loading = false;
        let choice = prompter.prompt(&Alert::connection_error());
        if Alert::is_retry(choice) {
            self.retry();
        } else {
            debug!("load error dismissed");
        }
        choice
    }

    /// Hardware back. Returns `true` when the surface consumed it.
    pub fn handle_back(&mut self) -> bool {
        if self.content != Content::Live || !self.state.can_go_back {
            return false;
        }
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        match surface.go_back() {
            Ok(()) => true,
            Err(e) => {
                warn!("go back failed: {e}");
                false
            }
        }
    }

    /// Apply a connectivity state. Returns whether the content was swapped.
    pub fn set_connected(&mut self, connected: bool) -> bool {
        self.connected = connected;
        let wanted = if connected {
            Content::Live
        } else {
            Content::Offline
        };
        if wanted == self.content {
            return false;
        }
        self.render();
        true
    }

    /// Reload the current content. Offline, this only re-renders the
    /// offline document; bringing the site back is up to the next
    /// connectivity report, which the caller can request right away.
    pub fn retry(&mut self) {
        if self.surface.is_none() {
            return;
        }
        info!(connected = self.connected, "retry requested");
        self.render();
    }

    /// User-requested refresh of the page as the surface has it.
    pub fn reload(&mut self) {
        if self.content == Content::Offline {
            self.retry();
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        self.state.is_loading = true;
        if let Err(e) = surface.reload() {
            warn!("reload failed: {e}");
            self.state.is_loading = false;
        }
    }

    fn render(&mut self) {
        if self.connected {
            self.load_live();
        } else {
            self.load_offline();
        }
    }

    fn load_live(&mut self) {
        self.content = Content::Live;
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        self.state.is_loading = true;
        if let Err(e) = surface.load_url(&self.state.current_url) {
            warn!(url = %self.state.current_url, "load failed: {e}");
            self.state.is_loading = false;
        }
    }

    fn load_offline(&mut self) {
        self.content = Content::Offline;
        self.state.can_go_back = false;
        self.state.is_loading = false;
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if let Err(e) = surface.load_html(OFFLINE_HTML) {
            warn!("offline document failed to render: {e}");
        }
    }
}
