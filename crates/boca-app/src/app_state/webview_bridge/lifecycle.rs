//! WebView upkeep: sync bounds with the window and drain engine events.

use boca_webview::{PageLoadState, WebViewEvent};

use crate::app_state::core::BocaApp;

use super::bounds::window_bounds;

impl BocaApp {
    /// Resize the webview to fill the window.
    pub(in crate::app_state) fn sync_webview_bounds(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let bounds = window_bounds(window);
        if let Some(handle) = self.view.surface() {
            if let Err(e) = handle.set_bounds(bounds) {
                tracing::warn!(error = %e, "Failed to update webview bounds");
            }
        }
    }

    /// Drain events collected by the webview handlers and apply them.
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };
        for event in events {
            self.handle_webview_event(event);
        }
    }

    fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::PageLoad {
                state: PageLoadState::Started,
                url,
            } => {
                let can_go_back = self
                    .view
                    .surface_mut()
                    .is_some_and(|handle| handle.record_navigation(&url));
                self.view.on_navigation(&url, can_go_back);
                self.view.on_load_started();
            }
            WebViewEvent::PageLoad {
                state: PageLoadState::Finished,
                url,
            } => {
                tracing::debug!(url = %url, "page finished loading");
                self.view.on_load_finished();
            }
            WebViewEvent::TitleChanged { title } => self.page_title = title,
            WebViewEvent::IpcMessage { source_url, body } => {
                self.handle_ipc_message(&source_url, &body);
            }
            WebViewEvent::NavigationAllowed { url } => {
                tracing::debug!(url = %url, "navigation allowed");
            }
            WebViewEvent::NavigationBlocked { url } => {
                tracing::info!(url = %url, "navigation outside allowed origins blocked");
            }
            WebViewEvent::LoadFailed { url } => {
                tracing::warn!(url = %url, "page failed to load");
                let choice = self.view.on_load_error(self.prompter.as_mut());
                tracing::debug!(?choice, "load error prompt answered");
            }
        }
    }
}
