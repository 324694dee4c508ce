//! Live deep links: the forwarding listener and link activation.

use crate::link_forward;

use super::core::BocaApp;

impl BocaApp {
    pub(super) fn start_link_listener(&mut self) {
        let port = self.config.deep_link.forward_port;
        if port == 0 {
            tracing::info!("Link forwarding disabled");
            return;
        }
        if !self.ensure_runtime() {
            return;
        }
        let events = self.event_bus.sender();
        if let Some(rt) = &self.tokio_runtime {
            rt.spawn(async move {
                match link_forward::bind(port).await {
                    Ok(listener) => {
                        tracing::info!(port, "Link listener started");
                        link_forward::serve(listener, events).await;
                    }
                    Err(e) => tracing::warn!(port, "Link listener unavailable: {e}"),
                }
            });
        }
    }

    /// Resolve a link that arrived while running and navigate to it.
    pub(super) fn handle_link(&mut self, link: &str) {
        let url = match self.router.resolve(link) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(link, "Deep link ignored: {e}");
                return;
            }
        };
        if let Err(e) = self.view.navigate(&url) {
            tracing::warn!(url = %url, "Deep link navigation failed: {e}");
            return;
        }
        if let Some(w) = &self.window {
            w.focus_window();
        }
    }
}
