//! Graceful shutdown: stop background tasks, then drop the webview.

use std::time::Duration;

use boca_common::ShellEvent;

use super::core::BocaApp;

impl BocaApp {
    /// Ctrl+C in the launching terminal shuts down through the event loop
    /// instead of killing the process mid-frame.
    pub(super) fn start_signal_listener(&mut self) {
        if !self.ensure_runtime() {
            return;
        }
        let events = self.event_bus.sender();
        if let Some(rt) = &self.tokio_runtime {
            rt.spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        tracing::info!("Interrupt received");
                        let _ = events.send(ShellEvent::Shutdown);
                    }
                    Err(e) => tracing::warn!("Interrupt handler unavailable: {e}"),
                }
            });
        }
    }

    /// Perform graceful shutdown of all subsystems.
    ///
    /// Collaborators go first so no task outlives the runtime, then the
    /// runtime (probe, link listener, push listener), then the webview.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.services = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        if self.view.unmount().is_some() {
            tracing::debug!("webview dropped");
        }
        self.webviews = None;
        self.share = None;

        tracing::info!("Graceful shutdown complete");
    }
}
