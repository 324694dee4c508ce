//! Reachability probe startup and connectivity transitions.

use std::time::Duration;

use boca_common::Alert;
use boca_shell::{check_now, spawn_probe, ConnectivityTransition, HttpReachability};

use super::core::BocaApp;

impl BocaApp {
    pub(super) fn start_connectivity_probe(&mut self) {
        if !self.ensure_runtime() {
            return;
        }
        let cfg = &self.config.connectivity;
        let url = cfg.probe_url(&self.config.site.base_url).to_string();
        let interval = Duration::from_secs(u64::from(cfg.interval_secs));
        let timeout = Duration::from_secs(u64::from(cfg.timeout_secs));

        let probe = match HttpReachability::new(url.clone(), timeout) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("Reachability probe unavailable: {e}");
                return;
            }
        };
        let events = self.event_bus.sender();
        if let Some(rt) = &self.tokio_runtime {
            let _guard = rt.enter();
            spawn_probe(probe.clone(), interval, events);
            tracing::info!(url = %url, ?interval, "Reachability probe started");
        }
        self.reachability = Some(probe);
    }

    /// Retry from the offline document. The offline page is re-rendered at
    /// once and a reachability check runs immediately; its report brings
    /// the site back if the network has returned.
    pub(super) fn retry_connection(&mut self) {
        self.view.retry();
        if self.monitor.is_connected() {
            return;
        }
        let (Some(rt), Some(reachability)) = (&self.tokio_runtime, &self.reachability) else {
            tracing::debug!("No reachability check configured; waiting for the next report");
            return;
        };
        let reachability = reachability.clone();
        let events = self.event_bus.sender();
        rt.spawn(async move {
            check_now(&reachability, &events).await;
        });
    }

    /// Apply a reachability report. Only real transitions change what is
    /// shown, and each drop raises one alert.
    pub(super) fn handle_connectivity(&mut self, connected: bool) {
        let Some(transition) = self.monitor.report(connected) else {
            return;
        };
        self.view.set_connected(connected);
        if transition == ConnectivityTransition::WentOffline {
            self.prompter_alert(&Alert::no_connection());
        }
    }
}
