//! Polling of background channels on each loop tick.

use std::sync::mpsc::TryRecvError as ServiceTryRecvError;
use std::time::Instant;

use tokio::sync::broadcast::error::TryRecvError;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use boca_common::ShellEvent;

use super::core::BocaApp;
use super::types::POLL_INTERVAL;

impl BocaApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_shell_events();
            self.poll_service_events();
            self.poll_webview_events();
            self.update_window_title();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Drain the event bus: reachability reports, forwarded links, push.
    pub(super) fn poll_shell_events(&mut self) {
        loop {
            let event = match self.shell_rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Shell event receiver lagged");
                    continue;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            };
            self.handle_shell_event(event);
        }
    }

    fn handle_shell_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Connectivity { connected } => self.handle_connectivity(connected),
            ShellEvent::LinkActivated(link) => self.handle_link(&link),
            ShellEvent::PushTokenRefreshed(_) => {
                tracing::info!("Push token refreshed");
            }
            ShellEvent::PushMessage { title, .. } => {
                tracing::info!(title = %title, "Push message received");
            }
            ShellEvent::Shutdown => self.should_exit = true,
            ShellEvent::Unknown => {}
        }
    }

    pub(super) fn poll_service_events(&mut self) {
        loop {
            match self.service_rx.try_recv() {
                Ok(event) => self.handle_service_event(event),
                Err(ServiceTryRecvError::Empty) | Err(ServiceTryRecvError::Disconnected) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use boca_common::ShellEvent;
    use boca_platform::CalendarOutcome;
    use boca_shell::Content;

    use crate::app_state::test_support::app;
    use crate::app_state::types::ServiceEvent;

    #[test]
    fn forwarded_link_replaces_initial_url_before_mount() {
        let (mut app, _) = app();
        app.event_bus
            .publish(ShellEvent::LinkActivated("bocaparliament://events/7".into()));
        app.poll_shell_events();
        assert_eq!(
            app.view.state().current_url,
            "https://israeliparliament.org/boca/user/events/7"
        );
    }

    #[test]
    fn foreign_link_is_ignored() {
        let (mut app, _) = app();
        let before = app.view.state().current_url.clone();
        app.event_bus
            .publish(ShellEvent::LinkActivated("https://evil.example/phish".into()));
        app.poll_shell_events();
        assert_eq!(app.view.state().current_url, before);
    }

    #[test]
    fn one_alert_per_connectivity_drop() {
        let (mut app, titles) = app();
        for connected in [true, false, false, true, false] {
            app.event_bus.publish(ShellEvent::Connectivity { connected });
        }
        app.poll_shell_events();
        assert!(!app.monitor.is_connected());
        assert_eq!(app.view.content(), Content::Offline);
        assert_eq!(
            titles.lock().unwrap().as_slice(),
            ["No Internet Connection", "No Internet Connection"]
        );
    }

    #[test]
    fn shutdown_event_requests_exit() {
        let (mut app, _) = app();
        app.event_bus.publish(ShellEvent::Shutdown);
        app.poll_shell_events();
        assert!(app.should_exit);
    }

    #[test]
    fn added_calendar_events_are_drained() {
        let (mut app, titles) = app();
        app.service_tx
            .send(ServiceEvent::Calendar {
                title: "Town hall".into(),
                outcome: CalendarOutcome::Added(Some("abc@boca".into())),
            })
            .unwrap();
        app.poll_service_events();
        assert!(app.service_rx.try_recv().is_err());
        assert!(titles.lock().unwrap().is_empty());
    }
}
