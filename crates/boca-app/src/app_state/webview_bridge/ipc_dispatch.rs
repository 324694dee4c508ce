//! Dispatch of bridge actions posted by page script.

use boca_platform::{ClipboardShare, ShareRequest, ShareSheet};
use boca_shell::BridgeAction;

use crate::app_state::core::BocaApp;

impl BocaApp {
    /// Route a raw IPC body through the bridge and act on the result.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, source_url: &str, body: &str) {
        let current = self.view.state().current_url.clone();
        let Some(action) = self.bridge.route(source_url, body, &current) else {
            return;
        };
        tracing::debug!(source = %source_url, ?action, "bridge action");
        self.dispatch_bridge_action(action);
    }

    pub(in crate::app_state) fn dispatch_bridge_action(&mut self, action: BridgeAction) {
        match action {
            BridgeAction::Share(request) => self.share(&request),
            BridgeAction::AddToCalendar(event) => self.add_to_calendar(event),
            BridgeAction::PageLoaded(url) => {
                tracing::debug!(url = %url, "page reported loaded");
            }
            BridgeAction::Retry => self.retry_connection(),
            BridgeAction::Back => self.handle_back_key(),
            BridgeAction::Reload => self.view.reload(),
        }
    }

    /// The clipboard is opened on first use.
    fn share(&mut self, request: &ShareRequest) {
        if self.share.is_none() {
            match ClipboardShare::new() {
                Ok(sheet) => self.share = Some(sheet),
                Err(e) => {
                    tracing::warn!("Share unavailable: {e}");
                    return;
                }
            }
        }
        if let Some(sheet) = self.share.as_mut() {
            if let Err(e) = sheet.share(request) {
                tracing::warn!(url = %request.url, "Share failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use boca_shell::Content;

    use crate::app_state::test_support::app;

    const PAGE: &str = "https://israeliparliament.org/boca/user/events";

    #[test]
    fn forwarded_keys_without_history_are_harmless() {
        let (mut app, _) = app();
        app.handle_ipc_message(PAGE, r#"{"type":"back"}"#);
        app.handle_ipc_message(PAGE, r#"{"type":"reload"}"#);
        assert_eq!(app.view.content(), Content::Live);
        assert!(!app.view.state().can_go_back);
    }

    #[test]
    fn offline_document_retry_stays_offline_until_a_report() {
        let (mut app, _) = app();
        app.monitor.report(false);
        app.view.set_connected(false);
        app.handle_ipc_message("about:blank", r#"{"type":"retry"}"#);
        assert_eq!(app.view.content(), Content::Offline);
    }
}
