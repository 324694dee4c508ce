//! Blocking native dialogs (`rfd`) behind the shell's `Prompter` trait.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use boca_common::{Alert, AlertButtons, AlertChoice, AlertLevel};
use boca_shell::Prompter;

use super::core::BocaApp;

const RETRY: &str = "Retry";
const CANCEL: &str = "Cancel";

pub(super) struct DialogPrompter;

impl DialogPrompter {
    pub(super) fn new() -> Self {
        Self
    }
}

impl Prompter for DialogPrompter {
    fn prompt(&mut self, alert: &Alert) -> AlertChoice {
        tracing::debug!(title = %alert.title, "showing alert");
        let result = MessageDialog::new()
            .set_level(level(alert.level))
            .set_title(&alert.title)
            .set_description(&alert.body)
            .set_buttons(buttons(alert.buttons))
            .show();
        choice(alert.buttons, result)
    }
}

impl BocaApp {
    /// Show a blocking alert and return the user's choice.
    pub(super) fn prompter_alert(&mut self, alert: &Alert) -> AlertChoice {
        self.prompter.prompt(alert)
    }
}

fn level(level: AlertLevel) -> MessageLevel {
    match level {
        AlertLevel::Info => MessageLevel::Info,
        AlertLevel::Warning => MessageLevel::Warning,
        AlertLevel::Error => MessageLevel::Error,
    }
}

fn buttons(buttons: AlertButtons) -> MessageButtons {
    match buttons {
        AlertButtons::Ok => MessageButtons::Ok,
        AlertButtons::RetryCancel => {
            MessageButtons::OkCancelCustom(RETRY.to_string(), CANCEL.to_string())
        }
    }
}

/// Backends differ in what they report for custom buttons: some return the
/// label, some the standard button it replaced.
fn choice(buttons: AlertButtons, result: MessageDialogResult) -> AlertChoice {
    match buttons {
        AlertButtons::Ok => AlertChoice::Ok,
        AlertButtons::RetryCancel => match result {
            MessageDialogResult::Custom(label) if label == RETRY => AlertChoice::Retry,
            MessageDialogResult::Ok | MessageDialogResult::Yes => AlertChoice::Retry,
            _ => AlertChoice::Cancel,
        },
    }
}
