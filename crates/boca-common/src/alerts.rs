/// Severity level for blocking alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

/// The buttons an alert offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertButtons {
    /// A single acknowledge button.
    Ok,
    /// "Retry" plus a cancel button.
    RetryCancel,
}

/// What the user picked when the alert was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertChoice {
    Ok,
    Retry,
    Cancel,
}

/// A blocking, modal alert presented by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub body: String,
    pub buttons: AlertButtons,
}

impl Alert {
    /// An informational alert with a single OK button.
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Info,
            title: title.into(),
            body: body.into(),
            buttons: AlertButtons::Ok,
        }
    }

    /// A warning alert with a single OK button.
    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Warning,
            title: title.into(),
            body: body.into(),
            buttons: AlertButtons::Ok,
        }
    }

    /// An error alert with a single OK button.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Error,
            title: title.into(),
            body: body.into(),
            buttons: AlertButtons::Ok,
        }
    }

    /// Switch the alert to a retry/cancel choice.
    pub fn with_retry(mut self) -> Self {
        self.buttons = AlertButtons::RetryCancel;
        self
    }

    /// Raised on every transition to disconnected.
    pub fn no_connection() -> Self {
        Self::warning(
            "No Internet Connection",
            "Please check your internet connection and try again.",
        )
    }

    /// Raised when the embedded surface fails to load its content.
    pub fn connection_error() -> Self {
        Self::error(
            "Connection Error",
            "Unable to load the website. Please check your internet connection.",
        )
        .with_retry()
    }

    /// Raised when the calendar store fails to create an event.
    pub fn calendar_failed() -> Self {
        Self::error("Error", "Failed to add event to calendar")
    }

    /// Whether a choice means the user asked for a retry.
    pub fn is_retry(choice: AlertChoice) -> bool {
        choice == AlertChoice::Retry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_alert_has_ok_button() {
        let alert = Alert::info("Hello", "World");
        assert_eq!(alert.level, AlertLevel::Info);
        assert_eq!(alert.buttons, AlertButtons::Ok);
        assert_eq!(alert.title, "Hello");
        assert_eq!(alert.body, "World");
    }

    #[test]
    fn connection_error_offers_retry() {
        let alert = Alert::connection_error();
        assert_eq!(alert.level, AlertLevel::Error);
        assert_eq!(alert.buttons, AlertButtons::RetryCancel);
        assert_eq!(alert.title, "Connection Error");
    }

    #[test]
    fn no_connection_is_a_plain_warning() {
        let alert = Alert::no_connection();
        assert_eq!(alert.level, AlertLevel::Warning);
        assert_eq!(alert.buttons, AlertButtons::Ok);
        assert!(alert.body.contains("internet connection"));
    }

    #[test]
    fn calendar_failed_text() {
        let alert = Alert::calendar_failed();
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.body, "Failed to add event to calendar");
    }

    #[test]
    fn retry_choice_detection() {
        assert!(Alert::is_retry(AlertChoice::Retry));
        assert!(!Alert::is_retry(AlertChoice::Cancel));
        assert!(!Alert::is_retry(AlertChoice::Ok));
    }
}
