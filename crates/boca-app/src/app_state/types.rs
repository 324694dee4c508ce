//! Internal types and constants for the app state module.

use std::time::Duration;

use boca_platform::CalendarOutcome;

/// How often to poll for events.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Results reported back from async collaborator tasks.
#[derive(Debug)]
pub(super) enum ServiceEvent {
    Calendar { title: String, outcome: CalendarOutcome },
}
