pub mod calendar;
pub mod crash_report;
pub mod notifications;
pub mod paths;
pub mod push;
pub mod share;
pub mod storage;

pub use calendar::{CalendarEvent, CalendarOutcome, CalendarService, CalendarStore, IcsCalendarStore};
pub use notifications::notify;
pub use paths::{
    cache_dir, calendar_dir, config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir,
    storage_file,
};
pub use push::{
    BackgroundHandler, LocalPushMessaging, NotificationService, PushMessage, PushMessaging,
};
pub use share::{ClipboardShare, ShareRequest, ShareSheet};
pub use storage::KeyValueStore;

/// Result of a platform permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    /// Granted with reduced capability (e.g. quiet notifications).
    Provisional,
    Denied,
}

impl PermissionStatus {
    /// Whether the capability may be used.
    pub fn is_allowed(self) -> bool {
        matches!(self, PermissionStatus::Granted | PermissionStatus::Provisional)
    }
}
