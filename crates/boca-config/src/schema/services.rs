//! Calendar and push-notification collaborator settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Directory receiving `.ics` files. Empty = `<data dir>/calendar`.
    pub directory: String,
    /// Hand each saved event to the OS calendar application.
    pub open_after_save: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            directory: String::new(),
            open_after_save: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub enabled: bool,
    /// Storage key the push registration token is persisted under.
    pub token_key: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            token_key: "fcm_token".into(),
        }
    }
}
