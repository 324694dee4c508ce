//! Page <-> shell message bridge limits.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Largest accepted message body (valid range: 256-1048576).
    pub max_message_bytes: u32,
    /// Forward `add-to-calendar` messages to the calendar collaborator.
    pub calendar_enabled: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: 64 * 1024,
            calendar_enabled: true,
        }
    }
}
