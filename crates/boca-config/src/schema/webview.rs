//! Embedded surface settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Custom user agent. Empty uses the engine default.
    pub user_agent: String,
    pub devtools: bool,
    /// Keep the engine's persistent cache (prefer cache, fall back to network).
    /// When false the surface runs in an ephemeral session.
    pub cache_enabled: bool,
    pub autoplay: bool,
    pub clipboard: bool,
    pub back_navigation_gestures: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            user_agent: String::new(),
            devtools: cfg!(debug_assertions),
            cache_enabled: true,
            autoplay: true,
            clipboard: true,
            back_navigation_gestures: true,
        }
    }
}
