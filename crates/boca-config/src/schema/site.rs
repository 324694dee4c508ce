//! Site configuration: the canonical website the shell presents.

use serde::{Deserialize, Serialize};

/// Canonical website base URL.
pub const DEFAULT_BASE_URL: &str = "https://israeliparliament.org/boca/user/";

/// The canonical site and how it is presented and shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical base URL. Must be absolute and end with `/`.
    pub base_url: String,
    /// URL loaded on mount. Empty means `base_url`.
    pub start_url: String,
    /// App title, used for the window and the share sheet.
    pub title: String,
    /// Share text template. `{url}` is replaced with the current page URL.
    pub share_message: String,
    /// Extra origins (scheme://host[:port]) the surface may navigate to.
    pub allowed_origins: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            start_url: String::new(),
            title: "Boca Parliament".into(),
            share_message: "Check out Boca Parliament: {url}".into(),
            allowed_origins: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// The URL loaded when the surface mounts.
    pub fn start_url(&self) -> &str {
        if self.start_url.trim().is_empty() {
            &self.base_url
        } else {
            &self.start_url
        }
    }

    /// Render the share text for `url`.
    pub fn share_text(&self, url: &str) -> String {
        self.share_message.replace("{url}", url)
    }
}
