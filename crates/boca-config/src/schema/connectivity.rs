//! Reachability probing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectivityConfig {
    /// URL probed to decide whether the shell is online. Empty = site base URL.
    pub probe_url: String,
    /// Seconds between probes (valid range: 1-3600).
    pub interval_secs: u32,
    /// Per-probe timeout in seconds (valid range: 1-120, at most `interval_secs`).
    pub timeout_secs: u32,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            probe_url: String::new(),
            interval_secs: 5,
            timeout_secs: 4,
        }
    }
}

impl ConnectivityConfig {
    /// The effective probe URL, falling back to `base_url`.
    pub fn probe_url<'a>(&'a self, base_url: &'a str) -> &'a str {
        if self.probe_url.trim().is_empty() {
            base_url
        } else {
            &self.probe_url
        }
    }
}
