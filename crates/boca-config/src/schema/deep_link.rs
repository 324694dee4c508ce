//! Deep link configuration.

use serde::{Deserialize, Serialize};

/// Custom URL scheme handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepLinkConfig {
    /// Scheme name without `://`.
    pub scheme: String,
    /// Loopback port a second launch uses to hand its link to the running
    /// instance. 0 disables forwarding.
    pub forward_port: u16,
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            scheme: "bocaparliament".into(),
            forward_port: 47621,
        }
    }
}

impl DeepLinkConfig {
    /// The literal prefix replaced during rewriting, e.g. `bocaparliament://`.
    pub fn prefix(&self) -> String {
        format!("{}://", self.scheme)
    }
}
