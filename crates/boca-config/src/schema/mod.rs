//! Configuration schema types for the Boca shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the shipped defaults.

mod bridge;
mod connectivity;
mod deep_link;
mod services;
mod site;
mod system;
mod webview;

pub use bridge::*;
pub use connectivity::*;
pub use deep_link::*;
pub use services::*;
pub use site::*;
pub use system::*;
pub use webview::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct BocaConfig {
    pub site: SiteConfig,
    pub deep_link: DeepLinkConfig,
    pub webview: WebViewSettings,
    pub connectivity: ConnectivityConfig,
    pub bridge: BridgeConfig,
    pub calendar: CalendarConfig,
    pub notifications: NotificationsConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_site() {
        let config = BocaConfig::default();
        assert_eq!(config.site.base_url, "https://israeliparliament.org/boca/user/");
        assert_eq!(config.site.title, "Boca Parliament");
        assert!(config.site.allowed_origins.is_empty());
    }

    #[test]
    fn start_url_falls_back_to_base() {
        let mut site = SiteConfig::default();
        assert_eq!(site.start_url(), site.base_url);

        site.start_url = "https://israeliparliament.org/boca/user/events".into();
        assert_eq!(
            site.start_url(),
            "https://israeliparliament.org/boca/user/events"
        );
    }

    #[test]
    fn share_text_substitutes_url() {
        let site = SiteConfig::default();
        assert_eq!(
            site.share_text("https://israeliparliament.org/boca/user/x"),
            "Check out Boca Parliament: https://israeliparliament.org/boca/user/x"
        );
    }

    #[test]
    fn default_deep_link_prefix() {
        let config = BocaConfig::default();
        assert_eq!(config.deep_link.prefix(), "bocaparliament://");
        assert_eq!(config.deep_link.forward_port, 47621);
    }

    #[test]
    fn probe_url_falls_back_to_base() {
        let config = BocaConfig::default();
        assert_eq!(
            config.connectivity.probe_url(&config.site.base_url),
            config.site.base_url
        );

        let connectivity = ConnectivityConfig {
            probe_url: "https://example.org/health".into(),
            ..Default::default()
        };
        assert_eq!(
            connectivity.probe_url("https://ignored/"),
            "https://example.org/health"
        );
    }

    #[test]
    fn default_services() {
        let config = BocaConfig::default();
        assert!(config.bridge.calendar_enabled);
        assert_eq!(config.bridge.max_message_bytes, 65536);
        assert!(config.notifications.enabled);
        assert_eq!(config.notifications.token_key, "fcm_token");
        assert!(config.calendar.open_after_save);
        assert!(config.webview.cache_enabled);
    }

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::Info.directive(), "boca=info");
        assert_eq!(LogLevel::Debug.directive(), "boca=debug");
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: BocaConfig = toml::from_str("[connectivity]\ninterval_secs = 30\n").unwrap();
        assert_eq!(config.connectivity.interval_secs, 30);
        assert_eq!(config.connectivity.timeout_secs, 4);
        assert_eq!(config.site.title, "Boca Parliament");
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: BocaConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }
}
