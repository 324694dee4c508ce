//! Tests for the validation orchestrator.

use super::*;
use crate::schema::BocaConfig;

fn error_text(config: &BocaConfig) -> String {
    match validate(config) {
        Err(ConfigError::ValidationError(msg)) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn default_config_is_valid() {
    assert!(validate(&BocaConfig::default()).is_ok());
}

#[test]
fn base_url_must_end_with_slash() {
    let mut config = BocaConfig::default();
    config.site.base_url = "https://example.org/app".into();
    assert!(error_text(&config).contains("must end with '/'"));
}

#[test]
fn base_url_must_be_http() {
    let mut config = BocaConfig::default();
    config.site.base_url = "ftp://example.org/".into();
    assert!(error_text(&config).contains("http or https"));
}

#[test]
fn base_url_garbage_rejected() {
    let mut config = BocaConfig::default();
    config.site.base_url = "not a url".into();
    assert!(error_text(&config).contains("site.base_url is not a valid URL"));
}

#[test]
fn share_message_needs_placeholder() {
    let mut config = BocaConfig::default();
    config.site.share_message = "Check this out".into();
    assert!(error_text(&config).contains("{url}"));
}

#[test]
fn bad_extra_origin_reported_with_index() {
    let mut config = BocaConfig::default();
    config.site.allowed_origins = vec!["https://ok.example".into(), "javascript:alert(1)".into()];
    assert!(error_text(&config).contains("site.allowed_origins[1]"));
}

#[test]
fn reserved_scheme_rejected() {
    let mut config = BocaConfig::default();
    config.deep_link.scheme = "https".into();
    assert!(error_text(&config).contains("reserved"));
}

#[test]
fn timeout_must_not_exceed_interval() {
    let mut config = BocaConfig::default();
    config.connectivity.interval_secs = 2;
    config.connectivity.timeout_secs = 10;
    assert!(error_text(&config).contains("must not exceed"));
}

#[test]
fn ranges_checked() {
    let mut config = BocaConfig::default();
    config.connectivity.interval_secs = 0;
    config.bridge.max_message_bytes = 10;
    let msg = error_text(&config);
    assert!(msg.contains("connectivity.interval_secs = 0"));
    assert!(msg.contains("bridge.max_message_bytes = 10"));
}

#[test]
fn multiple_errors_collected() {
    let mut config = BocaConfig::default();
    config.site.base_url = "nope".into();
    config.notifications.token_key = " ".into();
    let msg = error_text(&config);
    assert!(msg.contains("site.base_url"));
    assert!(msg.contains("notifications.token_key"));
    assert!(msg.contains("; "));
}
