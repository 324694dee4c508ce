//! Connectivity, bridge, and notification validation.

use crate::schema::BocaConfig;

use super::helpers::{validate_range, validate_web_url};

pub(super) fn validate_connectivity(errors: &mut Vec<String>, config: &BocaConfig) {
    let c = &config.connectivity;
    validate_range(errors, "connectivity.interval_secs", c.interval_secs, 1, 3600);
    validate_range(errors, "connectivity.timeout_secs", c.timeout_secs, 1, 120);
    if c.timeout_secs > c.interval_secs {
        errors.push(format!(
            "connectivity.timeout_secs ({}) must not exceed interval_secs ({})",
            c.timeout_secs, c.interval_secs
        ));
    }
    if !c.probe_url.trim().is_empty() {
        validate_web_url(errors, "connectivity.probe_url", &c.probe_url);
    }
}

pub(super) fn validate_bridge(errors: &mut Vec<String>, config: &BocaConfig) {
    validate_range(
        errors,
        "bridge.max_message_bytes",
        config.bridge.max_message_bytes,
        256,
        1_048_576,
    );
}

pub(super) fn validate_notifications(errors: &mut Vec<String>, config: &BocaConfig) {
    if config.notifications.token_key.trim().is_empty() {
        errors.push("notifications.token_key must not be empty".into());
    }
}
