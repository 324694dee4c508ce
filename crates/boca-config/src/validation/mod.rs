//! Full configuration validation.
//!
//! Validates URLs, the deep-link scheme, and numeric ranges. Each domain
//! has its own submodule; this orchestrator calls them all and collects
//! errors into a single `ConfigError`.

mod helpers;
mod misc;
mod site;

#[cfg(test)]
mod tests;

use crate::schema::BocaConfig;
use boca_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BocaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    site::validate_site(&mut errors, config);
    site::validate_deep_link(&mut errors, config);
    misc::validate_connectivity(&mut errors, config);
    misc::validate_bridge(&mut errors, config);
    misc::validate_notifications(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
