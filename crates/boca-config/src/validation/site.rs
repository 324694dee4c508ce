//! Site and deep-link validation.

use crate::schema::BocaConfig;

use super::helpers::validate_web_url;

pub(super) fn validate_site(errors: &mut Vec<String>, config: &BocaConfig) {
    let site = &config.site;

    if let Some(base) = validate_web_url(errors, "site.base_url", &site.base_url) {
        if !base.path().ends_with('/') {
            errors.push(format!(
                "site.base_url must end with '/', got '{}'",
                site.base_url
            ));
        }
        if base.query().is_some() || base.fragment().is_some() {
            errors.push("site.base_url must not carry a query or fragment".into());
        }
    }

    if !site.start_url.trim().is_empty() {
        validate_web_url(errors, "site.start_url", &site.start_url);
    }

    if !site.share_message.contains("{url}") {
        errors.push("site.share_message must contain the {url} placeholder".into());
    }

    for (i, origin) in site.allowed_origins.iter().enumerate() {
        validate_web_url(errors, &format!("site.allowed_origins[{i}]"), origin);
    }
}

pub(super) fn validate_deep_link(errors: &mut Vec<String>, config: &BocaConfig) {
    let scheme = &config.deep_link.scheme;
    if !is_valid_scheme(scheme) {
        errors.push(format!("deep_link.scheme '{scheme}' is not a valid URI scheme"));
    } else if matches!(
        scheme.to_ascii_lowercase().as_str(),
        "http" | "https" | "file" | "javascript" | "data" | "about"
    ) {
        errors.push(format!("deep_link.scheme '{scheme}' is reserved"));
    }
}

/// RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
