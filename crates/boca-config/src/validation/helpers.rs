//! Shared validation helpers used by all domain validators.

use url::Url;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is an absolute http(s) URL with a host.
/// Returns the parsed URL when it is usable.
pub(crate) fn validate_web_url(errors: &mut Vec<String>, name: &str, value: &str) -> Option<Url> {
    match Url::parse(value) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            errors.push(format!("{name} must use http or https, got '{value}'"));
            None
        }
        Ok(url) if url.host_str().is_none() => {
            errors.push(format!("{name} has no host: '{value}'"));
            None
        }
        Ok(url) => Some(url),
        Err(e) => {
            errors.push(format!("{name} is not a valid URL ('{value}'): {e}"));
            None
        }
    }
}
