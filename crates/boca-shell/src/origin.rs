//! Origin allow-list for the embedded surface.

use boca_common::ConfigError;
use boca_config::schema::SiteConfig;
use tracing::debug;
use url::{Origin, Url};

/// The set of origins the surface may navigate to and accept messages from.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    base: Url,
    origins: Vec<Origin>,
}

impl OriginPolicy {
    /// Build from the canonical base URL plus extra origins.
    pub fn new(base_url: &str, extra: &[String]) -> Result<Self, ConfigError> {
        let base = Url::parse(base_url)
            .map_err(|e| ConfigError::ValidationError(format!("site.base_url: {e}")))?;
        let mut origins = vec![base.origin()];
        for (i, raw) in extra.iter().enumerate() {
            let url = Url::parse(raw).map_err(|e| {
                ConfigError::ValidationError(format!("site.allowed_origins[{i}]: {e}"))
            })?;
            let origin = url.origin();
            if !origin.is_tuple() {
                return Err(ConfigError::ValidationError(format!(
                    "site.allowed_origins[{i}]: '{raw}' has no host"
                )));
            }
            if !origins.contains(&origin) {
                origins.push(origin);
            }
        }
        Ok(Self { base, origins })
    }

    pub fn from_config(site: &SiteConfig) -> Result<Self, ConfigError> {
        Self::new(&site.base_url, &site.allowed_origins)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Whether `url` parses and belongs to an allowed origin.
    pub fn allows(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => self.allows_url(&parsed),
            Err(_) => {
                debug!(url, "unparseable url rejected");
                false
            }
        }
    }

    pub fn allows_url(&self, url: &Url) -> bool {
        if !matches!(url.scheme(), "http" | "https") {
            return false;
        }
        self.origins.contains(&url.origin())
    }

    /// The blank document the offline page is rendered into.
    pub fn is_blank(url: &str) -> bool {
        url.is_empty() || url == "null" || url.starts_with("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> OriginPolicy {
        OriginPolicy::new(
            "https://israeliparliament.org/boca/user/",
            &["https://cdn.israeliparliament.org".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn allows_base_origin_paths() {
        let p = policy();
        assert!(p.allows("https://israeliparliament.org/boca/user/events/42"));
        assert!(p.allows("https://israeliparliament.org/other/page?x=1"));
        assert!(p.allows("https://cdn.israeliparliament.org/img.png"));
    }

    #[test]
    fn rejects_foreign_and_scripted_urls() {
        let p = policy();
        assert!(!p.allows("https://evil.example/"));
        assert!(!p.allows("http://israeliparliament.org/boca/user/"));
        assert!(!p.allows("https://israeliparliament.org:8443/"));
        assert!(!p.allows("javascript:alert(1)"));
        assert!(!p.allows("data:text/html,<h1>x</h1>"));
        assert!(!p.allows("file:///etc/passwd"));
        assert!(!p.allows("about:blank"));
        assert!(!p.allows("not a url"));
    }

    #[test]
    fn default_port_matches_implicit_port() {
        let p = policy();
        assert!(p.allows("https://israeliparliament.org:443/boca/user/"));
    }

    #[test]
    fn rejects_bad_extra_origin() {
        let err = OriginPolicy::new("https://a.org/", &["mailto:x@y.z".to_string()]).unwrap_err();
        assert!(err.to_string().contains("allowed_origins[0]"));
    }

    #[test]
    fn blank_detection() {
        assert!(OriginPolicy::is_blank("about:blank"));
        assert!(OriginPolicy::is_blank(""));
        assert!(!OriginPolicy::is_blank("https://israeliparliament.org/"));
    }

    #[test]
    fn from_default_site_config() {
        let p = OriginPolicy::from_config(&SiteConfig::default()).unwrap();
        assert_eq!(p.base().as_str(), "https://israeliparliament.org/boca/user/");
    }
}
