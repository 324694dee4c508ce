//! Deep link router: custom-scheme URL to canonical site URL.

use boca_common::DeepLinkError;
use boca_config::BocaConfig;
use tracing::{debug, warn};

use crate::origin::OriginPolicy;

#[derive(Debug, Clone)]
pub struct DeepLinkRouter {
    prefix: String,
    base_url: String,
    policy: OriginPolicy,
}

impl DeepLinkRouter {
    pub fn new(scheme: &str, base_url: &str, policy: OriginPolicy) -> Self {
        Self {
            prefix: format!("{scheme}://"),
            base_url: base_url.to_string(),
            policy,
        }
    }

    pub fn from_config(config: &BocaConfig, policy: OriginPolicy) -> Self {
        Self::new(&config.deep_link.scheme, &config.site.base_url, policy)
    }

    /// Literal prefix substitution. URLs without the custom prefix are
    /// returned unchanged.
    pub fn rewrite(&self, url: &str) -> String {
        let url = url.trim();
        match url.get(..self.prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(&self.prefix) => {
                format!("{}{}", self.base_url, &url[self.prefix.len()..])
            }
            _ => url.to_string(),
        }
    }

    /// Rewrite, then require the result to stay on an allowed origin.
    ///
    /// Used for both cold-start and live links.
    pub fn resolve(&self, url: &str) -> Result<String, DeepLinkError> {
        let rewritten = self.rewrite(url);
        let parsed = url::Url::parse(&rewritten)
            .map_err(|e| DeepLinkError::InvalidUrl(format!("{rewritten}: {e}")))?;
        if !self.policy.allows_url(&parsed) {
            return Err(DeepLinkError::OriginRejected(rewritten));
        }
        debug!(from = url, to = %rewritten, "deep link resolved");
        Ok(rewritten)
    }

    /// The URL to open first: the launching link when it resolves, the
    /// start URL otherwise.
    pub fn initial_url(&self, link: Option<&str>, start_url: &str) -> String {
        match link.map(|l| self.resolve(l)) {
            Some(Ok(url)) => url,
            Some(Err(e)) => {
                warn!("ignoring launch link: {e}");
                start_url.to_string()
            }
            None => start_url.to_string(),
        }
    }
}
