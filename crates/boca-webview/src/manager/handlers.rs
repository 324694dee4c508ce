use std::sync::{Arc, Mutex};

use boca_shell::OriginPolicy;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// URL prefixes engines use for their own load-failure documents.
pub const ENGINE_ERROR_PREFIXES: &[&str] = &[
    "chrome-error://",
    "about:neterror",
    "about:certerror",
    "edge-error://",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationVerdict {
    Allow,
    Block,
    /// The engine is showing its error page for a failed load.
    LoadFailed,
}

pub fn is_engine_error_url(url: &str) -> bool {
    ENGINE_ERROR_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// Decide whether the surface may navigate to `url`. The blank document
/// hosting the offline page is always allowed.
pub fn classify_navigation(policy: &OriginPolicy, url: &str) -> NavigationVerdict {
    if is_engine_error_url(url) {
        NavigationVerdict::LoadFailed
    } else if OriginPolicy::is_blank(url) || policy.allows(url) {
        NavigationVerdict::Allow
    } else {
        NavigationVerdict::Block
    }
}

/// Event for a page-load callback. An engine error page fires both
/// `Started` and `Finished`; only `Started` reports the failure.
pub fn page_load_event(state: PageLoadState, url: String) -> Option<WebViewEvent> {
    if !is_engine_error_url(&url) {
        return Some(WebViewEvent::PageLoad { state, url });
    }
    match state {
        PageLoadState::Started => Some(WebViewEvent::LoadFailed { url }),
        PageLoadState::Finished => None,
    }
}

/// Event for a navigation decision. Error pages are reported by the
/// page-load callback, so the navigation side stays quiet about them.
pub fn navigation_event(verdict: NavigationVerdict, url: String) -> Option<WebViewEvent> {
    match verdict {
        NavigationVerdict::Allow => Some(WebViewEvent::NavigationAllowed { url }),
        NavigationVerdict::Block => Some(WebViewEvent::NavigationBlocked { url }),
        NavigationVerdict::LoadFailed => None,
    }
}

fn push(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let source_url = request.uri().to_string();
            let body = request.body().to_string();
            debug!(source = %source_url, body_len = body.len(), "IPC message from page");
            push(&events, WebViewEvent::IpcMessage { source_url, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Some(event) = page_load_event(state, url) {
                push(&events, event);
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            push(&events, WebViewEvent::TitleChanged { title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        policy: OriginPolicy,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            let verdict = classify_navigation(&policy, &url);
            match verdict {
                NavigationVerdict::Allow => debug!(url = %url, "navigation allowed"),
                NavigationVerdict::Block => warn!(url = %url, "navigation blocked: origin not allowed"),
                NavigationVerdict::LoadFailed => warn!(url = %url, "engine error page"),
            }
            if let Some(event) = navigation_event(verdict, url) {
                push(&events, event);
            }
            verdict != NavigationVerdict::Block
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> OriginPolicy {
        OriginPolicy::new("https://israeliparliament.org/boca/user/", &[]).unwrap()
    }

    #[test]
    fn allows_site_and_blank() {
        let p = policy();
        assert_eq!(
            classify_navigation(&p, "https://israeliparliament.org/boca/user/events"),
            NavigationVerdict::Allow
        );
        assert_eq!(classify_navigation(&p, "about:blank"), NavigationVerdict::Allow);
    }

    #[test]
    fn blocks_foreign_and_scripted() {
        let p = policy();
        for url in [
            "https://evil.com",
            "http://israeliparliament.org/",
            "javascript:alert(1)",
            "data:text/html,<h1>XSS</h1>",
            "file:///etc/passwd",
            "not-a-url",
        ] {
            assert_eq!(classify_navigation(&p, url), NavigationVerdict::Block, "{url}");
        }
    }

    #[test]
    fn engine_error_pages_are_load_failures() {
        let p = policy();
        assert_eq!(
            classify_navigation(&p, "chrome-error://chromewebdata/"),
            NavigationVerdict::LoadFailed
        );
        assert!(is_engine_error_url("about:neterror?e=dnsNotFound"));
        assert!(!is_engine_error_url("https://israeliparliament.org/error"));
    }

    #[test]
    fn failed_load_is_reported_once() {
        let p = policy();
        let url = "chrome-error://chromewebdata/".to_string();
        let events: Vec<WebViewEvent> = [
            navigation_event(classify_navigation(&p, &url), url.clone()),
            page_load_event(PageLoadState::Started, url.clone()),
            page_load_event(PageLoadState::Finished, url.clone()),
        ]
        .into_iter()
        .flatten()
        .collect();
        assert_eq!(events, vec![WebViewEvent::LoadFailed { url }]);
    }

    #[test]
    fn normal_loads_pass_through() {
        let url = "https://israeliparliament.org/boca/user/".to_string();
        assert_eq!(
            page_load_event(PageLoadState::Finished, url.clone()),
            Some(WebViewEvent::PageLoad {
                state: PageLoadState::Finished,
                url: url.clone()
            })
        );
        assert_eq!(
            navigation_event(NavigationVerdict::Block, url.clone()),
            Some(WebViewEvent::NavigationBlocked { url })
        );
    }
}
