use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::history::HistoryTracker;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the WebView as a child of the given window, positioned at
    /// `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_incognito(!config.cache_enabled)
            .with_back_forward_navigation_gestures(config.back_navigation_gestures)
            .with_focused(true);

        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script);
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));
        builder = Self::attach_title_handler(builder, Arc::clone(&events));
        builder =
            Self::attach_navigation_handler(builder, Arc::clone(&events), self.policy().clone());

        // Starts blank; the view controller loads the content on mount.
        let webview = builder
            .with_html("<html><body></body></html>")
            .build_as_child(window)?;

        debug!(cache = config.cache_enabled, "WebView created");

        Ok(WebViewHandle {
            webview,
            history: HistoryTracker::new(),
        })
    }
}
