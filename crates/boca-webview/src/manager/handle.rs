use boca_common::BocaError;
use boca_shell::Surface;
use wry::WebView;

use crate::history::HistoryTracker;

/// Handle to the embedded WebView.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) history: HistoryTracker,
}

fn engine_err(e: wry::Error) -> BocaError {
    BocaError::WebView(e.to_string())
}

impl WebViewHandle {
    /// Record a page the engine started loading. Returns whether back
    /// navigation is now possible.
    pub fn record_navigation(&mut self, url: &str) -> bool {
        if !boca_shell::OriginPolicy::is_blank(url) {
            self.history.record(url);
        }
        self.history.can_go_back()
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }
}

impl Surface for WebViewHandle {
    fn load_url(&mut self, url: &str) -> Result<(), BocaError> {
        self.webview.load_url(url).map_err(engine_err)
    }

    /// The offline document replaces the site, so the mirrored history is
    /// dropped with it.
    fn load_html(&mut self, html: &str) -> Result<(), BocaError> {
        self.history.clear();
        self.webview.load_html(html).map_err(engine_err)
    }

    fn reload(&mut self) -> Result<(), BocaError> {
        self.evaluate_script("window.location.reload();")
    }

    fn go_back(&mut self) -> Result<(), BocaError> {
        if !self.history.can_go_back() {
            return Err(BocaError::WebView("no history to go back to".into()));
        }
        self.evaluate_script("window.history.back();")
    }

    fn evaluate_script(&mut self, script: &str) -> Result<(), BocaError> {
        self.webview.evaluate_script(script).map_err(engine_err)
    }
}
