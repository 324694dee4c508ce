//! Window creation and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use boca_webview::{WebViewConfig, WebViewManager};

use super::core::BocaApp;
use super::webview_bridge::window_bounds;

impl BocaApp {
    /// Create the window and mount the webview into it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.site.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(430.0, 860.0))
            .with_min_inner_size(winit::dpi::LogicalSize::new(320.0, 480.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let manager = WebViewManager::new(self.policy.clone());
        let bounds = window_bounds(&window);
        let config = WebViewConfig::from_settings(&self.config.webview);

        let handle = match manager.create(window.as_ref(), bounds, config) {
            Ok(h) => h,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create webview");
                return false;
            }
        };

        self.webviews = Some(manager);
        self.window = Some(window);
        self.view.mount(handle);
        self.update_window_title();
        tracing::info!("Window created and webview mounted");
        true
    }
}
