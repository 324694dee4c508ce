use boca_config::schema::WebViewSettings;

/// Configuration for creating the WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
    /// Keep the engine's persistent cache (prefer cache, fall back to
    /// network). Off means an incognito session.
    pub cache_enabled: bool,
    pub back_navigation_gestures: bool,
    /// Scripts run at the start of every document, in order.
    pub init_scripts: Vec<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: true,
            cache_enabled: true,
            back_navigation_gestures: true,
            init_scripts: boca_shell::bridge::script::init_scripts()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl WebViewConfig {
    /// Create a config from the `[webview]` settings. No initial content:
    /// the view controller loads it on mount.
    pub fn from_settings(settings: &WebViewSettings) -> Self {
        let user_agent = settings.user_agent.trim();
        Self {
            devtools: settings.devtools,
            user_agent: (!user_agent.is_empty()).then(|| user_agent.to_string()),
            clipboard: settings.clipboard,
            autoplay: settings.autoplay,
            cache_enabled: settings.cache_enabled,
            back_navigation_gestures: settings.back_navigation_gestures,
            ..Default::default()
        }
    }
}
