//! Window title: page title, site title and a loading marker.

use super::core::BocaApp;

const LOADING_MARKER: &str = "Loading…";

/// `<page> - <site>`, the site alone when the page has no title of its own,
/// and a trailing marker while the view is loading.
pub(super) fn compose_title(site: &str, page: &str, loading: bool) -> String {
    let page = page.trim();
    let mut title = if page.is_empty() || page == site {
        site.to_string()
    } else {
        format!("{page} - {site}")
    };
    if loading {
        title.push_str(" (");
        title.push_str(LOADING_MARKER);
        title.push(')');
    }
    title
}

impl BocaApp {
    /// Reflect the page title and loading state in the window title.
    /// Only touches the window when the text changes.
    pub(super) fn update_window_title(&mut self) {
        let title = compose_title(
            &self.config.site.title,
            &self.page_title,
            self.view.state().is_loading,
        );
        if title == self.window_title {
            return;
        }
        if let Some(window) = &self.window {
            window.set_title(&title);
        }
        self.window_title = title;
    }
}
