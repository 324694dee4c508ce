//! Back-history tracking.
//!
//! The engine does not say whether it can go back, so the shell mirrors
//! the history from the page-load events it sees.

#[derive(Debug, Default)]
pub struct HistoryTracker {
    entries: Vec<String>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page the surface started loading.
    ///
    /// Landing on the entry just below the top counts as a back move,
    /// whoever started it: the shell, a mouse back button or a swipe. A link
    /// to that same page is read the same way, which errs toward reporting
    /// less history than the engine has.
    pub fn record(&mut self, url: &str) {
        let len = self.entries.len();
        if len >= 2 && self.entries[len - 2] == url {
            self.entries.pop();
            return;
        }
        if self.entries.last().map(String::as_str) == Some(url) {
            return;
        }
        self.entries.push(url.to_string());
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Forget everything, e.g. when the offline document replaces the site.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
