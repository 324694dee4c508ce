//! Shared fixtures for the app state tests.

use std::sync::{Arc, Mutex};

use boca_common::{Alert, AlertChoice};
use boca_config::BocaConfig;
use boca_shell::{DeepLinkRouter, OriginPolicy, Prompter};

use super::core::BocaApp;

/// Records alert titles and answers every prompt with `answer`.
struct RecordingPrompter {
    titles: Arc<Mutex<Vec<String>>>,
    answer: AlertChoice,
}

impl Prompter for RecordingPrompter {
    fn prompt(&mut self, alert: &Alert) -> AlertChoice {
        self.titles.lock().unwrap().push(alert.title.clone());
        self.answer
    }
}

/// A fresh app with default config whose alerts are recorded instead of
/// shown.
pub(super) fn app() -> (BocaApp, Arc<Mutex<Vec<String>>>) {
    let config = BocaConfig::default();
    let policy = OriginPolicy::from_config(&config.site).unwrap();
    let router = DeepLinkRouter::from_config(&config, policy.clone());
    let start = config.site.start_url().to_string();
    let mut app = BocaApp::new(config, policy, router, start);
    let titles = Arc::new(Mutex::new(Vec::new()));
    app.prompter = Box::new(RecordingPrompter {
        titles: Arc::clone(&titles),
        answer: AlertChoice::Cancel,
    });
    (app, titles)
}
