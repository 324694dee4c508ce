//! `wry`-backed embedded surface for the Boca shell.
//!
//! Wraps the `wry` crate to provide:
//! - The single child WebView that shows the site or the offline document
//! - Page-to-shell IPC capture (with the sending document's URL)
//! - Navigation allow-listing against the shell's origin policy
//! - Back-history tracking, which the engine does not expose

pub mod events;
pub mod history;
pub mod manager;

pub use events::{PageLoadState, WebViewEvent};
pub use history::HistoryTracker;
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
