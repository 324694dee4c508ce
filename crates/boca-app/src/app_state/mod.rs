//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the view controller, the webview, and
//! the background tasks (reachability probe, link listener, collaborators).

mod connectivity;
mod core;
mod deep_links;
mod dialogs;
mod event_handler;
mod init;
mod polling;
mod services;
mod shutdown;
mod title;
mod types;
mod webview_bridge;

#[cfg(test)]
mod test_support;

pub use core::BocaApp;
