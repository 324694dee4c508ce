//! Bridge between the winit window, the webview, and the view controller.
//!
//! Handles bounds syncing, webview event polling, and dispatch of bridge
//! actions posted by the page.

mod bounds;
mod ipc_dispatch;
mod lifecycle;

pub(super) use bounds::window_bounds;
