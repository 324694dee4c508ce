//! Webview bounds: the webview fills the window's client area.

use winit::window::Window;

/// The full client area of `window`, in logical coordinates.
pub fn window_bounds(window: &Window) -> wry::Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    logical_rect(size.width, size.height)
}

pub fn logical_rect(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}
