//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, ModifiersState, NamedKey};
use winit::window::WindowId;

use super::core::BocaApp;

/// What a key press asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Back,
    Reload,
    DevTools,
}

fn key_action(key: &Key, mods: ModifiersState) -> Option<KeyAction> {
    match key {
        Key::Named(NamedKey::BrowserBack) | Key::Named(NamedKey::Escape) => Some(KeyAction::Back),
        Key::Named(NamedKey::ArrowLeft) if mods.alt_key() => Some(KeyAction::Back),
        Key::Named(NamedKey::F5) | Key::Named(NamedKey::BrowserRefresh) => Some(KeyAction::Reload),
        Key::Named(NamedKey::F12) => Some(KeyAction::DevTools),
        Key::Character(c)
            if (mods.control_key() || mods.super_key()) && c.eq_ignore_ascii_case("r") =>
        {
            Some(KeyAction::Reload)
        }
        _ => None,
    }
}

impl ApplicationHandler for BocaApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.start_services();
        self.start_connectivity_probe();
        self.start_link_listener();
        self.start_signal_listener();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => self.sync_webview_bounds(),

            WindowEvent::Focused(true) => {
                if let Some(handle) = self.view.surface() {
                    if let Err(e) = handle.focus() {
                        tracing::debug!("webview focus failed: {e}");
                    }
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl BocaApp {
    /// Hardware back, from the window or forwarded by the page. Unconsumed
    /// back is dropped; a desktop window does not close on it.
    pub(super) fn handle_back_key(&mut self) {
        if !self.view.handle_back() {
            tracing::debug!("back not consumed");
        }
    }

    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let Some(action) = key_action(&event.logical_key, self.modifiers) else {
            return;
        };
        match action {
            KeyAction::Back => self.handle_back_key(),
            KeyAction::Reload => self.view.reload(),
            KeyAction::DevTools => {
                if self.config.webview.devtools {
                    if let Some(handle) = self.view.surface() {
                        handle.open_devtools();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_keys() {
        let none = ModifiersState::empty();
        assert_eq!(key_action(&Key::Named(NamedKey::BrowserBack), none), Some(KeyAction::Back));
        assert_eq!(key_action(&Key::Named(NamedKey::Escape), none), Some(KeyAction::Back));
        assert_eq!(key_action(&Key::Named(NamedKey::ArrowLeft), none), None);
        assert_eq!(
            key_action(&Key::Named(NamedKey::ArrowLeft), ModifiersState::ALT),
            Some(KeyAction::Back)
        );
    }

    #[test]
    fn reload_keys() {
        let none = ModifiersState::empty();
        assert_eq!(key_action(&Key::Named(NamedKey::F5), none), Some(KeyAction::Reload));
        assert_eq!(
            key_action(&Key::Character("r".into()), ModifiersState::CONTROL),
            Some(KeyAction::Reload)
        );
        assert_eq!(
            key_action(&Key::Character("R".into()), ModifiersState::SUPER),
            Some(KeyAction::Reload)
        );
        assert_eq!(key_action(&Key::Character("r".into()), none), None);
    }
}
