use serde::Serialize;

/// Navigation state of the embedded surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub current_url: String,
    pub can_go_back: bool,
    pub is_loading: bool,
}

impl ViewState {
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            current_url: start_url.into(),
            can_go_back: false,
            is_loading: false,
        }
    }
}

/// What the surface is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Content {
    Live,
    Offline,
}
