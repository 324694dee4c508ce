use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Events produced by background tasks and consumed by the UI loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShellEvent {
    /// The reachability source observed a (possibly unchanged) state.
    Connectivity { connected: bool },
    /// A deep link arrived while the shell was running.
    LinkActivated(String),
    /// The push registration token changed.
    PushTokenRefreshed(String),
    /// A push message arrived while the shell is in the foreground.
    PushMessage { title: String, body: String },
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<ShellEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.sender.subscribe()
    }

    /// A cloneable sender for background tasks.
    pub fn sender(&self) -> broadcast::Sender<ShellEvent> {
        self.sender.clone()
    }

    pub fn publish(&self, event: ShellEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
