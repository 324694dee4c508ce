pub mod alerts;
pub mod errors;
pub mod events;

pub use alerts::{Alert, AlertButtons, AlertChoice, AlertLevel};
pub use errors::{BocaError, BridgeError, ConfigError, DeepLinkError, PlatformError};
pub use events::{EventBus, ShellEvent};

pub type Result<T> = std::result::Result<T, BocaError>;
