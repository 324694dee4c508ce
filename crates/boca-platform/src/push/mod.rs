//! Notification collaborator: permission, registration token, and the
//! refresh / message subscription points.

mod local;
mod service;

pub use local::LocalPushMessaging;
pub use service::NotificationService;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use boca_common::PlatformError;

use crate::PermissionStatus;

/// A push message as delivered by the messaging backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

/// Invoked for messages that arrive while the shell is in the background.
pub type BackgroundHandler = Arc<dyn Fn(&PushMessage) + Send + Sync>;

/// A push-messaging backend.
#[async_trait]
pub trait PushMessaging: Send + Sync {
    async fn request_permission(&self) -> Result<PermissionStatus, PlatformError>;

    /// The current registration token.
    async fn token(&self) -> Result<String, PlatformError>;

    fn subscribe_token_refresh(&self) -> broadcast::Receiver<String>;

    /// Messages received while in the foreground.
    fn subscribe_messages(&self) -> broadcast::Receiver<PushMessage>;

    fn set_background_handler(&self, handler: BackgroundHandler);
}
