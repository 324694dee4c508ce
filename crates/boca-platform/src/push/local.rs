use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, info};

use boca_common::PlatformError;

use super::{BackgroundHandler, PushMessage, PushMessaging};
use crate::notifications::notifications_supported;
use crate::storage::KeyValueStore;
use crate::PermissionStatus;

/// Desktop push backend.
///
/// There is no remote messaging service on desktop. The registration token is
/// a locally generated identifier that survives restarts, and messages are
/// injected with [`deliver`](Self::deliver).
pub struct LocalPushMessaging {
    store: Arc<KeyValueStore>,
    token_key: String,
    token: Mutex<Option<String>>,
    refresh: broadcast::Sender<String>,
    messages: broadcast::Sender<PushMessage>,
    background: Mutex<Option<BackgroundHandler>>,
}

impl LocalPushMessaging {
    pub fn new(store: Arc<KeyValueStore>, token_key: impl Into<String>) -> Self {
        Self {
            store,
            token_key: token_key.into(),
            token: Mutex::new(None),
            refresh: broadcast::channel(16).0,
            messages: broadcast::channel(64).0,
            background: Mutex::new(None),
        }
    }

    /// Replace the token and broadcast it to refresh subscribers.
    pub fn rotate_token(&self) -> Result<String, PlatformError> {
        let token = uuid::Uuid::new_v4().to_string();
        *self.token_slot()? = Some(token.clone());
        let receivers = self.refresh.send(token.clone()).unwrap_or(0);
        info!(receivers, "push token rotated");
        Ok(token)
    }

    /// Hand a message to foreground subscribers, or to the background
    /// handler when the shell is not focused.
    pub fn deliver(&self, message: PushMessage, foreground: bool) -> Result<(), PlatformError> {
        if foreground {
            let receivers = self.messages.send(message).unwrap_or(0);
            debug!(receivers, "foreground push message delivered");
            return Ok(());
        }
        let handler = self
            .background
            .lock()
            .map_err(|_| PlatformError::NotificationError("handler lock poisoned".into()))?
            .clone();
        match handler {
            Some(handler) => {
                handler(&message);
                Ok(())
            }
            None => {
                debug!(title = %message.title, "no background handler; message dropped");
                Ok(())
            }
        }
    }

    fn token_slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, PlatformError> {
        self.token
            .lock()
            .map_err(|_| PlatformError::NotificationError("token lock poisoned".into()))
    }
}

#[async_trait]
impl PushMessaging for LocalPushMessaging {
    async fn request_permission(&self) -> Result<PermissionStatus, PlatformError> {
        Ok(if notifications_supported() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        })
    }

    async fn token(&self) -> Result<String, PlatformError> {
        let mut slot = self.token_slot()?;
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }
        let token = match self.store.get(&self.token_key)? {
            Some(saved) if !saved.is_empty() => saved,
            _ => uuid::Uuid::new_v4().to_string(),
        };
        *slot = Some(token.clone());
        Ok(token)
    }

    fn subscribe_token_refresh(&self) -> broadcast::Receiver<String> {
        self.refresh.subscribe()
    }

    fn subscribe_messages(&self) -> broadcast::Receiver<PushMessage> {
        self.messages.subscribe()
    }

    fn set_background_handler(&self, handler: BackgroundHandler) {
        if let Ok(mut slot) = self.background.lock() {
            *slot = Some(handler);
        }
    }
}
