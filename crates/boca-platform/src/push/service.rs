use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use super::{BackgroundHandler, PushMessage, PushMessaging};
use crate::storage::KeyValueStore;

/// Owns the push backend and persists its registration token.
pub struct NotificationService<M: PushMessaging> {
    messaging: M,
    store: Arc<KeyValueStore>,
    token_key: String,
}

impl<M: PushMessaging> NotificationService<M> {
    pub fn new(messaging: M, store: Arc<KeyValueStore>, token_key: impl Into<String>) -> Self {
        Self {
            messaging,
            store,
            token_key: token_key.into(),
        }
    }

    pub fn messaging(&self) -> &M {
        &self.messaging
    }

    /// Permission, then token, then persistence. Returns whether a token was
    /// stored.
    pub async fn initialize(&self) -> bool {
        if !self.request_permission().await {
            info!("push notifications not permitted");
            return false;
        }
        let Some(token) = self.fcm_token().await else {
            return false;
        };
        self.save_token(&token)
    }

    pub async fn request_permission(&self) -> bool {
        match self.messaging.request_permission().await {
            Ok(status) => {
                debug!(?status, "notification permission");
                status.is_allowed()
            }
            Err(e) => {
                warn!("notification permission request failed: {e}");
                false
            }
        }
    }

    pub async fn fcm_token(&self) -> Option<String> {
        match self.messaging.token().await {
            Ok(token) => Some(token),
            Err(e) => {
                warn!("failed to get push token: {e}");
                None
            }
        }
    }

    pub fn save_token(&self, token: &str) -> bool {
        match self.store.set(&self.token_key, token) {
            Ok(()) => {
                info!(key = %self.token_key, "push token saved");
                true
            }
            Err(e) => {
                warn!("failed to save push token: {e}");
                false
            }
        }
    }

    pub fn stored_token(&self) -> Option<String> {
        self.store.get(&self.token_key).unwrap_or_else(|e| {
            warn!("failed to read push token: {e}");
            None
        })
    }

    pub fn on_token_refresh(&self) -> broadcast::Receiver<String> {
        self.messaging.subscribe_token_refresh()
    }

    pub fn on_message(&self) -> broadcast::Receiver<PushMessage> {
        self.messaging.subscribe_messages()
    }

    pub fn set_background_handler(&self, handler: BackgroundHandler) {
        self.messaging.set_background_handler(handler);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use boca_common::PlatformError;

    use super::*;
    use crate::PermissionStatus;

    struct FakeMessaging {
        permission: PermissionStatus,
        token: Option<String>,
        refresh: broadcast::Sender<String>,
        messages: broadcast::Sender<PushMessage>,
        handler: Mutex<Option<BackgroundHandler>>,
    }

    impl FakeMessaging {
        fn new(permission: PermissionStatus, token: Option<&str>) -> Self {
            Self {
                permission,
                token: token.map(String::from),
                refresh: broadcast::channel(4).0,
                messages: broadcast::channel(4).0,
                handler: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl PushMessaging for FakeMessaging {
        async fn request_permission(&self) -> Result<PermissionStatus, PlatformError> {
            Ok(self.permission)
        }

        async fn token(&self) -> Result<String, PlatformError> {
            self.token
                .clone()
                .ok_or_else(|| PlatformError::NotificationError("not registered".into()))
        }

        fn subscribe_token_refresh(&self) -> broadcast::Receiver<String> {
            self.refresh.subscribe()
        }

        fn subscribe_messages(&self) -> broadcast::Receiver<PushMessage> {
            self.messages.subscribe()
        }

        fn set_background_handler(&self, handler: BackgroundHandler) {
            *self.handler.lock().unwrap() = Some(handler);
        }
    }

    fn store() -> (tempfile::TempDir, Arc<KeyValueStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(KeyValueStore::new(dir.path().join("storage.json")));
        (dir, store)
    }

    #[tokio::test]
    async fn initialize_persists_token() {
        let (_dir, store) = store();
        let service = NotificationService::new(
            FakeMessaging::new(PermissionStatus::Granted, Some("tok-1")),
            store.clone(),
            "fcm_token",
        );
        assert!(service.initialize().await);
        assert_eq!(store.get("fcm_token").unwrap().as_deref(), Some("tok-1"));
        assert_eq!(service.stored_token().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn denied_permission_stores_nothing() {
        let (_dir, store) = store();
        let service = NotificationService::new(
            FakeMessaging::new(PermissionStatus::Denied, Some("tok-1")),
            store,
            "fcm_token",
        );
        assert!(!service.initialize().await);
        assert_eq!(service.stored_token(), None);
    }

    #[tokio::test]
    async fn token_failure_is_none() {
        let (_dir, store) = store();
        let service = NotificationService::new(
            FakeMessaging::new(PermissionStatus::Provisional, None),
            store,
            "fcm_token",
        );
        assert_eq!(service.fcm_token().await, None);
        assert!(!service.initialize().await);
    }

    #[tokio::test]
    async fn subscriptions_pass_through() {
        let (_dir, store) = store();
        let service = NotificationService::new(
            FakeMessaging::new(PermissionStatus::Granted, Some("t")),
            store,
            "fcm_token",
        );
        let mut refresh = service.on_token_refresh();
        service.messaging().refresh.send("t2".into()).unwrap();
        assert_eq!(refresh.recv().await.unwrap(), "t2");

        service.set_background_handler(Arc::new(|_msg: &PushMessage| {}));
        assert!(service.messaging().handler.lock().unwrap().is_some());
    }
}
