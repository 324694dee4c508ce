use tracing::{info, warn};

use super::{CalendarEvent, CalendarStore};

/// How an add-to-calendar request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarOutcome {
    /// Event created; carries the store's identifier when it has one.
    Added(Option<String>),
    /// The user (or the platform) refused calendar access.
    PermissionDenied,
    Failed(String),
}

/// Uniform calendar contract over a platform [`CalendarStore`].
pub struct CalendarService<S: CalendarStore> {
    store: S,
}

impl<S: CalendarStore> CalendarService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns `true` when calendar access is usable.
    pub async fn request_permissions(&self) -> bool {
        match self.store.request_permission().await {
            Ok(status) => {
                info!(?status, "calendar permission");
                status.is_allowed()
            }
            Err(e) => {
                warn!("calendar permission request failed: {e}");
                false
            }
        }
    }

    /// Ask for permission, then create the event.
    pub async fn add_event(&self, event: &CalendarEvent) -> CalendarOutcome {
        if !self.request_permissions().await {
            return CalendarOutcome::PermissionDenied;
        }
        match self.store.save_event(event).await {
            Ok(id) => {
                info!(title = %event.title, id = ?id, "event added to calendar");
                CalendarOutcome::Added(id)
            }
            Err(e) => {
                warn!(title = %event.title, "failed to add event: {e}");
                CalendarOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use boca_common::PlatformError;

    use super::*;
    use crate::PermissionStatus;

    struct FakeStore {
        permission: Result<PermissionStatus, ()>,
        fail_save: bool,
        saves: AtomicUsize,
    }

    impl FakeStore {
        fn new(permission: PermissionStatus) -> Self {
            Self {
                permission: Ok(permission),
                fail_save: false,
                saves: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CalendarStore for FakeStore {
        async fn request_permission(&self) -> Result<PermissionStatus, PlatformError> {
            self.permission
                .map_err(|_| PlatformError::CalendarError("no calendar".into()))
        }

        async fn save_event(&self, _event: &CalendarEvent) -> Result<Option<String>, PlatformError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            if self.fail_save {
                Err(PlatformError::CalendarError("disk full".into()))
            } else {
                Ok(Some("evt-1".into()))
            }
        }
    }

    fn event() -> CalendarEvent {
        CalendarEvent {
            title: "Council meeting".into(),
            start_date: "2024-05-01T18:00:00Z".into(),
            end_date: "2024-05-01T19:00:00Z".into(),
            location: None,
            notes: None,
            url: None,
        }
    }

    #[tokio::test]
    async fn adds_when_granted() {
        let service = CalendarService::new(FakeStore::new(PermissionStatus::Granted));
        let outcome = service.add_event(&event()).await;
        assert_eq!(outcome, CalendarOutcome::Added(Some("evt-1".into())));
    }

    #[tokio::test]
    async fn denied_permission_skips_save() {
        let service = CalendarService::new(FakeStore::new(PermissionStatus::Denied));
        assert_eq!(service.add_event(&event()).await, CalendarOutcome::PermissionDenied);
        assert_eq!(service.store().saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn permission_error_reads_as_denied() {
        let mut store = FakeStore::new(PermissionStatus::Granted);
        store.permission = Err(());
        let service = CalendarService::new(store);
        assert!(!service.request_permissions().await);
    }

    #[tokio::test]
    async fn save_failure_is_reported() {
        let mut store = FakeStore::new(PermissionStatus::Provisional);
        store.fail_save = true;
        let service = CalendarService::new(store);
        match service.add_event(&event()).await {
            CalendarOutcome::Failed(msg) => assert!(msg.contains("disk full")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
