//! Collaborator startup on the tokio runtime: calendar and push.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;

use boca_common::{Alert, PlatformError, ShellEvent};
use boca_platform::{
    CalendarEvent, CalendarOutcome, CalendarService, IcsCalendarStore, KeyValueStore,
    LocalPushMessaging, NotificationService, PushMessage,
};

use super::core::BocaApp;
use super::types::ServiceEvent;

/// Collaborators owned by the app root and handed to tasks by `Arc`.
pub(super) struct Services {
    pub(super) calendar: Option<Arc<CalendarService<IcsCalendarStore>>>,
    pub(super) notifications: Option<Arc<NotificationService<LocalPushMessaging>>>,
}

fn calendar_service(
    dir: Result<PathBuf, PlatformError>,
    open_after_save: bool,
) -> Option<Arc<CalendarService<IcsCalendarStore>>> {
    match dir {
        Ok(dir) => Some(Arc::new(CalendarService::new(IcsCalendarStore::new(
            dir,
            open_after_save,
        )))),
        Err(e) => {
            tracing::warn!("No calendar directory, calendar disabled: {e}");
            None
        }
    }
}

impl BocaApp {
    /// Create the shared tokio runtime if it does not exist yet.
    pub(super) fn ensure_runtime(&mut self) -> bool {
        if self.tokio_runtime.is_some() {
            return true;
        }
        match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(rt) => {
                self.tokio_runtime = Some(rt);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to start tokio runtime: {e}");
                false
            }
        }
    }

    /// Each collaborator starts on its own; one failing leaves the others up.
    pub(super) fn start_services(&mut self) {
        if !self.ensure_runtime() {
            return;
        }

        let configured = self.config.calendar.directory.trim();
        let calendar_dir = if configured.is_empty() {
            boca_platform::calendar_dir()
        } else {
            Ok(PathBuf::from(configured))
        };
        let calendar = calendar_service(calendar_dir, self.config.calendar.open_after_save);

        let notifications = if self.config.notifications.enabled {
            self.start_notifications()
        } else {
            tracing::info!("Push notifications disabled");
            None
        };

        self.services = Some(Services {
            calendar,
            notifications,
        });
    }

    /// Permission, token and persistence, then a listener that keeps the
    /// stored token current and surfaces foreground messages.
    fn start_notifications(&mut self) -> Option<Arc<NotificationService<LocalPushMessaging>>> {
        let store = match KeyValueStore::open_default() {
            Ok(s) => Arc::new(s),
            Err(e) => {
                tracing::warn!("Key-value store unavailable, push disabled: {e}");
                return None;
            }
        };
        let key = self.config.notifications.token_key.clone();
        let messaging = LocalPushMessaging::new(Arc::clone(&store), key.clone());
        let service = Arc::new(NotificationService::new(messaging, store, key));

        let mut refresh = service.on_token_refresh();
        let mut messages = service.on_message();
        let events = self.event_bus.sender();
        let task_service = Arc::clone(&service);
        let rt = self.tokio_runtime.as_ref()?;

        rt.spawn(async move {
            task_service.set_background_handler(Arc::new(|msg: &PushMessage| {
                if let Err(e) = boca_platform::notify(&msg.title, &msg.body) {
                    tracing::debug!("background notification not shown: {e}");
                }
            }));
            if task_service.initialize().await {
                tracing::info!("Push notifications initialized");
            }

            loop {
                tokio::select! {
                    token = refresh.recv() => match token {
                        Ok(token) => {
                            task_service.save_token(&token);
                            let _ = events.send(ShellEvent::PushTokenRefreshed(token));
                        }
                        Err(RecvError::Lagged(_)) => continue,
                        Err(RecvError::Closed) => break,
                    },
                    msg = messages.recv() => match msg {
                        Ok(msg) => {
                            if let Err(e) = boca_platform::notify(&msg.title, &msg.body) {
                                tracing::debug!("push notification not shown: {e}");
                            }
                            let _ = events.send(ShellEvent::PushMessage {
                                title: msg.title,
                                body: msg.body,
                            });
                        }
                        Err(RecvError::Lagged(_)) => continue,
                        Err(RecvError::Closed) => break,
                    },
                }
            }
        });

        Some(service)
    }

    /// Hand an event to the calendar collaborator; the outcome comes back
    /// through `service_rx`.
    pub(super) fn add_to_calendar(&mut self, event: CalendarEvent) {
        let calendar = match (&self.services, &self.tokio_runtime) {
            (
                Some(Services {
                    calendar: Some(calendar),
                    ..
                }),
                Some(_),
            ) => Arc::clone(calendar),
            _ => {
                tracing::warn!(title = %event.title, "Calendar unavailable");
                self.prompter_alert(&Alert::calendar_failed());
                return;
            }
        };
        let Some(rt) = &self.tokio_runtime else {
            return;
        };
        let tx = self.service_tx.clone();
        rt.spawn(async move {
            let outcome = calendar.add_event(&event).await;
            let _ = tx.send(ServiceEvent::Calendar {
                title: event.title,
                outcome,
            });
        });
    }

    pub(super) fn handle_service_event(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::Calendar { title, outcome } => match outcome {
                CalendarOutcome::Added(id) => {
                    tracing::info!(title = %title, id = ?id, "Event added to calendar");
                }
                CalendarOutcome::PermissionDenied => {
                    tracing::warn!(title = %title, "Calendar permission denied");
                    self.prompter_alert(&Alert::calendar_failed());
                }
                CalendarOutcome::Failed(reason) => {
                    tracing::warn!(title = %title, reason = %reason, "Calendar event failed");
                    self.prompter_alert(&Alert::calendar_failed());
                }
            },
        }
    }
}
