//! Calendar collaborator: permission, then event creation.
//!
//! The contract is uniform across platforms: ask for calendar-write
//! permission, create the event, report success or failure. Platform
//! mechanics live behind [`CalendarStore`].

mod event;
mod ics;
mod service;

pub use event::{parse_timestamp, CalendarEvent};
pub use ics::{render_ics, IcsCalendarStore};
pub use service::{CalendarOutcome, CalendarService};

use async_trait::async_trait;
use boca_common::PlatformError;

use crate::PermissionStatus;

/// A platform calendar that can be written to.
#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Ask for write permission. May prompt the user.
    async fn request_permission(&self) -> Result<PermissionStatus, PlatformError>;

    /// Create the event. Returns the store's identifier for it, if any.
    async fn save_event(&self, event: &CalendarEvent) -> Result<Option<String>, PlatformError>;
}
